//! Error types and reporting utilities

use std::path::PathBuf;

use colored::*;
use thiserror::Error;

/// Conditions that abort the whole run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("no module headings found in {0}")]
    NoHeadings(PathBuf),

    #[error("no modules recovered from outline {0}")]
    NoModules(PathBuf),
}

/// Print a formatted error message with its chain of causes
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    let mut current = error.source();
    while let Some(cause) = current {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
        current = std::error::Error::source(cause);
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

/// Print a progress line for a completed step
pub fn print_step(message: &str) {
    println!("{} {}", "→".cyan(), message);
}
