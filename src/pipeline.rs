//! Pipeline orchestration
//!
//! Runs the whole transform: extract headings, build and re-parse the
//! outline, parse slide content, then write the four projections. Each
//! artifact is written independently; a write failure aborts the run but
//! leaves earlier artifacts on disk.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::doc::extract_course_title;
use crate::errors::{print_step, PipelineError};
use crate::headings::extract_headings_from_file;
use crate::outline::{build_outline, parse_outline_from_file};
use crate::patterns::PatternRegistry;
use crate::project::{course_topics, merge_slides, slides_with_titles, website_agenda};
use crate::slides::parse_slide_content_from_file;

/// Run the full transform described by the configuration
pub fn run(config: &Config) -> Result<()> {
    let registry = PatternRegistry::new();

    for input in [&config.guide, &config.slide_content] {
        if !input.exists() {
            return Err(PipelineError::MissingInput(input.clone()).into());
        }
    }

    let headings = extract_headings_from_file(&config.guide, &registry);
    if headings.is_empty() {
        return Err(PipelineError::NoHeadings(config.guide.clone()).into());
    }
    print_step(&format!("Found {} headings in {}", headings.len(), config.guide.display()));

    // Output directories are created once, before any write
    for output in config.outputs() {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
        }
    }

    let course_title = extract_course_title(&config.guide);

    let outline = build_outline(&headings, &course_title);
    write_artifact(&config.out_outline, &outline)?;

    // The outline round-trips through its file form; downstream passes see
    // exactly what a reader of the file would
    let modules = parse_outline_from_file(&config.out_outline, &registry);
    if modules.is_empty() {
        return Err(PipelineError::NoModules(config.out_outline.clone()).into());
    }

    let slides = parse_slide_content_from_file(&config.slide_content, &registry);

    let merged = merge_slides(&course_title, &modules, &slides, &config.guide, &registry);
    write_artifact(&config.out_slides, &merged)?;

    let topics = course_topics(&course_title, &modules, &slides, &registry);
    write_artifact(&config.out_topics, &topics)?;

    let agenda = website_agenda(&course_title, &modules);
    write_artifact(&config.out_agenda, &agenda)?;

    let titled = slides_with_titles(&course_title, &modules, &slides, &registry);
    write_artifact(&config.out_titled, &titled)?;

    Ok(())
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    print_step(&format!("Wrote {}", path.display()));
    Ok(())
}
