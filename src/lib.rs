//! Course material generation library
//!
//! Converts a markdown guide (hierarchical heading outline) and a slide
//! content file (flat bullet lists) into derived artifacts: a course
//! outline, merged slide stubs, titled slide content, a website topics
//! list, and a website agenda.

pub mod cli;
pub mod config;
pub mod details;
pub mod doc;
pub mod errors;
pub mod flatten;
pub mod headings;
pub mod outline;
pub mod patterns;
pub mod pipeline;
pub mod project;
pub mod slides;

pub use config::Config;
pub use errors::PipelineError;
pub use headings::Heading;
pub use outline::{ModuleMap, OutlineModule};
pub use patterns::PatternRegistry;
pub use slides::{SlideContent, SlideModule};

/// Re-export common error types
pub use anyhow::{Error, Result};
