//! Run configuration with layered defaults
//!
//! One immutable value built at process start: built-in defaults, overlaid
//! by an optional `coursegen.toml`, overlaid by command-line arguments. All
//! components receive it explicitly; nothing reads paths ambiently.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

const CONFIG_FILE: &str = "coursegen.toml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Guide document with the heading outline
    pub guide: PathBuf,

    /// Slide content document with flat bullet lists
    pub slide_content: PathBuf,

    /// Merged slide-stub output
    pub out_slides: PathBuf,

    /// Course outline output
    pub out_outline: PathBuf,

    /// Titled slide content output
    pub out_titled: PathBuf,

    /// Website topics output
    pub out_topics: PathBuf,

    /// Website agenda output
    pub out_agenda: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            guide: PathBuf::from("course-guide.md"),
            slide_content: PathBuf::from("slide-content.md"),
            out_slides: PathBuf::from("output/slides.md"),
            out_outline: PathBuf::from("output/course-outline.md"),
            out_titled: PathBuf::from("output/slides-with-titles.md"),
            out_topics: PathBuf::from("output/website-topics.md"),
            out_agenda: PathBuf::from("output/website-agenda.md"),
        }
    }
}

/// Optional overrides read from `coursegen.toml`
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    guide: Option<PathBuf>,
    slide_content: Option<PathBuf>,
    out_slides: Option<PathBuf>,
    out_outline: Option<PathBuf>,
    out_titled: Option<PathBuf>,
    out_topics: Option<PathBuf>,
    out_agenda: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from all sources with proper precedence
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = Config::default();

        if let Some(file_config) = Self::load_from_file()? {
            config.merge(file_config);
        }

        // CLI arguments win over everything
        let overrides = [
            (&mut config.guide, &cli.guide),
            (&mut config.slide_content, &cli.slide_content),
            (&mut config.out_slides, &cli.out_slides),
            (&mut config.out_outline, &cli.out_outline),
            (&mut config.out_titled, &cli.out_titled),
            (&mut config.out_topics, &cli.out_topics),
            (&mut config.out_agenda, &cli.out_agenda),
        ];
        for (slot, arg) in overrides {
            if let Some(path) = arg {
                *slot = path.clone();
            }
        }

        Ok(config)
    }

    fn load_from_file() -> Result<Option<PartialConfig>> {
        let path = PathBuf::from(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", CONFIG_FILE))?;
        let config: PartialConfig =
            toml::from_str(&contents).with_context(|| format!("Failed to parse {}", CONFIG_FILE))?;

        Ok(Some(config))
    }

    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.guide {
            self.guide = val;
        }
        if let Some(val) = other.slide_content {
            self.slide_content = val;
        }
        if let Some(val) = other.out_slides {
            self.out_slides = val;
        }
        if let Some(val) = other.out_outline {
            self.out_outline = val;
        }
        if let Some(val) = other.out_titled {
            self.out_titled = val;
        }
        if let Some(val) = other.out_topics {
            self.out_topics = val;
        }
        if let Some(val) = other.out_agenda {
            self.out_agenda = val;
        }
    }

    /// All output paths, in write order
    pub fn outputs(&self) -> [&PathBuf; 5] {
        [&self.out_outline, &self.out_slides, &self.out_topics, &self.out_agenda, &self.out_titled]
    }
}
