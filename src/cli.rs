//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "coursegen")]
#[command(about = "Derives course outlines, slide stubs, and website lists from markdown guides", long_about = None)]
#[command(
    after_help = "Arguments omitted from the command line fall back to coursegen.toml, then to built-in defaults."
)]
pub struct Cli {
    /// Guide document with the heading outline [default: course-guide.md]
    pub guide: Option<PathBuf>,

    /// Slide content document with flat bullet lists [default: slide-content.md]
    pub slide_content: Option<PathBuf>,

    /// Merged slide-stub output [default: output/slides.md]
    pub out_slides: Option<PathBuf>,

    /// Course outline output [default: output/course-outline.md]
    pub out_outline: Option<PathBuf>,

    /// Titled slide content output [default: output/slides-with-titles.md]
    pub out_titled: Option<PathBuf>,

    /// Website topics output [default: output/website-topics.md]
    pub out_topics: Option<PathBuf>,

    /// Website agenda output [default: output/website-agenda.md]
    pub out_agenda: Option<PathBuf>,
}
