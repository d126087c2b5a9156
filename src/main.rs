//! Course material generator CLI

use clap::Parser;

use coursegen::cli::Cli;
use coursegen::config::Config;
use coursegen::errors::print_error;
use coursegen::pipeline;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error("Failed to load configuration", &e);
            std::process::exit(1);
        }
    };

    if let Err(e) = pipeline::run(&config) {
        print_error("Generation failed", &e);
        std::process::exit(1);
    }
}
