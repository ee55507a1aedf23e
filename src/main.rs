//! Plugreg - AstrBot marketplace registry maintenance
//!
//! A command line tool that repairs self-reported plugin metadata, enriches
//! it with live repository data from GitHub, and merges the result into the
//! marketplace's plugins.json registry, newest entries first.

use clap::Parser;

mod cli;
mod commands;
mod enrich;
mod error;
mod metadata;
mod registry;
mod updater;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Update(args) => commands::update::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
