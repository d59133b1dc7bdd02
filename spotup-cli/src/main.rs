mod commands;
mod config;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::SpotupConfig;

#[derive(Parser)]
#[command(name = "spotup")]
#[command(about = "Discover, create and join nearby events from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seeded event list and exit
    Events,
    /// Print the seeded map and exit
    Map,
    /// Show the config file path and current values
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SpotupConfig::load()?;

    match cli.command {
        // No subcommand: run the interactive demo session.
        None => commands::app::run(&config),
        Some(Commands::Events) => commands::events::run(),
        Some(Commands::Map) => commands::map::run(&config),
        Some(Commands::Config) => commands::config::run(&config),
    }
}
