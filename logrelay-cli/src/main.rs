//! LogRelay CLI - Command-line interface
//!
//! Exercises the provider registry: configuration files, provider selection
//! and automatic logger naming.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::demo::DemoArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "logrelay-cli")]
#[command(version = logrelay::VERSION)]
#[command(about = "Configure-once logging provider registry", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.logrelay/config.ini)
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a provider and log through named, typed and automatic loggers
    Demo(DemoArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List available providers
    Providers,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Demo(args) => commands::demo::run(args, cli.config_path),
        Commands::Config { command } => commands::config::run(command, cli.config_path.as_deref()),
        Commands::Providers => {
            commands::providers::run();
            Ok(())
        }
    }
}
