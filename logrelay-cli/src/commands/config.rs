//! Configuration management CLI commands.
//!
//! Provides `config init`, `config show` and `config path`.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use logrelay::config::{config_file_path, LogRelayConfig};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file if none exists
    Init {
        /// Overwrite an existing file with defaults
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand against `path` (or the default location).
pub fn run(command: ConfigCommands, path: Option<&Path>) -> Result<(), CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
    match command {
        ConfigCommands::Init { force } => run_init(&path, force),
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_init(path: &Path, force: bool) -> Result<(), CliError> {
    let existed = path.exists();
    let written: PathBuf = if force {
        LogRelayConfig::default().save_to(path)?;
        path.to_path_buf()
    } else {
        LogRelayConfig::ensure_exists_at(path)?
    };

    if existed && !force {
        println!("Configuration already exists: {}", written.display());
    } else {
        println!("Wrote default configuration: {}", written.display());
    }
    Ok(())
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = LogRelayConfig::load_from(path)?;
    for line in render(&config) {
        println!("{}", line);
    }
    Ok(())
}

/// `section.key = value` lines for every setting.
fn render(config: &LogRelayConfig) -> Vec<String> {
    let modules = if config.resolver.infrastructure_modules.is_empty() {
        "(none)".to_string()
    } else {
        config.resolver.infrastructure_modules.join(", ")
    };
    vec![
        format!("logging.provider = {}", config.logging.provider),
        format!("logging.level = {}", config.logging.level.as_str()),
        format!("memory.capacity = {}", config.memory.capacity),
        format!("console.stream = {}", config.console.stream.as_str()),
        format!("resolver.infrastructure_modules = {}", modules),
    ]
}
