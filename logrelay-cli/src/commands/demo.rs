//! `demo` command: install a provider and log through every lookup kind.

use std::path::PathBuf;

use clap::Args;
use logrelay::log::{LogLevel, Logger, LoggerHandle};
use logrelay::registry::{ProviderRegistry, RegistryError};
use logrelay::util::split_camel_case;
use logrelay::{log_debug, log_error, log_info, log_warn};

use crate::error::CliError;
use crate::runner::{CliRunner, Overrides};

/// Arguments for `demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Provider to install (noop, memory, console, tracing)
    #[arg(long)]
    pub provider: Option<String>,

    /// Minimum level for the provider
    #[arg(long)]
    pub level: Option<String>,
}

/// Sample component that names its logger after itself.
pub struct DemoService<'a> {
    registry: &'a ProviderRegistry,
}

impl<'a> DemoService<'a> {
    pub fn new(registry: &'a ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Ask the registry for a logger named after the calling type.
    #[inline(never)]
    pub fn logger(&self) -> Result<LoggerHandle, RegistryError> {
        self.registry.automatic_logger()
    }

    /// Emit one record per level through the automatic logger.
    pub fn run(&self) -> Result<String, CliError> {
        let logger = self.logger()?;
        for level in LogLevel::ALL {
            logger.log(level, format_args!("demo record at {}", level.as_str()));
        }
        Ok(logger.name().to_string())
    }
}

pub fn run(args: DemoArgs, config: Option<PathBuf>) -> Result<(), CliError> {
    let overrides = Overrides {
        provider: args.provider,
        level: args.level,
    };
    let runner = CliRunner::new(config.as_deref(), &overrides)?;
    let registry = runner.registry();

    println!("Host context: {}", registry.host_context());
    println!(
        "Configured provider: {} (minimum {})",
        runner.config().logging.provider,
        runner.config().logging.level
    );
    println!();

    let named = registry.logger("logrelay.demo")?;
    log_info!(named, "named logger '{}' ready", named.name());
    log_debug!(named, "debug details are filtered below the minimum level");

    let typed = registry.logger_for::<DemoService<'static>>();
    log_warn!(typed, "typed logger '{}' ready", typed.name());

    let automatic = DemoService::new(registry).run()?;
    let active = registry.provider();
    println!("Automatic logger resolved to: {}", automatic);
    println!("Active backend: {}", split_camel_case(active.kind()));

    match registry.log_to_console() {
        Err(e) => {
            log_error!(named, "late reconfiguration rejected: {}", e);
            println!("Reconfiguration refused: {}", e);
        }
        Ok(()) => println!("Reconfiguration unexpectedly accepted"),
    }

    if let Some(memory) = runner.memory() {
        println!();
        println!("Retained records ({}):", memory.len());
        for record in memory.records() {
            println!("  {}", record);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logrelay::host::HostContext;
    use logrelay::log::InMemoryProvider;
    use std::sync::Arc;

    #[test]
    fn test_demo_service_names_logger_after_itself() {
        let registry = ProviderRegistry::new(HostContext::Hosted);
        let memory = InMemoryProvider::new(LogLevel::Info);
        registry.set_provider(Arc::new(memory.clone())).unwrap();

        let name = DemoService::new(&registry).run().unwrap();

        assert_eq!(name, "logrelay_cli::commands::demo::DemoService");
        assert_eq!(memory.records_for(&name).len(), 4);
        assert!(registry.is_locked());
    }
}
