//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (init, show, path)
//! - [`demo`] - Install a provider and log through every lookup kind
//! - [`providers`] - List available providers

pub mod config;
pub mod demo;
pub mod providers;
