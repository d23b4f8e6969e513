//! # flowdeck
//!
//! Entry point for the flowdeck CLI.
//!
//! Configuration is read from `--config` when given, then overlaid with
//! `FLOWDECK_*` environment variables. Logs go to stderr so command output
//! on stdout can be piped.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flowdeck::cli::Cli;
use flowdeck::commands::execute_command;
use flowdeck::config::FlowdeckConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(&config.log_filter);
    debug!(?config, "configuration loaded");

    let output = execute_command(cli.command, &config)?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

/// Load the configuration file (if any) and apply environment overrides.
fn load_config(cli: &Cli) -> Result<FlowdeckConfig> {
    let base = match cli.config.as_deref() {
        Some(path) => FlowdeckConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => FlowdeckConfig::default(),
    };
    Ok(base.with_env_overrides())
}

/// Initialize tracing, preferring `RUST_LOG` over the configured filter.
fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
