//! Contact Bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout.

use anyhow::{Context, Result};
use contact_bot::{repl, Config, ContactBot};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut bot = ContactBot::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut bot, stdin.lock(), stdout.lock()).context("console I/O failed")?;

    info!("Contact bot shutdown complete");
    Ok(())
}
