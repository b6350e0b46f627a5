// Saviynt Provider - infrastructure-as-code for Saviynt identity governance
// Copyright (c) 2025 Saviynt Provider Contributors
// Licensed under the MIT License

use clap::Parser;
use saviynt_provider::cli::Cli;
use saviynt_provider::config::{load_config, LoggingConfig};
use saviynt_provider::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // File logging needs a loadable config; fall back to the console otherwise
    let logging_config = load_config(&cli.config)
        .map(|c| c.logging)
        .unwrap_or_else(|_| LoggingConfig::console_only("info"));
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| logging_config.level.clone());
    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Saviynt provider");

    let exit_code = match cli.execute().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}
