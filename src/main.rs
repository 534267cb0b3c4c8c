//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_timezone` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - JSON output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::process;

use ip_timezone::initialization::init_logger_with;
use ip_timezone::{Cli, Resolver};

fn main() -> Result<()> {
    // Load GEOIP_* settings from a .env file in the current directory or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    let log_level = cli.log_level.clone();
    let log_format = cli.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_timezone error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<serde_json::Value> {
    let config = cli
        .geoip_config()
        .context("Invalid GeoIP configuration")?;
    let resolver = Resolver::shared(config);

    if cli.info {
        let handle = resolver
            .loader()
            .ensure_loaded(resolver.config())
            .context("Failed to load GeoIP database")?;
        return Ok(serde_json::to_value(handle.metadata())?);
    }

    let candidates = cli.candidates();
    let resolution = resolver
        .resolve(&candidates, cli.field)
        .with_context(|| format!("Failed to resolve {}", cli.field))?;

    Ok(json!({
        "candidates": candidates,
        "result": resolution,
    }))
}
