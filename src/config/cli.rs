//! Command-line options for the `ip_timezone` binary.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::constants::{GEOIPV6_DATABASE_ENV, GEOIP_DATABASE_ENV, GEOIP_VERSION_ENV};
use crate::config::types::{GeoIpConfig, LogFormat, LogLevel};
use crate::error_handling::ConfigurationError;
use crate::resolver::Field;

/// Command-line options.
///
/// Database settings fall back to `GEOIP_VERSION`, `GEOIP_DATABASE`,
/// `GEOIPV6_DATABASE` and `GEOIP_DATA_DIR` when not given.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_timezone",
    about = "Resolve IP addresses to timezone, country, city or full location using offline GeoIP databases.",
    version
)]
pub struct Cli {
    /// Candidate addresses, in priority order. Each may be a comma-separated
    /// forwarding header such as "203.0.113.7, 10.0.0.1".
    #[arg(value_name = "ADDRESSES", required_unless_present = "info")]
    pub addresses: Vec<String>,

    /// Database schema generation: 1 (legacy .dat pair) or 2 (MaxMind .mmdb)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub schema: Option<u8>,

    /// Primary database path (IPv4 .dat for schema 1, .mmdb for schema 2)
    #[arg(long, value_parser)]
    pub database: Option<PathBuf>,

    /// IPv6 legacy database path (schema 1 only)
    #[arg(long = "database-v6", value_parser)]
    pub database_v6: Option<PathBuf>,

    /// Which value to resolve
    #[arg(long, value_enum, default_value = "timezone")]
    pub field: Field,

    /// Print metadata about the loaded database
    #[arg(long)]
    pub info: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Cli {
    /// All candidates from every argument, in order.
    pub fn candidates(&self) -> Vec<&str> {
        self.addresses
            .iter()
            .flat_map(|header| crate::address::split_candidates(header))
            .collect()
    }

    /// Builds the database configuration, command-line options taking
    /// precedence over the environment.
    pub fn geoip_config(&self) -> Result<GeoIpConfig, ConfigurationError> {
        self.geoip_config_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Cli::geoip_config`] with an arbitrary variable source.
    pub fn geoip_config_with<F>(&self, var: F) -> Result<GeoIpConfig, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        GeoIpConfig::from_vars(|key| {
            let overridden = match key {
                GEOIP_VERSION_ENV => self.schema.map(|s| s.to_string()),
                GEOIP_DATABASE_ENV => self.database.as_deref().map(path_string),
                GEOIPV6_DATABASE_ENV => self.database_v6.as_deref().map(path_string),
                _ => None,
            };
            overridden.or_else(|| var(key))
        })
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
