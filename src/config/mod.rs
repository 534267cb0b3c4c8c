//! Configuration and constants.
//!
//! This module provides:
//! - Setting names, default file names and fallback values
//! - The GeoIP database configuration and its validation
//! - Command-line options

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Cli;
pub use constants::*;
pub use types::{GeoIpConfig, LogFormat, LogLevel, SchemaVersion};
