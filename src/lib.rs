//! ip_timezone library: offline IP geolocation with fallback defaults
//!
//! This library resolves client IP addresses (usually taken from a proxy
//! forwarding header) to a timezone, country, city or full location record
//! using either a pair of legacy GeoIP City `.dat` files (schema 1) or a
//! MaxMind GeoLite2 City `.mmdb` database (schema 2).
//!
//! # Example
//!
//! ```no_run
//! use ip_timezone::{Field, GeoIpConfig, Resolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeoIpConfig::schema_v2("/var/lib/geoip/GeoLite2-City.mmdb");
//! let resolver = Resolver::new(config);
//!
//! // Private addresses are skipped, 203.0.113.7 is looked up
//! let tz = resolver.resolve_timezone(&["10.0.0.1", "203.0.113.7"])?;
//! let country = resolver.resolve_header("10.0.0.1, 203.0.113.7", Field::Country)?;
//! println!("{:?} {:?}", tz, country);
//! # Ok(())
//! # }
//! ```
//!
//! Databases are loaded on the first resolution and kept in memory for the
//! lifetime of the loader. Lookups after that are lock-free reads.

#![warn(missing_docs)]

pub mod address;
pub mod config;
mod error_handling;
mod geoip;
pub mod initialization;
mod resolver;

// Re-export public API
pub use config::{Cli, GeoIpConfig, LogFormat, LogLevel, SchemaVersion};
pub use error_handling::{
    ConfigurationError, DatabaseError, GeoIpError, InitializationError, LegacyFormatError,
};
pub use geoip::{
    shared_loader, DatabaseHandle, DatabaseLoader, DatabaseMetadata, LocationRecord, Lookup,
};
pub use resolver::{Field, Resolution, Resolver};
