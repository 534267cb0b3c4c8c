//! Error type definitions.
//!
//! This module defines all error types used throughout the crate. "Address not
//! found" is deliberately absent: it is a normal lookup outcome, not an error.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Invalid or missing GeoIP configuration.
///
/// These indicate a deployment or setup defect and are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The schema version is neither 1 nor 2.
    #[error("GEOIP_VERSION setting is defined, but only versions 1 and 2 are supported (got {0})")]
    UnsupportedVersion(u8),

    /// The schema version could not be parsed as a number.
    #[error("GEOIP_VERSION setting is defined, but {0:?} is not a number")]
    InvalidVersion(String),

    /// A required database path is empty.
    #[error("{setting} setting has not been properly defined")]
    MissingPath {
        /// Name of the setting that is missing.
        setting: &'static str,
    },

    /// A required database path does not exist on disk.
    #[error("{setting} setting is defined, but {} does not exist", path.display())]
    PathNotFound {
        /// Name of the setting that points at the missing file.
        setting: &'static str,
        /// The path that was checked.
        path: PathBuf,
    },

    /// Schema 1 needs separate IPv4 and IPv6 files.
    #[error("GEOIP_DATABASE and GEOIPV6_DATABASE must be different files (both are {})", path.display())]
    DuplicatePaths {
        /// The path given for both settings.
        path: PathBuf,
    },

    /// A country, city or full-record lookup was requested under schema 1.
    #[error("Must use GEOIP_VERSION 2 for {operation} functionality")]
    RequiresSchemaV2 {
        /// The operation that was requested.
        operation: &'static str,
    },
}

/// Structural problems in a legacy (schema 1) database file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LegacyFormatError {
    /// The edition byte names a database type without city records.
    #[error("unsupported legacy database edition {0}; a City edition is required")]
    UnsupportedEdition(u8),

    /// An IPv6 edition was configured as the IPv4 database, or vice versa.
    #[error("legacy database is a {edition} file, which does not hold {expected} data")]
    WrongFamily {
        /// The address family the setting requires ("IPv4" or "IPv6").
        expected: &'static str,
        /// Edition found in the file.
        edition: &'static str,
    },

    /// The search tree points outside the file or never terminates.
    #[error("corrupt legacy database: search tree is invalid at offset {offset}")]
    CorruptTree {
        /// Node offset where traversal failed.
        offset: usize,
    },

    /// A record pointer lands past the end of the file.
    #[error("corrupt legacy database: record at byte {position} is truncated")]
    TruncatedRecord {
        /// Byte position of the record.
        position: usize,
    },

    /// The file is too small to contain a search tree.
    #[error("legacy database is too small ({0} bytes)")]
    TooSmall(usize),
}

/// An existing database file could not be read or parsed.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The file could not be read into memory.
    #[error("Failed to read GeoIP database from {}: {source}", path.display())]
    Read {
        /// The database path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid legacy GeoIP City database.
    #[error("Failed to parse legacy GeoIP database from {}: {source}", path.display())]
    Legacy {
        /// The database path.
        path: PathBuf,
        /// Underlying format error.
        #[source]
        source: LegacyFormatError,
    },

    /// The file is not a valid MaxMind DB.
    #[error("Failed to parse GeoIP database from {}: {source}", path.display())]
    MaxMind {
        /// The database path.
        path: PathBuf,
        /// Underlying reader error.
        #[source]
        source: maxminddb::MaxMindDbError,
    },
}

/// Top-level error for loading and resolving.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// Configuration is invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A configured database could not be opened.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl GeoIpError {
    /// Returns the configuration error, if this is one.
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            GeoIpError::Configuration(e) => Some(e),
            GeoIpError::Database(_) => None,
        }
    }
}
