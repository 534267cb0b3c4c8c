//! Configuration types and CLI options.
//!
//! This module defines the GeoIP configuration consumed by the loader and the
//! enums used for command-line argument parsing.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::config::constants::{
    DEFAULT_SCHEMA_VERSION, DEFAULT_V1_DATABASE, DEFAULT_V1_V6_DATABASE, DEFAULT_V2_DATABASE,
    GEOIPV6_DATABASE_ENV, GEOIP_DATABASE_ENV, GEOIP_DATA_DIR_ENV, GEOIP_VERSION_ENV,
};
use crate::error_handling::ConfigurationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// On-disk database generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SchemaVersion {
    /// Legacy City `.dat` files, one per address family. Timezone lookups only.
    V1,
    /// Combined dual-stack MaxMind DB (`.mmdb`) with full city records.
    V2,
}

impl SchemaVersion {
    /// Numeric form used in settings.
    pub fn as_u8(self) -> u8 {
        match self {
            SchemaVersion::V1 => 1,
            SchemaVersion::V2 => 2,
        }
    }
}

impl TryFrom<u8> for SchemaVersion {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SchemaVersion::V1),
            2 => Ok(SchemaVersion::V2),
            other => Err(ConfigurationError::UnsupportedVersion(other)),
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// GeoIP database configuration.
///
/// Immutable once handed to a loader. Build it directly, through
/// [`GeoIpConfig::new`] (validates) or from the environment with
/// [`GeoIpConfig::from_env`].
///
/// # Examples
///
/// ```no_run
/// use ip_timezone::GeoIpConfig;
///
/// let config = GeoIpConfig::schema_v2("/var/lib/geoip/GeoLite2-City.mmdb");
/// config.validate().expect("database must exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoIpConfig {
    /// Which database generation the paths point at
    pub schema_version: SchemaVersion,

    /// IPv4 legacy database (schema 1) or combined database (schema 2)
    pub primary_db_path: PathBuf,

    /// IPv6 legacy database; required for schema 1, ignored for schema 2
    pub secondary_db_path: Option<PathBuf>,
}

impl GeoIpConfig {
    /// Builds and validates a configuration from raw settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the version is unsupported or any
    /// required path is empty, missing, or (schema 1) duplicated.
    pub fn new(
        schema_version: u8,
        primary_db_path: impl Into<PathBuf>,
        secondary_db_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        let config = Self {
            schema_version: SchemaVersion::try_from(schema_version)?,
            primary_db_path: primary_db_path.into(),
            secondary_db_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Schema 1 configuration with separate IPv4 and IPv6 files. Not validated.
    pub fn schema_v1(v4_path: impl Into<PathBuf>, v6_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_version: SchemaVersion::V1,
            primary_db_path: v4_path.into(),
            secondary_db_path: Some(v6_path.into()),
        }
    }

    /// Schema 2 configuration with one combined file. Not validated.
    pub fn schema_v2(path: impl Into<PathBuf>) -> Self {
        Self {
            schema_version: SchemaVersion::V2,
            primary_db_path: path.into(),
            secondary_db_path: None,
        }
    }

    /// Reads the configuration from `GEOIP_VERSION`, `GEOIP_DATABASE`,
    /// `GEOIPV6_DATABASE` and `GEOIP_DATA_DIR`.
    ///
    /// Unset paths fall back to the default file names inside the data
    /// directory. The result is validated.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`GeoIpConfig::from_env`] with an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = match var(GEOIP_VERSION_ENV) {
            Some(raw) => {
                let raw = raw.trim().to_string();
                raw.parse::<u8>()
                    .map_err(|_| ConfigurationError::InvalidVersion(raw))?
            }
            None => DEFAULT_SCHEMA_VERSION,
        };
        let schema_version = SchemaVersion::try_from(version)?;

        let data_dir = var(GEOIP_DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let default_primary = match schema_version {
            SchemaVersion::V1 => DEFAULT_V1_DATABASE,
            SchemaVersion::V2 => DEFAULT_V2_DATABASE,
        };
        let primary_db_path = var(GEOIP_DATABASE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(default_primary));
        let secondary_db_path = Some(
            var(GEOIPV6_DATABASE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(DEFAULT_V1_V6_DATABASE)),
        );

        let config = Self {
            schema_version,
            primary_db_path,
            secondary_db_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every path the schema needs is set and exists on disk.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found, naming the setting.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_path(GEOIP_DATABASE_ENV, &self.primary_db_path)?;

        if self.schema_version == SchemaVersion::V1 {
            let secondary = self
                .secondary_db_path
                .as_deref()
                .ok_or(ConfigurationError::MissingPath {
                    setting: GEOIPV6_DATABASE_ENV,
                })?;
            check_path(GEOIPV6_DATABASE_ENV, secondary)?;

            if secondary == self.primary_db_path {
                return Err(ConfigurationError::DuplicatePaths {
                    path: secondary.to_path_buf(),
                });
            }
        }

        Ok(())
    }

    /// The IPv6 path for schema 1, `None` for schema 2.
    pub fn v6_path(&self) -> Option<&Path> {
        match self.schema_version {
            SchemaVersion::V1 => self.secondary_db_path.as_deref(),
            SchemaVersion::V2 => None,
        }
    }
}

fn check_path(setting: &'static str, path: &Path) -> Result<(), ConfigurationError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigurationError::MissingPath { setting });
    }
    if !path.exists() {
        return Err(ConfigurationError::PathNotFound {
            setting,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"placeholder").expect("Failed to create test file");
        path
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(log::LevelFilter::from(LogLevel::Error), log::LevelFilter::Error);
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
        assert_eq!(log::LevelFilter::from(LogLevel::Info), log::LevelFilter::Info);
        assert_eq!(log::LevelFilter::from(LogLevel::Debug), log::LevelFilter::Debug);
        assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
    }

    #[test]
    fn test_schema_version_try_from() {
        assert_eq!(SchemaVersion::try_from(1), Ok(SchemaVersion::V1));
        assert_eq!(SchemaVersion::try_from(2), Ok(SchemaVersion::V2));
        assert_eq!(
            SchemaVersion::try_from(0),
            Err(ConfigurationError::UnsupportedVersion(0))
        );
        assert_eq!(
            SchemaVersion::try_from(3),
            Err(ConfigurationError::UnsupportedVersion(3))
        );
    }

    #[test]
    fn test_new_rejects_unsupported_version_before_paths() {
        let result = GeoIpConfig::new(7, "", None);
        assert_eq!(result, Err(ConfigurationError::UnsupportedVersion(7)));
    }

    #[test]
    fn test_validate_v1_missing_secondary_file_cites_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let v4 = touch(&temp_dir, "GeoLiteCity.dat");
        let v6 = temp_dir.path().join("missing-v6.dat");

        let result = GeoIpConfig::new(1, &v4, Some(v6.clone()));
        match result {
            Err(ConfigurationError::PathNotFound { setting, path }) => {
                assert_eq!(setting, GEOIPV6_DATABASE_ENV);
                assert_eq!(path, v6);
            }
            other => panic!("Expected PathNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_v1_requires_secondary() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let v4 = touch(&temp_dir, "GeoLiteCity.dat");
        let config = GeoIpConfig {
            schema_version: SchemaVersion::V1,
            primary_db_path: v4,
            secondary_db_path: None,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MissingPath {
                setting: GEOIPV6_DATABASE_ENV
            })
        );
    }

    #[test]
    fn test_validate_v1_rejects_identical_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let both = touch(&temp_dir, "GeoLiteCity.dat");
        let config = GeoIpConfig::schema_v1(&both, &both);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::DuplicatePaths { path: both })
        );
    }

    #[test]
    fn test_validate_empty_primary_is_missing() {
        let config = GeoIpConfig::schema_v2("");
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MissingPath {
                setting: GEOIP_DATABASE_ENV
            })
        );
    }

    #[test]
    fn test_validate_v2_ignores_secondary() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mmdb = touch(&temp_dir, "GeoLite2-City.mmdb");
        let mut config = GeoIpConfig::schema_v2(&mmdb);
        config.secondary_db_path = Some(temp_dir.path().join("does-not-exist.dat"));
        assert!(config.validate().is_ok());
        assert!(config.v6_path().is_none());
    }

    #[test]
    fn test_from_vars_uses_default_file_names_in_data_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mmdb = touch(&temp_dir, DEFAULT_V2_DATABASE);
        let dir = temp_dir.path().to_string_lossy().to_string();

        let vars: HashMap<&str, String> =
            HashMap::from([(GEOIP_VERSION_ENV, "2".to_string()), (GEOIP_DATA_DIR_ENV, dir)]);
        let config = GeoIpConfig::from_vars(|k| vars.get(k).cloned()).expect("valid config");
        assert_eq!(config.schema_version, SchemaVersion::V2);
        assert_eq!(config.primary_db_path, mmdb);
    }

    #[test]
    fn test_from_vars_defaults_to_schema_1() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let v4 = touch(&temp_dir, "v4.dat");
        let v6 = touch(&temp_dir, "v6.dat");
        let vars: HashMap<&str, String> = HashMap::from([
            (GEOIP_DATABASE_ENV, v4.to_string_lossy().to_string()),
            (GEOIPV6_DATABASE_ENV, v6.to_string_lossy().to_string()),
        ]);
        let config = GeoIpConfig::from_vars(|k| vars.get(k).cloned()).expect("valid config");
        assert_eq!(config.schema_version, SchemaVersion::V1);
        assert_eq!(config.v6_path(), Some(v6.as_path()));
    }

    #[test]
    fn test_from_vars_rejects_non_numeric_version() {
        let vars: HashMap<&str, String> = HashMap::from([(GEOIP_VERSION_ENV, "two".to_string())]);
        assert_eq!(
            GeoIpConfig::from_vars(|k| vars.get(k).cloned()),
            Err(ConfigurationError::InvalidVersion("two".to_string()))
        );
    }
}
