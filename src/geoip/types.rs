//! GeoIP data structures.
//!
//! This module defines the data structures used for GeoIP lookups and metadata.

use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::config::{
    SchemaVersion, FALLBACK_COUNTRY, FALLBACK_RECORD_CITY, FALLBACK_RECORD_CONTINENT,
    FALLBACK_RECORD_LATITUDE, FALLBACK_RECORD_LONGITUDE, FALLBACK_RECORD_TIMEZONE,
};

/// Structured geolocation result from a schema-2 database.
///
/// Missing string fields are empty and missing coordinates are `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// English city name
    pub city: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(rename = "country")]
    pub country_iso: String,
    /// English continent name
    pub continent: String,
    /// IANA timezone name
    pub timezone: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl LocationRecord {
    /// The fixed record returned when an address is not in the database.
    pub fn fallback() -> Self {
        Self {
            city: FALLBACK_RECORD_CITY.to_string(),
            country_iso: FALLBACK_COUNTRY.to_string(),
            continent: FALLBACK_RECORD_CONTINENT.to_string(),
            timezone: FALLBACK_RECORD_TIMEZONE.to_string(),
            latitude: FALLBACK_RECORD_LATITUDE,
            longitude: FALLBACK_RECORD_LONGITUDE,
        }
    }

    /// The timezone, or `None` if the database had none for this address.
    pub fn timezone(&self) -> Option<&str> {
        (!self.timezone.is_empty()).then_some(self.timezone.as_str())
    }
}

/// Outcome of a single database lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Full record (schema 2).
    Record(LocationRecord),
    /// Timezone only (schema 1).
    Timezone(String),
    /// The address is absent from the database. Not an error.
    NotFound,
}

/// Metadata about a loaded database set.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseMetadata {
    /// Schema generation of the loaded files
    pub schema: SchemaVersion,
    /// Files the handle was loaded from (IPv4 first for schema 1)
    pub sources: Vec<PathBuf>,
    /// Database edition or type (e.g. "GeoLite2-City", "City Edition Rev 1")
    pub edition: String,
    /// Build identifier, when the format records one
    pub build: Option<String>,
    /// When the files were read into memory
    pub loaded_at: SystemTime,
}
