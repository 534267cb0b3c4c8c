//! Resolution façade.
//!
//! A [`Resolver`] takes an ordered list of candidate addresses (typically a
//! forwarding header), picks the first routable one, looks it up and applies
//! the fallback policy:
//!
//! | field      | not found / no routable candidate |
//! |------------|-----------------------------------|
//! | `timezone` | `None`                            |
//! | `country`  | `"IN"`                            |
//! | `city`     | `"Mumbai"`                        |
//! | `full`     | [`LocationRecord::fallback`]      |
//!
//! Country, city and full lookups need schema 2 and fail with
//! [`ConfigurationError::RequiresSchemaV2`] otherwise.

use std::sync::Arc;

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::address::{first_routable, split_candidates};
use crate::config::{GeoIpConfig, SchemaVersion, FALLBACK_CITY, FALLBACK_COUNTRY};
use crate::error_handling::{ConfigurationError, GeoIpError};
use crate::geoip::{shared_loader, DatabaseLoader, LocationRecord, Lookup};

/// The shape of result a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    /// Timezone name only.
    Timezone,
    /// ISO country code.
    Country,
    /// City name.
    City,
    /// Full [`LocationRecord`].
    Full,
}

impl Field {
    /// Whether the field can only be answered by a schema-2 database.
    pub fn requires_schema_v2(self) -> bool {
        !matches!(self, Field::Timezone)
    }

    /// Operation name used in error messages.
    pub fn operation(self) -> &'static str {
        match self {
            Field::Timezone => "lookup_tz",
            Field::Country => "lookup_country",
            Field::City => "lookup_city",
            Field::Full => "lookup",
        }
    }
}

/// A shaped resolution result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Timezone, unset when the address could not be resolved.
    Timezone(Option<String>),
    /// ISO country code.
    Country(String),
    /// City name.
    City(String),
    /// Full location record.
    Full(LocationRecord),
}

/// Resolves candidate addresses against a lazily loaded database.
///
/// Starts UNINITIALIZED; the first resolution loads the database through the
/// [`DatabaseLoader`] and the resolver stays READY from then on.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: GeoIpConfig,
    loader: Arc<DatabaseLoader>,
}

impl Resolver {
    /// Creates a resolver with its own loader.
    pub fn new(config: GeoIpConfig) -> Self {
        Self::with_loader(config, Arc::new(DatabaseLoader::new()))
    }

    /// Creates a resolver that shares `loader` with other resolvers.
    pub fn with_loader(config: GeoIpConfig, loader: Arc<DatabaseLoader>) -> Self {
        Self { config, loader }
    }

    /// Creates a resolver backed by the process-wide loader.
    pub fn shared(config: GeoIpConfig) -> Self {
        Self::with_loader(config, shared_loader())
    }

    /// The active configuration.
    pub fn config(&self) -> &GeoIpConfig {
        &self.config
    }

    /// The loader backing this resolver.
    pub fn loader(&self) -> &Arc<DatabaseLoader> {
        &self.loader
    }

    /// Whether the database has been loaded.
    pub fn is_ready(&self) -> bool {
        self.loader.is_loaded()
    }

    /// Resolves `candidates` to the requested `field`.
    pub fn resolve<S: AsRef<str>>(
        &self,
        candidates: &[S],
        field: Field,
    ) -> Result<Resolution, GeoIpError> {
        Ok(match field {
            Field::Timezone => Resolution::Timezone(self.resolve_timezone(candidates)?),
            Field::Country => Resolution::Country(self.resolve_country(candidates)?),
            Field::City => Resolution::City(self.resolve_city(candidates)?),
            Field::Full => Resolution::Full(self.resolve_full(candidates)?),
        })
    }

    /// Splits a comma-separated forwarding header and resolves it.
    pub fn resolve_header(&self, header: &str, field: Field) -> Result<Resolution, GeoIpError> {
        self.resolve(&split_candidates(header), field)
    }

    /// Timezone of the first routable candidate, under either schema.
    pub fn resolve_timezone<S: AsRef<str>>(
        &self,
        candidates: &[S],
    ) -> Result<Option<String>, GeoIpError> {
        Ok(match self.lookup_subject(candidates, Field::Timezone)? {
            Lookup::Timezone(tz) => Some(tz),
            Lookup::Record(record) => record.timezone().map(str::to_string),
            Lookup::NotFound => None,
        })
    }

    /// ISO country code of the first routable candidate. Schema 2 only.
    pub fn resolve_country<S: AsRef<str>>(&self, candidates: &[S]) -> Result<String, GeoIpError> {
        Ok(match self.lookup_subject(candidates, Field::Country)? {
            Lookup::Record(record) => record.country_iso,
            _ => FALLBACK_COUNTRY.to_string(),
        })
    }

    /// City of the first routable candidate. Schema 2 only.
    pub fn resolve_city<S: AsRef<str>>(&self, candidates: &[S]) -> Result<String, GeoIpError> {
        Ok(match self.lookup_subject(candidates, Field::City)? {
            Lookup::Record(record) => record.city,
            _ => FALLBACK_CITY.to_string(),
        })
    }

    /// Full record of the first routable candidate. Schema 2 only.
    pub fn resolve_full<S: AsRef<str>>(
        &self,
        candidates: &[S],
    ) -> Result<LocationRecord, GeoIpError> {
        Ok(match self.lookup_subject(candidates, Field::Full)? {
            Lookup::Record(record) => record,
            _ => LocationRecord::fallback(),
        })
    }

    /// Checks the schema, loads the database and looks up the first routable
    /// candidate. No routable candidate is reported as `NotFound` without
    /// touching the database.
    fn lookup_subject<S: AsRef<str>>(
        &self,
        candidates: &[S],
        field: Field,
    ) -> Result<Lookup, GeoIpError> {
        self.require_schema(self.config.schema_version, field)?;

        let handle = self.loader.ensure_loaded(&self.config)?;
        // A shared loader may hold databases loaded under another config
        self.require_schema(handle.schema(), field)?;

        let Some(ip) = first_routable(candidates) else {
            log::debug!("No routable address among {} candidate(s)", candidates.len());
            return Ok(Lookup::NotFound);
        };

        let result = handle.lookup(ip);
        if result == Lookup::NotFound {
            log::debug!("No GeoIP data for {}, using {} default", ip, field);
        }
        Ok(result)
    }

    fn require_schema(&self, schema: SchemaVersion, field: Field) -> Result<(), ConfigurationError> {
        if field.requires_schema_v2() && schema != SchemaVersion::V2 {
            return Err(ConfigurationError::RequiresSchemaV2 {
                operation: field.operation(),
            });
        }
        Ok(())
    }
}
