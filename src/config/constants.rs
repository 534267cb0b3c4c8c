//! Configuration constants.
//!
//! Setting names, default database file names and the fixed fallback values
//! returned when an address cannot be resolved.

/// Environment variable selecting the database schema generation (1 or 2).
pub const GEOIP_VERSION_ENV: &str = "GEOIP_VERSION";
/// Environment variable holding the primary database path.
pub const GEOIP_DATABASE_ENV: &str = "GEOIP_DATABASE";
/// Environment variable holding the IPv6 database path (schema 1 only).
pub const GEOIPV6_DATABASE_ENV: &str = "GEOIPV6_DATABASE";
/// Environment variable naming the directory that holds the default database files.
pub const GEOIP_DATA_DIR_ENV: &str = "GEOIP_DATA_DIR";

/// Schema used when `GEOIP_VERSION` is unset.
pub const DEFAULT_SCHEMA_VERSION: u8 = 1;

/// Default legacy IPv4 City database file name.
pub const DEFAULT_V1_DATABASE: &str = "GeoLiteCity.dat";
/// Default legacy IPv6 City database file name.
pub const DEFAULT_V1_V6_DATABASE: &str = "GeoLiteCityv6.dat";
/// Default combined MaxMind City database file name.
pub const DEFAULT_V2_DATABASE: &str = "GeoLite2-City.mmdb";

// Fallback values for unresolvable addresses
/// Country returned by country lookups when the address is not in the database.
pub const FALLBACK_COUNTRY: &str = "IN";
/// City returned by city lookups when the address is not in the database.
pub const FALLBACK_CITY: &str = "Mumbai";

/// City of the fallback full record.
pub const FALLBACK_RECORD_CITY: &str = "Malavli";
/// Continent of the fallback full record.
pub const FALLBACK_RECORD_CONTINENT: &str = "Asia";
/// Timezone of the fallback full record.
pub const FALLBACK_RECORD_TIMEZONE: &str = "Asia/Kolkata";
/// Latitude of the fallback full record.
pub const FALLBACK_RECORD_LATITUDE: f64 = 18.746380;
/// Longitude of the fallback full record.
pub const FALLBACK_RECORD_LONGITUDE: f64 = 73.473010;
