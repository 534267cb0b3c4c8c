//! GeoIP database loading from files.

use std::path::Path;

use maxminddb::Reader;

use crate::config::{GeoIpConfig, SchemaVersion, GEOIPV6_DATABASE_ENV};
use crate::error_handling::{ConfigurationError, DatabaseError, GeoIpError, LegacyFormatError};
use crate::geoip::handle::{DatabaseHandle, SchemaHandle};
use crate::geoip::legacy::LegacyDatabase;
use crate::geoip::metadata::{extract_legacy_metadata, extract_maxmind_metadata};

/// Opens every database the configuration names.
///
/// The configuration must already be validated.
pub(crate) fn open_databases(config: &GeoIpConfig) -> Result<DatabaseHandle, GeoIpError> {
    match config.schema_version {
        SchemaVersion::V1 => {
            let v6_path = config.v6_path().ok_or(ConfigurationError::MissingPath {
                setting: GEOIPV6_DATABASE_ENV,
            })?;
            let v4 = load_legacy_from_file(&config.primary_db_path, false)?;
            let v6 = load_legacy_from_file(v6_path, true)?;
            let metadata = extract_legacy_metadata(&v4, &v6, &config.primary_db_path, v6_path);
            Ok(DatabaseHandle::new(SchemaHandle::V1 { v4, v6 }, metadata))
        }
        SchemaVersion::V2 => {
            let reader = load_maxmind_from_file(&config.primary_db_path)?;
            let metadata = extract_maxmind_metadata(&reader, &config.primary_db_path);
            Ok(DatabaseHandle::new(SchemaHandle::V2 { reader }, metadata))
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, DatabaseError> {
    std::fs::read(path).map_err(|source| DatabaseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a legacy City database and checks it holds the expected family.
pub(crate) fn load_legacy_from_file(path: &Path, v6: bool) -> Result<LegacyDatabase, DatabaseError> {
    log::info!("Loading legacy GeoIP database from: {}", path.display());

    let legacy_error = |source| DatabaseError::Legacy {
        path: path.to_path_buf(),
        source,
    };

    let db = LegacyDatabase::from_bytes(read_file(path)?).map_err(legacy_error)?;
    if db.edition().is_v6() != v6 {
        return Err(legacy_error(LegacyFormatError::WrongFamily {
            expected: if v6 { "IPv6" } else { "IPv4" },
            edition: db.edition().name(),
        }));
    }
    Ok(db)
}

/// Loads a MaxMind database fully into memory.
pub(crate) fn load_maxmind_from_file(path: &Path) -> Result<Reader<Vec<u8>>, DatabaseError> {
    log::info!("Loading GeoIP database from: {}", path.display());

    let db_bytes = read_file(path)?;
    Reader::from_source(db_bytes).map_err(|source| DatabaseError::MaxMind {
        path: path.to_path_buf(),
        source,
    })
}
