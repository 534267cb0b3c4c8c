//! Metadata extraction for loaded GeoIP databases.

use std::path::Path;
use std::time::SystemTime;

use maxminddb::Reader;

use super::legacy::LegacyDatabase;
use super::types::DatabaseMetadata;
use crate::config::SchemaVersion;

/// Extracts metadata from a MaxMind database.
pub(crate) fn extract_maxmind_metadata(reader: &Reader<Vec<u8>>, source: &Path) -> DatabaseMetadata {
    // MaxMind databases have a build_epoch field in their metadata
    DatabaseMetadata {
        schema: SchemaVersion::V2,
        sources: vec![source.to_path_buf()],
        edition: reader.metadata.database_type.clone(),
        build: Some(format!("build_{}", reader.metadata.build_epoch)),
        loaded_at: SystemTime::now(),
    }
}

/// Describes a pair of legacy databases. Legacy files record no build date.
pub(crate) fn extract_legacy_metadata(
    v4: &LegacyDatabase,
    v6: &LegacyDatabase,
    v4_source: &Path,
    v6_source: &Path,
) -> DatabaseMetadata {
    let edition = format!("{} / {}", v4.edition().name(), v6.edition().name());
    DatabaseMetadata {
        schema: SchemaVersion::V1,
        sources: vec![v4_source.to_path_buf(), v6_source.to_path_buf()],
        edition,
        build: None,
        loaded_at: SystemTime::now(),
    }
}
