//! Loaded database handles.
//!
//! The two schema generations are incompatible on disk, so the handle is a
//! tagged union chosen once at load time. Callers only see [`DatabaseHandle::lookup`].

use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use maxminddb::Reader;

use super::legacy::LegacyDatabase;
use super::lookup::lookup_city_record;
use super::types::{DatabaseMetadata, Lookup};
use crate::config::SchemaVersion;

/// Schema-specific readers.
pub(crate) enum SchemaHandle {
    /// Legacy City files, one per address family.
    V1 {
        v4: LegacyDatabase,
        v6: LegacyDatabase,
    },
    /// One combined MaxMind City database.
    V2 { reader: Reader<Vec<u8>> },
}

/// A read-only, memory-resident geolocation database.
///
/// Never mutated after construction; safe to share across threads and read
/// without locking.
pub struct DatabaseHandle {
    inner: SchemaHandle,
    metadata: DatabaseMetadata,
    lookups: AtomicU64,
}

impl DatabaseHandle {
    pub(crate) fn new(inner: SchemaHandle, metadata: DatabaseMetadata) -> Self {
        Self {
            inner,
            metadata,
            lookups: AtomicU64::new(0),
        }
    }

    /// Schema generation of the loaded files.
    pub fn schema(&self) -> SchemaVersion {
        match self.inner {
            SchemaHandle::V1 { .. } => SchemaVersion::V1,
            SchemaHandle::V2 { .. } => SchemaVersion::V2,
        }
    }

    /// Metadata captured when the files were loaded.
    pub fn metadata(&self) -> &DatabaseMetadata {
        &self.metadata
    }

    /// Number of database lookups performed through this handle.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Looks up an address.
    ///
    /// Schema 1 yields [`Lookup::Timezone`] and schema 2 yields
    /// [`Lookup::Record`]; both yield [`Lookup::NotFound`] for absent addresses.
    pub fn lookup(&self, ip: IpAddr) -> Lookup {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        match &self.inner {
            SchemaHandle::V1 { v4, v6 } => {
                let db = if ip.is_ipv6() { v6 } else { v4 };
                match db.time_zone_by_addr(ip) {
                    Ok(Some(tz)) => Lookup::Timezone(tz.to_string()),
                    Ok(None) => Lookup::NotFound,
                    Err(e) => {
                        log::warn!("Legacy GeoIP lookup for {} failed: {}", ip, e);
                        Lookup::NotFound
                    }
                }
            }
            SchemaHandle::V2 { reader } => match lookup_city_record(reader, ip) {
                Some(record) => Lookup::Record(record),
                None => Lookup::NotFound,
            },
        }
    }

    /// Parses and looks up a textual address. Unparseable input is `NotFound`.
    pub fn lookup_str(&self, ip: &str) -> Lookup {
        match crate::address::parse_candidate(ip) {
            Some(addr) => self.lookup(addr),
            None => Lookup::NotFound,
        }
    }
}

impl std::fmt::Debug for DatabaseHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseHandle")
            .field("schema", &self.schema())
            .field("metadata", &self.metadata)
            .field("lookups", &self.lookup_count())
            .finish()
    }
}
