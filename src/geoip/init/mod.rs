//! GeoIP database initialization.
//!
//! Databases are loaded lazily on first use and at most once per loader, even
//! under concurrent first calls. A failed load leaves the loader empty so a
//! later call can try again.

mod loader;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

use once_cell::sync::OnceCell;

use crate::config::GeoIpConfig;
use crate::error_handling::GeoIpError;
use crate::geoip::handle::DatabaseHandle;
use crate::geoip::types::DatabaseMetadata;

/// Process-wide loader used by [`crate::Resolver::shared`].
static SHARED_LOADER: LazyLock<Arc<DatabaseLoader>> =
    LazyLock::new(|| Arc::new(DatabaseLoader::new()));

/// Returns the process-wide loader.
pub fn shared_loader() -> Arc<DatabaseLoader> {
    Arc::clone(&SHARED_LOADER)
}

/// Guards one-time loading of a [`DatabaseHandle`].
#[derive(Debug)]
pub struct DatabaseLoader {
    cell: OnceCell<Arc<DatabaseHandle>>,
    loads: AtomicUsize,
}

impl Default for DatabaseLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseLoader {
    /// Creates an empty loader.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Returns the loaded handle, loading it from `config` on the first call.
    ///
    /// The configuration is validated before any file is opened. Concurrent
    /// first calls block until one of them finishes; all of them then see the
    /// same handle. Once loaded, later calls return the existing handle and
    /// ignore `config`.
    pub fn ensure_loaded(&self, config: &GeoIpConfig) -> Result<Arc<DatabaseHandle>, GeoIpError> {
        if let Some(handle) = self.cell.get() {
            if handle.schema() != config.schema_version {
                log::warn!(
                    "GeoIP databases already loaded with schema {}, ignoring requested schema {}",
                    handle.schema(),
                    config.schema_version
                );
            }
            return Ok(Arc::clone(handle));
        }

        let handle = self.cell.get_or_try_init(|| {
            config.validate()?;
            let handle = loader::open_databases(config)?;
            self.loads.fetch_add(1, Ordering::SeqCst);
            log::info!(
                "GeoIP databases loaded (schema {}, edition {})",
                handle.schema(),
                handle.metadata().edition
            );
            Ok::<_, GeoIpError>(Arc::new(handle))
        })?;
        Ok(Arc::clone(handle))
    }

    /// Returns the handle if loading has completed.
    pub fn get(&self) -> Option<Arc<DatabaseHandle>> {
        self.cell.get().cloned()
    }

    /// Whether a handle has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Number of successful loads. Never exceeds one.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Metadata of the loaded databases, if any.
    pub fn metadata(&self) -> Option<DatabaseMetadata> {
        self.cell.get().map(|h| h.metadata().clone())
    }
}
