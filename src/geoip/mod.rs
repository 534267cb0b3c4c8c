//! GeoIP lookup over legacy GeoIP City and MaxMind GeoLite2 City databases.
//!
//! Schema 1 uses a pair of legacy `.dat` files (IPv4 and IPv6) and answers
//! timezone queries only. Schema 2 uses one combined `.mmdb` file and answers
//! full location records.

mod handle;
mod init;
mod legacy;
mod lookup;
mod metadata;
mod types;

// Re-export public API
pub use handle::DatabaseHandle;
pub use init::{shared_loader, DatabaseLoader};
pub use types::{DatabaseMetadata, LocationRecord, Lookup};
