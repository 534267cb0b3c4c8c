//! Process initialization.
//!
//! Only logging needs explicit setup; databases are loaded lazily by
//! [`crate::DatabaseLoader`] on first lookup.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
