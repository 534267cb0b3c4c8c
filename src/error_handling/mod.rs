//! Error handling.
//!
//! Errors are categorized into:
//! - **Configuration errors**: invalid settings, surfaced immediately
//! - **Database errors**: an existing file could not be read or parsed
//! - **Initialization errors**: logger setup in the binary

mod types;

// Re-export public API
pub use types::{
    ConfigurationError, DatabaseError, GeoIpError, InitializationError, LegacyFormatError,
};
