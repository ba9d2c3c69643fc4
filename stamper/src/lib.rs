//! Schema version stamping for wallet databases.
//!
//! The version marker is a 4-byte big-endian integer stored under `ver` in
//! the `meta` bucket. [`stamp`] reads it and, unless running in inspect mode,
//! replaces it with the configured target, all inside one transaction.

pub mod config;
pub mod error;
pub mod stamp;
pub mod version;

pub use config::{StampConfig, StampMode};
pub use error::StampError;
pub use stamp::{run, stamp, StampOutcome};
pub use version::{META_BUCKET, VERSION_KEY};
