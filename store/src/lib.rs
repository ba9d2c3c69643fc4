//! Abstract storage traits for wallet database maintenance tools.
//!
//! Every storage backend (LMDB, in-memory for testing) implements these
//! traits. Tools depend only on the traits, so their logic can be exercised
//! without touching the filesystem.

pub mod error;
pub mod meta;

pub use error::StoreError;
pub use meta::{MetaBucket, MetaStore};
