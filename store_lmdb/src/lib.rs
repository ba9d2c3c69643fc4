//! LMDB storage backend for wallet database maintenance tools.
//!
//! Implements the storage traits from `walletdb-store` using the `heed` LMDB
//! bindings. Each bucket maps to one LMDB named database within a single
//! environment.

pub mod environment;
pub mod error;
pub mod meta;

pub use environment::{LmdbEnvironment, MAX_DBS};
pub use error::LmdbError;
pub use meta::LmdbMetaStore;
