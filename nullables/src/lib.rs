//! Nullable infrastructure for deterministic testing.
//!
//! Storage is abstracted behind the `walletdb-store` traits. This crate
//! provides a test-friendly implementation that:
//! - Never touches the filesystem
//! - Can be seeded and inspected programmatically
//! - Can be told to fail writes or commits on demand
//!
//! Usage: swap the LMDB environment for a nullable in tests.

pub mod store;

pub use store::NullMetaStore;
