//! Metadata storage traits.

use crate::StoreError;

/// A named collection of key/value pairs, viewed through an open
/// read-write transaction.
///
/// Writes made through a bucket become visible to other readers only once
/// the surrounding transaction commits.
pub trait MetaBucket {
    /// Retrieve the value stored under `key`, if any.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any existing value.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}

/// Trait for stores holding application metadata (schema version, etc.) in
/// named buckets.
pub trait MetaStore {
    /// Run `f` against `bucket` inside a single read-write transaction.
    ///
    /// The transaction commits only if `f` returns `Ok`; any error from `f`,
    /// from the commit, or a missing bucket ([`StoreError::MissingBucket`])
    /// leaves the store untouched. Buckets are never created here.
    fn update<T, E, F>(&self, bucket: &str, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn MetaBucket) -> Result<T, E>,
        E: From<StoreError>;

    /// Read a single value in its own read-only transaction.
    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}
