//! Nullable store — thread-safe in-memory metadata buckets for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use walletdb_store::{MetaBucket, MetaStore, StoreError};

type Bucket = HashMap<Vec<u8>, Vec<u8>>;

/// An in-memory metadata store for testing.
///
/// `update` stages writes on a copy of the bucket and publishes the copy only
/// when the closure succeeds, mirroring a real store's transaction.
pub struct NullMetaStore {
    buckets: Mutex<HashMap<String, Bucket>>,
    fail_writes: AtomicBool,
    fail_commits: AtomicBool,
}

impl NullMetaStore {
    pub fn new() -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
            fail_commits: AtomicBool::new(false),
        }
    }

    /// Create an empty bucket (no-op if it exists).
    pub fn with_bucket(self, name: &str) -> Self {
        self.buckets
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default();
        self
    }

    /// Store a value directly, creating the bucket if needed.
    pub fn seed(&self, bucket: &str, key: &[u8], value: &[u8]) {
        self.buckets
            .lock()
            .unwrap()
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
    }

    /// Read a value directly, bypassing transactions.
    pub fn value(&self, bucket: &str, key: &[u8]) -> Option<Vec<u8>> {
        self.buckets
            .lock()
            .unwrap()
            .get(bucket)
            .and_then(|b| b.get(key))
            .cloned()
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        self.buckets.lock().unwrap().contains_key(bucket)
    }

    /// Make every subsequent `put` fail with a backend error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent commit fail with a backend error.
    pub fn fail_commits(&self) {
        self.fail_commits.store(true, Ordering::SeqCst);
    }
}

impl Default for NullMetaStore {
    fn default() -> Self {
        Self::new()
    }
}

struct StagedBucket<'a> {
    entries: Bucket,
    fail_writes: &'a AtomicBool,
}

impl MetaBucket for StagedBucket<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected write failure".into()));
        }
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

impl MetaStore for NullMetaStore {
    fn update<T, E, F>(&self, bucket: &str, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn MetaBucket) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut buckets = self.buckets.lock().unwrap();
        let entries = buckets
            .get(bucket)
            .cloned()
            .ok_or_else(|| StoreError::MissingBucket(bucket.to_string()))?;

        let mut staged = StagedBucket {
            entries,
            fail_writes: &self.fail_writes,
        };
        let value = f(&mut staged)?;

        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected commit failure".into()).into());
        }
        buckets.insert(bucket.to_string(), staged.entries);

        Ok(value)
    }

    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let buckets = self.buckets.lock().unwrap();
        let entries = buckets
            .get(bucket)
            .ok_or_else(|| StoreError::MissingBucket(bucket.to_string()))?;
        Ok(entries.get(key).cloned())
    }
}
