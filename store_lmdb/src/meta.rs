//! LMDB implementation of MetaStore.

use heed::types::Bytes;
use heed::{Database, Env, RwTxn};

use walletdb_store::{MetaBucket, MetaStore, StoreError};

use crate::LmdbError;

pub struct LmdbMetaStore<'e> {
    pub(crate) env: &'e Env,
}

/// A named database seen through an open write transaction.
struct LmdbBucket<'e> {
    db: Database<Bytes, Bytes>,
    wtxn: RwTxn<'e>,
}

fn backend<E: From<StoreError>>(e: heed::Error) -> E {
    E::from(StoreError::from(LmdbError::from(e)))
}

impl MetaBucket for LmdbBucket<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let val = self.db.get(&self.wtxn, key).map_err(LmdbError::from)?;
        Ok(val.map(<[u8]>::to_vec))
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.db
            .put(&mut self.wtxn, key, value)
            .map_err(LmdbError::from)?;
        Ok(())
    }
}

impl MetaStore for LmdbMetaStore<'_> {
    fn update<T, E, F>(&self, bucket: &str, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn MetaBucket) -> Result<T, E>,
        E: From<StoreError>,
    {
        let wtxn = self.env.write_txn().map_err(backend::<E>)?;
        let db = self
            .env
            .open_database::<Bytes, Bytes>(&wtxn, Some(bucket))
            .map_err(backend::<E>)?;
        let Some(db) = db else {
            wtxn.abort();
            return Err(StoreError::MissingBucket(bucket.to_string()).into());
        };

        // Dropping the bucket on the error path aborts the transaction.
        let mut txn_bucket = LmdbBucket { db, wtxn };
        let value = f(&mut txn_bucket)?;
        txn_bucket.wtxn.commit().map_err(backend::<E>)?;

        Ok(value)
    }

    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let db = self
            .env
            .open_database::<Bytes, Bytes>(&rtxn, Some(bucket))
            .map_err(LmdbError::from)?
            .ok_or_else(|| StoreError::MissingBucket(bucket.to_string()))?;
        let val = db.get(&rtxn, key).map_err(LmdbError::from)?;
        Ok(val.map(<[u8]>::to_vec))
    }
}
