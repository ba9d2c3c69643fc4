//! LMDB environment setup.

use std::path::{Path, PathBuf};

use heed::types::Bytes;
use heed::{Env, EnvFlags, EnvOpenOptions};

use crate::{LmdbError, LmdbMetaStore};

/// Upper bound on named databases the environment can hold open.
///
/// Wallet files carry a handful of buckets next to `meta`; LMDB refuses to
/// open more named databases than configured here.
pub const MAX_DBS: u32 = 32;

const DATA_FILE: &str = "data.mdb";
const LOCK_FILE: &str = "lock.mdb";

/// Wraps the LMDB environment backing a wallet database.
pub struct LmdbEnvironment {
    env: Env,
}

impl LmdbEnvironment {
    /// Open the LMDB environment at `path` for read/write access.
    ///
    /// A directory is opened as a regular LMDB environment and must already
    /// hold `data.mdb`. Anything else is treated as a single-file database
    /// with a `-lock` sidecar next to it. If opening fails, a lock file this
    /// call created is removed again. No named database is created.
    pub fn open(path: &Path) -> Result<Self, LmdbError> {
        if path.is_dir() && !path.join(DATA_FILE).is_file() {
            return Err(LmdbError::MissingEnvironment);
        }
        Self::create(path)
    }

    /// Open the environment at `path`, initialising a new one if none exists,
    /// including inside an empty directory.
    ///
    /// Files are created with owner-only (0600) permissions.
    pub fn create(path: &Path) -> Result<Self, LmdbError> {
        let sub_dir = path.is_dir();
        let mut options = EnvOpenOptions::new();
        options.max_dbs(MAX_DBS);
        if !sub_dir {
            // SAFETY: NO_SUB_DIR only changes where LMDB looks for its files.
            unsafe {
                options.flags(EnvFlags::NO_SUB_DIR);
            }
        }

        let lock = lock_path(path, sub_dir);
        let had_lock = lock.exists();

        // SAFETY: the environment is only mutated through LMDB transactions
        // and LMDB's lock file arbitrates access from other processes.
        let env = match unsafe { options.open(path) } {
            Ok(env) => env,
            Err(e) => {
                if !had_lock && std::fs::remove_file(&lock).is_ok() {
                    tracing::debug!(lock = %lock.display(), "removed lock file after failed open");
                }
                return Err(e.into());
            }
        };
        tracing::debug!(path = %path.display(), "opened LMDB environment");

        Ok(Self { env })
    }

    /// Metadata store view over this environment.
    pub fn meta_store(&self) -> LmdbMetaStore<'_> {
        LmdbMetaStore { env: &self.env }
    }

    /// Create the named database `name` if it does not exist yet.
    pub fn create_bucket(&self, name: &str) -> Result<(), LmdbError> {
        let mut wtxn = self.env.write_txn()?;
        self.env
            .create_database::<Bytes, Bytes>(&mut wtxn, Some(name))?;
        wtxn.commit()?;
        Ok(())
    }

    /// Flush pending data to disk and close the environment, releasing the
    /// file handles and locks.
    ///
    /// Blocks until LMDB has actually closed the environment.
    pub fn close(self) -> Result<(), LmdbError> {
        self.env.force_sync()?;
        let path = self.env.path().to_path_buf();
        self.env.prepare_for_closing().wait();
        tracing::debug!(path = %path.display(), "closed LMDB environment");
        Ok(())
    }
}

fn lock_path(path: &Path, sub_dir: bool) -> PathBuf {
    if sub_dir {
        path.join(LOCK_FILE)
    } else {
        let mut lock = path.as_os_str().to_owned();
        lock.push("-lock");
        PathBuf::from(lock)
    }
}
