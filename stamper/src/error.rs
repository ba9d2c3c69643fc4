use std::io;
use std::path::PathBuf;

use thiserror::Error;
use walletdb_store::StoreError;
use walletdb_store_lmdb::LmdbError;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("-version is required and must be positive")]
    VersionRequired,

    #[error("-db is required")]
    PathRequired,

    #[error("-db: {}: {source}", path.display())]
    PathNotFound { path: PathBuf, source: io::Error },

    #[error("open {}: {source}", path.display())]
    Open { path: PathBuf, source: LmdbError },

    #[error("update: {0}")]
    Update(#[from] StoreError),

    #[error("close: {0}")]
    Close(LmdbError),
}
