use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB error: {0}")]
    Heed(String),

    #[error("directory holds no LMDB environment")]
    MissingEnvironment,
}

impl From<heed::Error> for LmdbError {
    fn from(e: heed::Error) -> Self {
        LmdbError::Heed(e.to_string())
    }
}

impl From<LmdbError> for walletdb_store::StoreError {
    fn from(e: LmdbError) -> Self {
        walletdb_store::StoreError::Backend(e.to_string())
    }
}
