use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing {0} bucket")]
    MissingBucket(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}
