//! The read-modify-write of the version marker.

use walletdb_store::MetaStore;
use walletdb_store_lmdb::LmdbEnvironment;

use crate::version::{self, META_BUCKET, VERSION_KEY};
use crate::{StampConfig, StampError, StampMode};

/// What a stamping run observed and changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampOutcome {
    /// Version found in the store, `None` when missing or malformed.
    pub prior: Option<u32>,
    /// Version written, `None` in inspect mode.
    pub written: Option<u32>,
}

/// Read the version marker and, in write mode, replace it.
///
/// Both steps run inside one transaction on the `meta` bucket: either the
/// new version is committed or the store is left exactly as it was. A
/// missing or malformed marker is only a warning; a missing bucket is fatal.
pub fn stamp<S: MetaStore>(config: &StampConfig, store: &S) -> Result<StampOutcome, StampError> {
    let mode = config.mode();

    store.update(META_BUCKET, |meta| -> Result<StampOutcome, StampError> {
        let stored = meta.get(VERSION_KEY)?;
        let prior = stored.as_deref().and_then(version::decode);
        match (prior, &stored) {
            (Some(old), _) => tracing::info!("prior version: {}", old),
            (None, Some(bytes)) => {
                tracing::warn!(len = bytes.len(), "missing version");
            }
            (None, None) => tracing::warn!("missing version"),
        }

        let written = match mode {
            StampMode::Inspect => None,
            StampMode::Write(target) => {
                let target = target.get();
                tracing::info!("setting db version to {}", target);
                meta.put(VERSION_KEY, &version::encode(target))?;
                Some(target)
            }
        };

        Ok(StampOutcome { prior, written })
    })
}

/// Open the database named by `config`, stamp it and close it again.
///
/// The environment is closed even when stamping fails; in that case the
/// stamping error is reported rather than any close error.
pub fn run(config: &StampConfig) -> Result<StampOutcome, StampError> {
    let path = config.db_path();
    let env = LmdbEnvironment::open(path).map_err(|source| StampError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = stamp(config, &env.meta_store());
    let closed = env.close().map_err(StampError::Close);

    let outcome = outcome?;
    closed?;
    Ok(outcome)
}
