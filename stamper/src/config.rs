//! Validated invocation parameters.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use crate::StampError;

/// What to do with the version marker once it has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampMode {
    /// Log the stored version and leave the database untouched.
    Inspect,
    /// Replace the stored version with the given value.
    Write(NonZeroU32),
}

/// Immutable configuration for one stamping run.
#[derive(Debug, Clone)]
pub struct StampConfig {
    db_path: PathBuf,
    mode: StampMode,
}

impl StampConfig {
    /// Validate the raw parameters.
    ///
    /// A `version` of zero is only accepted together with `dry_run`, in which
    /// case the version is ignored. The path must be non-empty and must exist;
    /// both checks happen before any database is opened.
    pub fn new(
        db_path: impl Into<PathBuf>,
        version: u32,
        dry_run: bool,
    ) -> Result<Self, StampError> {
        let mode = if dry_run {
            StampMode::Inspect
        } else {
            let version = NonZeroU32::new(version).ok_or(StampError::VersionRequired)?;
            StampMode::Write(version)
        };

        let db_path = db_path.into();
        if db_path.as_os_str().is_empty() {
            return Err(StampError::PathRequired);
        }
        if let Err(source) = std::fs::metadata(&db_path) {
            return Err(StampError::PathNotFound {
                path: db_path,
                source,
            });
        }

        Ok(Self { db_path, mode })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn mode(&self) -> StampMode {
        self.mode
    }
}
