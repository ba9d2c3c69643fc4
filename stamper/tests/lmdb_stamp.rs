//! End-to-end stamping against real LMDB files.

use std::path::{Path, PathBuf};

use walletdb_stamper::{run, StampConfig, StampError, StampOutcome};
use walletdb_store::{MetaStore, StoreError};
use walletdb_store_lmdb::{LmdbEnvironment, LmdbError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a wallet file holding `bucket`, optionally with a stored `ver`.
fn wallet_db(bucket: &str, ver: Option<&[u8]>) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("wallet.db");

    let env = LmdbEnvironment::open(&path).expect("open env");
    env.create_bucket(bucket).expect("create bucket");
    if let Some(ver) = ver {
        let seeded: Result<(), StoreError> =
            env.meta_store().update(bucket, |b| b.put(b"ver", ver));
        seeded.expect("seed version");
    }
    env.close().expect("close env");

    (dir, path)
}

fn stored(path: &Path, bucket: &str) -> Result<Option<Vec<u8>>, StoreError> {
    let env = LmdbEnvironment::open(path).expect("reopen env");
    let value = env.meta_store().get(bucket, b"ver");
    env.close().expect("close env");
    value
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn fresh_store_gets_version() {
    let (_dir, path) = wallet_db("meta", None);
    let config = StampConfig::new(&path, 7, false).unwrap();

    let outcome = run(&config).unwrap();

    assert_eq!(outcome, StampOutcome { prior: None, written: Some(7) });
    assert_eq!(stored(&path, "meta").unwrap(), Some(vec![0, 0, 0, 7]));
}

#[test]
fn existing_version_is_replaced() {
    let (_dir, path) = wallet_db("meta", Some(&[0, 0, 0, 5]));
    let config = StampConfig::new(&path, 12, false).unwrap();

    let outcome = run(&config).unwrap();

    assert_eq!(outcome.prior, Some(5));
    assert_eq!(stored(&path, "meta").unwrap(), Some(12u32.to_be_bytes().to_vec()));
}

#[test]
fn dry_run_is_repeatable_and_read_only() {
    let (_dir, path) = wallet_db("meta", Some(&[0, 0, 0, 5]));
    let config = StampConfig::new(&path, 0, true).unwrap();

    for _ in 0..3 {
        let outcome = run(&config).unwrap();
        assert_eq!(outcome, StampOutcome { prior: Some(5), written: None });
    }
    assert_eq!(stored(&path, "meta").unwrap(), Some(vec![0, 0, 0, 5]));
}

#[test]
fn missing_meta_bucket_leaves_file_untouched() {
    let (_dir, path) = wallet_db("wallet", Some(&[0, 0, 0, 1]));
    let config = StampConfig::new(&path, 4, false).unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(err, StampError::Update(StoreError::MissingBucket(_))));
    assert_eq!(stored(&path, "wallet").unwrap(), Some(vec![0, 0, 0, 1]));
    assert!(matches!(stored(&path, "meta"), Err(StoreError::MissingBucket(_))));
}

#[test]
fn directory_environment_is_supported() {
    let dir = tempfile::tempdir().unwrap();
    let env = LmdbEnvironment::create(dir.path()).unwrap();
    env.create_bucket("meta").unwrap();
    env.close().unwrap();

    let config = StampConfig::new(dir.path(), 3, false).unwrap();
    run(&config).unwrap();

    assert_eq!(stored(dir.path(), "meta").unwrap(), Some(vec![0, 0, 0, 3]));
}

#[test]
fn missing_file_is_rejected_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.db");

    let err = StampConfig::new(&path, 7, false).unwrap_err();

    assert!(matches!(err, StampError::PathNotFound { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn directory_without_environment_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not a wallet").unwrap();
    let config = StampConfig::new(dir.path(), 7, false).unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(
        err,
        StampError::Open { source: LmdbError::MissingEnvironment, .. }
    ));
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["notes.txt"]);
}

#[test]
fn non_lmdb_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.db");
    let garbage = vec![0xAB; 8192];
    std::fs::write(&path, &garbage).unwrap();
    let config = StampConfig::new(&path, 7, false).unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(err, StampError::Open { .. }));
    assert!(err.to_string().starts_with("open "));
    assert_eq!(std::fs::read(&path).unwrap(), garbage);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
