//! walletdb-version — inspect or stamp the schema version of a wallet database.

mod args;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use walletdb_stamper::StampConfig;

#[derive(Parser)]
#[command(
    name = "walletdb-version",
    about = "Read or set the version marker of a wallet database",
    disable_version_flag = true
)]
struct Cli {
    /// Path to the wallet database.
    #[arg(long, env = "WALLETDB_DB")]
    db: Option<PathBuf>,

    /// Version to set the database to.
    #[arg(long = "version", value_name = "VERSION")]
    target: Option<u32>,

    /// Don't write a new version (only logs the stored one). `--dry-run=false`
    /// turns off a `dry_run` set in the config file.
    #[arg(
        short = 'n',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    dry_run: Option<bool>,

    /// Path to a TOML configuration file with `db`, `version` and `dry_run`
    /// keys. Command-line flags override file settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "WALLETDB_LOG_LEVEL")]
    log_level: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    db: Option<PathBuf>,
    version: Option<u32>,
    #[serde(default)]
    dry_run: bool,
}

fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(args::normalize(std::env::args_os()));

    walletdb_utils::init_tracing(&cli.log_level);

    let file_config = match cli.config.as_deref() {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };

    let config = StampConfig::new(
        cli.db.or(file_config.db).unwrap_or_default(),
        cli.target.or(file_config.version).unwrap_or(0),
        cli.dry_run.unwrap_or(file_config.dry_run),
    )?;

    walletdb_stamper::run(&config)?;

    Ok(())
}
