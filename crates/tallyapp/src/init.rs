//! # Data Directory and Context
//!
//! All persisted state lives in one data directory, one file per storage key
//! (see [`crate::store`]), next to the optional `tally.toml`.
//!
//! ## Resolution
//!
//! [`resolve_data_dir`] picks the directory in priority order:
//! 1. An explicit path (the CLI's `--data` flag).
//! 2. The `TALLY_DATA_DIR` environment variable. Tests use this to isolate state.
//! 3. The OS-appropriate data directory from the `directories` crate.
//!
//! The directory is created lazily on the first write, so read-only commands
//! on a fresh machine leave no trace.

use crate::api::TallyApi;
use crate::config::TallyConfig;
use crate::error::{Result, TallyError};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "TALLY_DATA_DIR";

pub struct TallyContext {
    pub api: TallyApi<FsBackend, StdRng>,
    pub config: TallyConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "tally", "tally")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TallyError::Config("Could not determine a data directory".to_string()))
}

/// Build the production context: filesystem backend, entropy-seeded RNG and
/// configuration loaded from the data directory.
pub fn initialize(data_override: Option<PathBuf>) -> Result<TallyContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = TallyConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "context initialized");

    let api = TallyApi::new(FsBackend::new(data_dir.clone()), StdRng::from_entropy());
    Ok(TallyContext {
        api,
        config,
        data_dir,
    })
}
