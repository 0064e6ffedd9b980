//! # Configuration
//!
//! Tally configuration is managed by [`confique`], which layers environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `TALLY_STATS_DAYS`, `TALLY_HISTORY_LIMIT`, `TALLY_EXPORT_DIR`.
//! 2. **Config file**: `tally.toml` in the data directory. A missing file is fine.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `stats_days` | `7` | Days covered by the `stats` bar chart |
//! | `history_limit` | `12` | Draws shown by `history` |
//! | `export_dir` | current directory | Where `export` writes when no path is given |

use crate::error::{Result, TallyError};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "tally.toml";

/// Configuration for tally, stored in `tally.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    /// Number of days shown by `tally stats`, ending today.
    #[config(env = "TALLY_STATS_DAYS", default = 7)]
    pub stats_days: u32,

    /// Number of past draws shown by `tally history`.
    #[config(env = "TALLY_HISTORY_LIMIT", default = 12)]
    pub history_limit: usize,

    /// Directory for exports. When absent, exports land in the current directory.
    #[config(env = "TALLY_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            stats_days: 7,
            history_limit: 12,
            export_dir: None,
        }
    }
}

impl TallyConfig {
    /// Load from the environment and `<data_dir>/tally.toml`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE_NAME))
            .load()
            .map_err(|err| TallyError::Config(err.to_string()))
    }

    /// Directory exports are written to, relative to `cwd` when unset.
    pub fn export_dir(&self, cwd: &Path) -> PathBuf {
        match &self.export_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TallyConfig::default();
        assert_eq!(config.stats_days, 7);
        assert_eq!(config.history_limit, 12);
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "stats_days = 14\nexport_dir = \"exports\"\n",
        )
        .unwrap();

        let config = TallyConfig::builder()
            .file(dir.path().join(CONFIG_FILE_NAME))
            .load()
            .unwrap();

        assert_eq!(config.stats_days, 14);
        assert_eq!(config.history_limit, 12);
        assert_eq!(config.export_dir, Some(PathBuf::from("exports")));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = TallyConfig::builder()
            .file(dir.path().join(CONFIG_FILE_NAME))
            .load()
            .unwrap();
        assert_eq!(config, TallyConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "stats_days = \"many\"").unwrap();
        let result = TallyConfig::load(dir.path());
        assert!(matches!(result, Err(TallyError::Config(_))));
    }

    #[test]
    fn test_export_dir_resolution() {
        let cwd = Path::new("/work");
        assert_eq!(TallyConfig::default().export_dir(cwd), PathBuf::from("/work"));

        let relative = TallyConfig {
            export_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert_eq!(relative.export_dir(cwd), PathBuf::from("/work/out"));

        let absolute = TallyConfig {
            export_dir: Some(PathBuf::from("/tmp/exports")),
            ..Default::default()
        };
        assert_eq!(absolute.export_dir(cwd), PathBuf::from("/tmp/exports"));
    }
}
