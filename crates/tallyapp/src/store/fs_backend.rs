use super::backend::StorageBackend;
use crate::error::{Result, TallyError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one file per key inside a data directory.
///
/// ```text
/// <root>/
/// ├── exercise_tracker_entries_v1   # JSON array
/// ├── wdp_choices                   # JSON array
/// ├── wdp_history                   # JSON array
/// ├── wdp_preset                    # bare preset name
/// └── exercise_tracker_theme        # "light" | "dark"
/// ```
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(TallyError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TallyError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TallyError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(TallyError::Io)?;
        if let Err(err) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TallyError::Io(err));
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(TallyError::Io)?;
        }
        Ok(())
    }
}
