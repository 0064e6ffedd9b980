use crate::commands::helpers::entries;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::store::backend::StorageBackend;
use crate::transfer::export_all;
use std::fs;
use std::path::Path;

/// Write every entry to `path` as a pretty-printed JSON array.
pub fn run<B: StorageBackend>(backend: &B, path: &Path) -> Result<CmdResult> {
    let snapshot = entries(backend).load()?;
    let blob = export_all(&snapshot)?;
    fs::write(path, blob).map_err(TallyError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} entries to {}",
        snapshot.len(),
        path.display()
    )));
    Ok(result.with_paths(vec![path.to_path_buf()]))
}
