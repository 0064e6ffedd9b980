use crate::commands::helpers::entries;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::store::backend::StorageBackend;
use crate::transfer::import_merge;
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::info;

/// Merge the entries in the JSON file at `path` into the store.
pub fn run<B: StorageBackend, R: Rng + ?Sized>(
    backend: &B,
    rng: &mut R,
    path: &Path,
) -> Result<CmdResult> {
    let bytes = fs::read(path).map_err(TallyError::Io)?;
    let blob = String::from_utf8(bytes)
        .map_err(|_| TallyError::InvalidFormat("Could not parse JSON file.".to_string()))?;
    let result = import_blob(backend, rng, &blob)?;
    Ok(result.with_paths(vec![path.to_path_buf()]))
}

pub fn import_blob<B: StorageBackend, R: Rng + ?Sized>(
    backend: &B,
    rng: &mut R,
    blob: &str,
) -> Result<CmdResult> {
    let collection = entries(backend);
    let existing = collection.load()?;
    let outcome = import_merge(&existing, blob, rng)?;

    if outcome.added > 0 {
        collection.save(&outcome.merged)?;
    }
    info!(
        added = outcome.added,
        duplicates = outcome.duplicates,
        "import merged"
    );

    let new_entries = outcome.merged[existing.len()..].to_vec();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} new entries ({} duplicates skipped)",
        outcome.added, outcome.duplicates
    )));
    Ok(result.with_affected_entries(new_entries))
}
