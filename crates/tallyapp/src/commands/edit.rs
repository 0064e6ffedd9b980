use crate::commands::helpers::{entries, resolve_entry_id};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::EntryPatch;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(backend: &B, id: &str, patch: EntryPatch) -> Result<CmdResult> {
    let collection = entries(backend);
    let snapshot = collection.load()?;
    let id = resolve_entry_id(&snapshot, id)?.ok_or_else(|| TallyError::NotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    if patch.is_empty() {
        let current = collection.get_by_id(&id)?;
        result.add_message(CmdMessage::warning("Nothing to update."));
        return Ok(result.with_affected_entries(vec![current]));
    }

    let updated = collection.update_by_id(&id, patch)?;
    result.add_message(CmdMessage::success("Entry updated"));
    Ok(result.with_affected_entries(vec![updated]))
}
