use crate::commands::helpers::{entries, resolve_entry_id};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;

/// Remove an entry. Deleting an id that does not exist is not an error.
pub fn run<B: StorageBackend>(backend: &B, id: &str) -> Result<CmdResult> {
    let collection = entries(backend);
    let snapshot = collection.load()?;

    let mut result = CmdResult::default();
    let Some(id) = resolve_entry_id(&snapshot, id)? else {
        result.add_message(CmdMessage::info(format!(
            "No entry with id {}, nothing deleted",
            id.trim()
        )));
        return Ok(result);
    };

    let removed = snapshot.iter().find(|r| r.id == id).cloned();
    collection.remove_by_id(&id)?;

    if let Some(removed) = removed {
        result.add_message(CmdMessage::success(format!(
            "Entry deleted: {} on {}",
            removed.body.activity, removed.body.date
        )));
        result.affected_entries.push(removed);
    }
    Ok(result)
}
