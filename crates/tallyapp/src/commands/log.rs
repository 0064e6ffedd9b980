use crate::commands::helpers::entries;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{filter_entries, EntryFilter};
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(backend: &B, filter: &EntryFilter) -> Result<CmdResult> {
    let snapshot = entries(backend).load()?;
    let listed = filter_entries(&snapshot, filter);

    let mut result = CmdResult::default();
    if snapshot.is_empty() {
        result.add_message(CmdMessage::info("No entries yet."));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info("No entries match the current filters."));
    }
    Ok(result.with_listed_entries(listed))
}
