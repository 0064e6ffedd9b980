use crate::commands::helpers::history;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;

/// The most recent `limit` draws, newest first.
pub fn run<B: StorageBackend>(backend: &B, limit: usize) -> Result<CmdResult> {
    let mut entries = history(backend).load()?;
    entries.truncate(limit);

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info("No history yet."));
    }
    Ok(result.with_history(entries))
}
