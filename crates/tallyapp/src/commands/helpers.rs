use crate::error::{Result, TallyError};
use crate::model::{Choice, ExerciseEntry, HistoryEntry, Stored};
use crate::store::backend::StorageBackend;
use crate::store::{
    Collection, Preference, CHOICES_KEY, ENTRIES_KEY, HISTORY_KEY, PRESET_KEY, THEME_KEY,
};

pub fn entries<B: StorageBackend>(backend: &B) -> Collection<'_, B, Stored<ExerciseEntry>> {
    Collection::new(backend, ENTRIES_KEY)
}

pub fn choices<B: StorageBackend>(backend: &B) -> Collection<'_, B, Choice> {
    Collection::new(backend, CHOICES_KEY)
}

pub fn history<B: StorageBackend>(backend: &B) -> Collection<'_, B, HistoryEntry> {
    Collection::new(backend, HISTORY_KEY)
}

pub fn preset<B: StorageBackend>(backend: &B) -> Preference<'_, B> {
    Preference::new(backend, PRESET_KEY)
}

pub fn theme<B: StorageBackend>(backend: &B) -> Preference<'_, B> {
    Preference::new(backend, THEME_KEY)
}

/// Resolve a user-typed id against the stored entries.
///
/// An exact match wins. Otherwise the input is treated as an id prefix, which
/// must match exactly one entry. Returns `Ok(None)` when nothing matches.
pub fn resolve_entry_id(snapshot: &[Stored<ExerciseEntry>], input: &str) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TallyError::InvalidInput("Entry id cannot be empty.".to_string()));
    }
    if snapshot.iter().any(|r| r.id == input) {
        return Ok(Some(input.to_string()));
    }

    let matches: Vec<&str> = snapshot
        .iter()
        .filter(|r| r.id.starts_with(input))
        .map(|r| r.id.as_str())
        .collect();
    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(only.to_string())),
        many => Err(TallyError::InvalidInput(format!(
            "Id prefix {} matches {} entries, use more characters",
            input,
            many.len()
        ))),
    }
}
