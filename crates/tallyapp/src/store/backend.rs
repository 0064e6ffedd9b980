use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::Collection`] handles the "what" (typed records, parsing,
/// create/update/remove).
///
/// Values are opaque strings. Collections store JSON arrays; preferences
/// (theme, selected preset) store the bare value.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    /// MUST be atomic: a later `get` sees either the old or the new value, never a mix.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
