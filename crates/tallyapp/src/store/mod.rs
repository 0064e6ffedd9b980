//! # Storage Layer
//!
//! Storage is split in two:
//!
//! 1. **Backend** ([`backend::StorageBackend`]): a string-keyed key-value port.
//!    It only knows how to get, set and remove opaque strings.
//! 2. **Collection** ([`Collection`]): a typed view over one key holding a JSON
//!    array of records. It owns parsing, serialization and the record
//!    lifecycle (create, update, remove).
//!
//! ## Keys
//!
//! | Key | Content |
//! |-----|---------|
//! | [`ENTRIES_KEY`] | exercise entries, `Vec<Stored<ExerciseEntry>>` |
//! | [`CHOICES_KEY`] | picker choices, `Vec<Choice>` |
//! | [`HISTORY_KEY`] | picker history, `Vec<HistoryEntry>`, newest first |
//! | [`PRESET_KEY`] | name of the last loaded preset (bare string) |
//! | [`THEME_KEY`] | `light` or `dark` (bare string) |
//!
//! The entries key carries a schema version suffix. There is no migration: a
//! future schema gets a new key.
//!
//! ## Malformed Data
//!
//! A collection whose stored value is not valid UTF-8 or does not parse is
//! treated as empty. This is logged at `warn` and never surfaced as an error.
//! The next successful write replaces the bad data.
//!
//! ## Write Discipline
//!
//! Every mutator is a read-modify-write of the whole collection and persists
//! before returning. Validation happens before the write, so a rejected
//! operation leaves the stored value untouched. There is no locking: two
//! processes writing the same key race and the last write wins.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key in the data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

use crate::error::{Result, TallyError};
use crate::ids::fresh_id;
use crate::model::{Patchable, Stored, Validate};
use backend::StorageBackend;
use chrono::Utc;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::marker::PhantomData;
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub const ENTRIES_KEY: &str = "exercise_tracker_entries_v1";
pub const THEME_KEY: &str = "exercise_tracker_theme";
pub const CHOICES_KEY: &str = "wdp_choices";
pub const HISTORY_KEY: &str = "wdp_history";
pub const PRESET_KEY: &str = "wdp_preset";

/// A typed collection persisted as a JSON array under a single key.
pub struct Collection<'a, B: StorageBackend, T> {
    backend: &'a B,
    key: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, B, T> Collection<'a, B, T>
where
    B: StorageBackend,
    T: Serialize + DeserializeOwned,
{
    pub fn new(backend: &'a B, key: &'static str) -> Self {
        Self {
            backend,
            key,
            _marker: PhantomData,
        }
    }

    /// Load the whole collection. Absent or unparsable data yields an empty list.
    pub fn load(&self) -> Result<Vec<T>> {
        let raw = match self.backend.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(TallyError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(key = self.key, error = %err, "discarding unreadable collection");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(key = self.key, error = %err, "discarding malformed collection");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the whole collection.
    pub fn save(&self, records: &[T]) -> Result<()> {
        let content = serde_json::to_string(records).map_err(TallyError::Serialization)?;
        self.backend.set(self.key, &content)?;
        debug!(key = self.key, count = records.len(), "collection saved");
        Ok(())
    }

    /// Insert at the front. Used for newest-first logs.
    pub fn prepend(&self, item: T) -> Result<()> {
        let mut records = self.load()?;
        records.insert(0, item);
        self.save(&records)
    }

    /// Drop the key entirely; the next load sees an empty collection.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(self.key)?;
        debug!(key = self.key, "collection cleared");
        Ok(())
    }
}

impl<'a, B, T> Collection<'a, B, Stored<T>>
where
    B: StorageBackend,
    T: Serialize + DeserializeOwned + Clone + Validate + Patchable,
{
    /// Validate `body`, stamp it with a fresh id and the current time, append and persist.
    pub fn create<R: Rng + ?Sized>(&self, body: T, rng: &mut R) -> Result<Stored<T>> {
        body.validate()?;

        let mut records = self.load()?;
        let now = Utc::now();
        let record = Stored::new(fresh_id(rng), now, body);
        records.push(record.clone());
        self.save(&records)?;

        Ok(record)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Stored<T>> {
        self.load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| TallyError::NotFound(id.to_string()))
    }

    /// Merge `patch` over the record with `id`. Fields absent from the patch,
    /// `id` and `createdAt` are left as they were.
    pub fn update_by_id(&self, id: &str, patch: T::Patch) -> Result<Stored<T>> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| TallyError::NotFound(id.to_string()))?;

        record.body.apply(patch);
        record.body.validate()?;
        let updated = record.clone();

        self.save(&records)?;
        Ok(updated)
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn remove_by_id(&self, id: &str) -> Result<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!(key = self.key, id, "remove of unknown id ignored");
            return Ok(());
        }
        self.save(&records)
    }
}

/// A single bare-string preference value.
pub struct Preference<'a, B: StorageBackend> {
    backend: &'a B,
    key: &'static str,
}

impl<'a, B: StorageBackend> Preference<'a, B> {
    pub fn new(backend: &'a B, key: &'static str) -> Self {
        Self { backend, key }
    }

    pub fn get(&self) -> Result<Option<String>> {
        self.backend.get(self.key)
    }

    pub fn set(&self, value: &str) -> Result<()> {
        self.backend.set(self.key, value)
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(self.key)
    }
}
