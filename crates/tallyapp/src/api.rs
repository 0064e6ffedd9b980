//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all tally operations, regardless of the UI in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the ambient inputs** commands must not reach for themselves: the
//!   storage backend, the random source and the local "today"
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Terminal I/O**: no stdout, stderr or formatting
//!
//! ## Generic Over Backend and RNG
//!
//! `TallyApi<B: StorageBackend, R: Rng>`:
//! - Production: `TallyApi<FsBackend, StdRng>` seeded from OS entropy
//! - Testing: `TallyApi<MemBackend, StdRng>` with a fixed seed
//!
//! ## Testing Strategy
//!
//! API tests check that calls reach the right command with the right
//! arguments. Command behavior is tested in the command modules.

use crate::commands;
use crate::error::Result;
use crate::model::{Choice, EntryPatch, ExerciseEntry, Theme};
use crate::query::EntryFilter;
use crate::store::backend::StorageBackend;
use chrono::{Local, NaiveDate};
use rand::Rng;
use std::path::Path;

/// The main API facade for tally operations.
pub struct TallyApi<B: StorageBackend, R: Rng> {
    backend: B,
    rng: R,
}

impl<B: StorageBackend, R: Rng> TallyApi<B, R> {
    pub fn new(backend: B, rng: R) -> Self {
        Self { backend, rng }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The local calendar date, used wherever the UI says "today".
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    // --- exercise logger ---

    pub fn add_entry(&mut self, entry: ExerciseEntry) -> Result<commands::CmdResult> {
        commands::add::run(&self.backend, &mut self.rng, entry)
    }

    pub fn list_entries(&self, filter: &EntryFilter) -> Result<commands::CmdResult> {
        commands::log::run(&self.backend, filter)
    }

    pub fn edit_entry(&self, id: &str, patch: EntryPatch) -> Result<commands::CmdResult> {
        commands::edit::run(&self.backend, id, patch)
    }

    pub fn delete_entry(&self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.backend, id)
    }

    pub fn stats(&self, days: u32) -> Result<commands::CmdResult> {
        commands::stats::run(&self.backend, self.today(), days)
    }

    pub fn export_entries(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.backend, path)
    }

    pub fn import_entries(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&self.backend, &mut self.rng, path)
    }

    pub fn theme(&self) -> Result<commands::CmdResult> {
        commands::theme::get(&self.backend)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<commands::CmdResult> {
        commands::theme::set(&self.backend, theme)
    }

    pub fn toggle_theme(&self) -> Result<commands::CmdResult> {
        commands::theme::toggle(&self.backend)
    }

    // --- decision picker ---

    pub fn list_choices(&self) -> Result<commands::CmdResult> {
        commands::choices::list(&self.backend)
    }

    pub fn add_choice(&self, label: &str, weight: f64) -> Result<commands::CmdResult> {
        commands::choices::add(&self.backend, label, weight)
    }

    pub fn remove_choice(&self, position: usize) -> Result<commands::CmdResult> {
        commands::choices::remove(&self.backend, position)
    }

    pub fn save_choices(&self, edited: Vec<Choice>) -> Result<commands::CmdResult> {
        commands::choices::save(&self.backend, edited)
    }

    pub fn clear_choices(&self) -> Result<commands::CmdResult> {
        commands::choices::clear(&self.backend)
    }

    pub fn spin(&mut self) -> Result<commands::CmdResult> {
        commands::spin::run(&self.backend, &mut self.rng)
    }

    pub fn history(&self, limit: usize) -> Result<commands::CmdResult> {
        commands::history::run(&self.backend, limit)
    }

    pub fn list_presets(&self) -> Result<commands::CmdResult> {
        commands::presets::list(&self.backend)
    }

    pub fn use_preset(&self, name: &str) -> Result<commands::CmdResult> {
        commands::presets::use_preset(&self.backend, name)
    }
}
