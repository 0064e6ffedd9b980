//! # Command Layer
//!
//! This module contains the **core business logic** of tally. Each command lives in its
//! own submodule and implements plain Rust functions over a [`StorageBackend`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load snapshots through the typed collections in [`crate::store`]
//! - Run the pure engines ([`crate::query`], [`crate::stats`], [`crate::picker`],
//!   [`crate::transfer`]) over them
//! - Persist changes before returning
//! - Return a structured [`CmdResult`] with records and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout or stderr, no formatting for display
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//! - **Ambient state**: the clock's "today" and the random source are passed in
//!
//! `export` and `import` are the exception to the first rule in one respect:
//! they read and write the transfer file at a path chosen by the caller.
//!
//! ## Testing Strategy
//!
//! **This is where most of the testing lives.** Command tests use
//! [`MemBackend`](crate::store::mem_backend::MemBackend) and a seeded
//! `StdRng`, and check both the returned `CmdResult` and what ended up in
//! storage.
//!
//! ## Command Modules
//!
//! Exercise logger:
//! - [`add`]: log a new entry
//! - [`log`]: filtered, newest-first listing
//! - [`edit`]: patch an entry
//! - [`delete`]: remove an entry
//! - [`stats`]: today summary, per-day minutes, personal bests
//! - [`export`] / [`import`]: JSON transfer
//! - [`theme`]: light/dark preference
//!
//! Decision picker:
//! - [`choices`]: edit the saved choice list
//! - [`spin`]: weighted draw plus history entry
//! - [`history`]: past draws
//! - [`presets`]: built-in choice lists
//!
//! Shared:
//! - [`helpers`]: collection accessors and id resolution
//!
//! [`StorageBackend`]: crate::store::backend::StorageBackend

use crate::model::{Choice, ExerciseEntry, HistoryEntry, Stored, Theme};
use crate::picker::Preset;
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod choices;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod history;
pub mod import;
pub mod log;
pub mod presets;
pub mod spin;
pub mod stats;
pub mod theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured output of every command. The UI decides how to render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Entries created or modified by the command.
    pub affected_entries: Vec<Stored<ExerciseEntry>>,
    /// Entries to display, already filtered and ordered.
    pub listed_entries: Vec<Stored<ExerciseEntry>>,
    pub choices: Vec<Choice>,
    pub history: Vec<HistoryEntry>,
    pub presets: Vec<Preset>,
    pub stats: Option<stats::StatsReport>,
    /// Label picked by a spin.
    pub winner: Option<String>,
    pub theme: Option<Theme>,
    /// Files written or read.
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Stored<ExerciseEntry>>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<Stored<ExerciseEntry>>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_stats(mut self, stats: stats::StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_winner(mut self, winner: String) -> Self {
        self.winner = Some(winner);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }
}
