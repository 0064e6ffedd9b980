//! # Tally Architecture
//!
//! Tally is a **UI-agnostic personal record library**: an exercise logger and a
//! weighted decision picker sharing one persisted-collection core. The `tally`
//! binary is one client of it; nothing in here knows about a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (the `tally` crate)                              │
//! │  - Parses arguments, renders CmdResult, handles exit codes  │
//! │  - Initializes logging                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the backend, the RNG and "today"                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business operations, returns CmdResult                   │
//! └─────────────────────────────────────────────────────────────┘
//!               │                               │
//!               ▼                               ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────┐
//! │  Pure engines             │   │  Storage Layer (store/)     │
//! │  query, stats, picker,    │   │  - Collection<B, T>         │
//! │  transfer                 │   │  - StorageBackend port      │
//! └───────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! ## Key Principle: Inject Everything Ambient
//!
//! Storage, randomness and the current date are passed in. The engines are
//! pure functions over borrowed snapshots, commands take a `&B:
//! StorageBackend` and a `&mut R: Rng`, and tests run against
//! [`store::mem_backend::MemBackend`] with a seeded `StdRng`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`store`]: storage port, backends and typed collections
//! - [`model`]: record types (`Stored`, `ExerciseEntry`, `Choice`, `HistoryEntry`)
//! - [`query`]: filtering and ordering of entries
//! - [`stats`]: totals, per-day buckets, personal bests
//! - [`picker`]: weighted draw and built-in presets
//! - [`transfer`]: JSON export and merge-import
//! - [`ids`]: fresh record ids
//! - [`config`]: configuration
//! - [`init`]: data directory resolution and context setup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod init;
pub mod model;
pub mod picker;
pub mod query;
pub mod stats;
pub mod store;
pub mod transfer;
