//! # CLI Behavior
//!
//! This is **one possible UI client** for tally, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ### Naked Execution (`tally`)
//!
//! Running `tally` with no arguments lists the exercise log, newest first.
//!
//! ### Ids
//!
//! `edit` and `delete` take an entry id as printed by `tally log`. The first
//! eight characters shown there are enough as long as they are unique.
//!
//! ### Output Streams
//!
//! Rendered results go to stdout. Diagnostics (`-v` or `RUST_LOG`) and errors
//! go to stderr, and any error exits with status 1.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
