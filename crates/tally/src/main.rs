//! # Tally CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/tallyapp/`: core library with UI-agnostic business logic
//! - `crates/tally/`: this CLI tool, depends on the `tallyapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/tally/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/tallyapp/src/api.rs)                     │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible
//! for argument parsing, context initialization, dispatch, error reporting and
//! rendering.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each command and engine, property tests in
//!   `crates/tallyapp/tests/`.
//! - **CLI**: parser and renderer unit tests, plus end-to-end runs of the real
//!   binary in `tests/cli_e2e.rs` against a temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
