use crate::commands::helpers::{choices, history};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::HistoryEntry;
use crate::picker::draw;
use crate::query::eligible_for_selection;
use crate::store::backend::StorageBackend;
use chrono::Utc;
use rand::Rng;
use tracing::info;

/// Draw one saved choice by weight and record it at the top of the history.
/// A failed draw leaves the history untouched.
pub fn run<B: StorageBackend, R: Rng + ?Sized>(backend: &B, rng: &mut R) -> Result<CmdResult> {
    let eligible = eligible_for_selection(&choices(backend).load()?);
    if eligible.is_empty() {
        return Err(TallyError::InvalidInput(
            "No saved choices, please add some first.".to_string(),
        ));
    }

    let winner = draw(&eligible, rng)?;
    history(backend).prepend(HistoryEntry {
        time: Utc::now(),
        result: winner.clone(),
    })?;
    info!(winner = %winner, candidates = eligible.len(), "spin");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Winner: {}", winner)));
    Ok(result.with_winner(winner).with_choices(eligible))
}
