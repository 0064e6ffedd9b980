//! Editing the saved choice list.
//!
//! The list is stored wholesale. Individual positions are 1-based, the way
//! the CLI shows them.

use crate::commands::helpers::{choices, preset};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::Choice;
use crate::picker::validate_choice;
use crate::store::backend::StorageBackend;

pub fn list<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let saved = choices(backend).load()?;
    let mut result = CmdResult::default();
    if saved.is_empty() {
        result.add_message(CmdMessage::info(
            "No choices saved yet. Add some or pick a preset.",
        ));
    }
    Ok(result.with_choices(saved))
}

pub fn add<B: StorageBackend>(backend: &B, label: &str, weight: f64) -> Result<CmdResult> {
    let choice = validate_choice(label, weight)?;
    let collection = choices(backend);
    let mut saved = collection.load()?;
    saved.push(choice);
    collection.save(&saved)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Added"));
    Ok(result.with_choices(saved))
}

pub fn remove<B: StorageBackend>(backend: &B, position: usize) -> Result<CmdResult> {
    let collection = choices(backend);
    let mut saved = collection.load()?;
    if position == 0 || position > saved.len() {
        return Err(TallyError::InvalidInput(format!(
            "No choice at position {}",
            position
        )));
    }
    saved.remove(position - 1);
    collection.save(&saved)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Choice removed"));
    Ok(result.with_choices(saved))
}

/// Replace the saved list with the valid entries of `edited`. Invalid rows are
/// dropped silently; an edit with no valid rows is rejected.
pub fn save<B: StorageBackend>(backend: &B, edited: Vec<Choice>) -> Result<CmdResult> {
    let valid: Vec<Choice> = edited
        .into_iter()
        .map(|c| Choice::new(c.label.trim(), c.weight))
        .filter(Choice::is_eligible)
        .collect();
    if valid.is_empty() {
        return Err(TallyError::Validation("No valid choices to save.".to_string()));
    }
    choices(backend).save(&valid)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Choices saved"));
    Ok(result.with_choices(valid))
}

/// Remove the saved list and forget which preset it came from.
pub fn clear<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    choices(backend).clear()?;
    preset(backend).clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Choices cleared"));
    Ok(result)
}
