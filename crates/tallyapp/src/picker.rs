//! # Weighted Selector
//!
//! A draw is a cumulative-weight roulette: with `total = Σ weight`, pick
//! `r` uniformly in `[0, total)` and walk the choices subtracting each weight;
//! the first choice that brings the remainder to zero or below wins. Each
//! choice therefore wins with probability `weight / total`.
//!
//! The draw is instantaneous. Any "spinning" effect is the caller's business
//! and must not influence the result.
//!
//! Callers are expected to pass choices through
//! [`crate::query::eligible_for_selection`] first: a zero weight is not "very
//! unlikely", it is not a candidate at all.

use crate::error::{Result, TallyError};
use crate::model::Choice;
use rand::Rng;

pub fn draw<R: Rng + ?Sized>(choices: &[Choice], rng: &mut R) -> Result<String> {
    let Some(last) = choices.last() else {
        return Err(TallyError::InvalidInput(
            "No choices available to draw from.".to_string(),
        ));
    };

    let total: f64 = choices.iter().map(|c| c.weight).sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(TallyError::InvalidInput(
            "Total weight must be greater than 0.".to_string(),
        ));
    }

    let mut remainder = rng.gen_range(0.0..total);
    for choice in choices {
        remainder -= choice.weight;
        if remainder <= 0.0 {
            return Ok(choice.label.clone());
        }
    }

    // Floating-point drift can leave a tiny positive remainder after the walk.
    Ok(last.label.clone())
}

/// A named, built-in choice list.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub choices: Vec<Choice>,
}

pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Lunch (favoured)",
            choices: vec![
                Choice::new("Pizza", 5.0),
                Choice::new("Sushi", 2.0),
                Choice::new("Salad", 1.0),
            ],
        },
        Preset {
            name: "Even Split",
            choices: vec![
                Choice::new("A", 1.0),
                Choice::new("B", 1.0),
                Choice::new("C", 1.0),
            ],
        },
        Preset {
            name: "Night Out",
            choices: vec![
                Choice::new("Movies", 2.0),
                Choice::new("Bowling", 1.0),
                Choice::new("Arcade", 1.0),
            ],
        },
    ]
}

/// Look a preset up by name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<Preset> {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Validate a single choice typed into the editor. Returns the trimmed choice.
pub fn validate_choice(label: &str, weight: f64) -> Result<Choice> {
    let label = label.trim();
    if label.is_empty() {
        return Err(TallyError::Validation("Label cannot be empty.".to_string()));
    }
    if !weight.is_finite() || weight <= 0.0 {
        return Err(TallyError::Validation(
            "Weight must be a number greater than 0.".to_string(),
        ));
    }
    Ok(Choice::new(label, weight))
}
