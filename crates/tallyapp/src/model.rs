//! # Data Model
//!
//! Every persisted collection is a JSON array under one storage key. Records
//! that need identity are wrapped in [`Stored`], which composes the store-assigned
//! fields (`id`, `createdAt`) with the record body. The body is flattened so the
//! JSON stays a single flat object:
//!
//! ```json
//! {
//!   "id": "3f2a9c1e-7b4d-4e8a-9c21-5d6f0a1b2c3d",
//!   "createdAt": "2024-01-02T08:15:00Z",
//!   "date": "2024-01-02",
//!   "activity": "Squat",
//!   "category": "Strength",
//!   "durationMin": 45,
//!   "sets": 5,
//!   "reps": 5,
//!   "weight": 225.0,
//!   "notes": null
//! }
//! ```
//!
//! Field names are camelCase so exports from older versions of the tracker
//! import without conversion.
//!
//! Choices and history entries carry no identity: the choice list is rewritten
//! wholesale on every save and the history is append-only.

use crate::error::{Result, TallyError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A record plus the fields the store assigns at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Stored<T> {
    pub fn new(id: String, created_at: DateTime<Utc>, body: T) -> Self {
        Self {
            id,
            created_at,
            body,
        }
    }
}

/// Checked before anything is persisted. A failing record never reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Shallow, field-by-field merge of a patch over an existing record body.
pub trait Patchable {
    type Patch;

    fn apply(&mut self, patch: Self::Patch);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Strength,
    Cardio,
    Mobility,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Strength,
        Category::Cardio,
        Category::Mobility,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Mobility => "Mobility",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown category: {} (expected Strength, Cardio, Mobility or Other)",
                    s
                )
            })
    }
}

/// One logged exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    /// The day the session happened, chosen by the user.
    pub date: NaiveDate,
    pub activity: String,
    pub category: Category,
    pub duration_min: u32,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExerciseEntry {
    pub fn new(date: NaiveDate, activity: &str, category: Category, duration_min: u32) -> Self {
        Self {
            date,
            activity: activity.to_string(),
            category,
            duration_min,
            sets: None,
            reps: None,
            weight: None,
            notes: None,
        }
    }

    /// Trims text fields the way the entry form does: surrounding whitespace is
    /// dropped and blank notes become `None`.
    pub fn normalized(mut self) -> Self {
        self.activity = self.activity.trim().to_string();
        self.notes = normalize_notes(self.notes);
        self
    }
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

impl Validate for ExerciseEntry {
    fn validate(&self) -> Result<()> {
        if self.activity.trim().is_empty() || self.duration_min == 0 {
            return Err(TallyError::Validation(
                "Please fill in activity, date, and duration.".to_string(),
            ));
        }
        if self.sets == Some(0) || self.reps == Some(0) {
            return Err(TallyError::Validation(
                "Sets and reps must be greater than 0 when given.".to_string(),
            ));
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(TallyError::Validation(
                    "Weight must be a number greater than 0 when given.".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Partial update for an [`ExerciseEntry`].
///
/// Outer `None` leaves a field untouched. For the nullable fields,
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub activity: Option<String>,
    pub category: Option<Category>,
    pub duration_min: Option<u32>,
    pub sets: Option<Option<u32>>,
    pub reps: Option<Option<u32>>,
    pub weight: Option<Option<f64>>,
    pub notes: Option<Option<String>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        *self == EntryPatch::default()
    }
}

impl Patchable for ExerciseEntry {
    type Patch = EntryPatch;

    fn apply(&mut self, patch: EntryPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(activity) = patch.activity {
            self.activity = activity.trim().to_string();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(duration) = patch.duration_min {
            self.duration_min = duration;
        }
        if let Some(sets) = patch.sets {
            self.sets = sets;
        }
        if let Some(reps) = patch.reps {
            self.reps = reps;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(notes) = patch.notes {
            self.notes = normalize_notes(notes);
        }
    }
}

/// A labelled option for the weighted picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub weight: f64,
}

impl Choice {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }

    /// Only eligible choices take part in a draw.
    pub fn is_eligible(&self) -> bool {
        !self.label.trim().is_empty() && self.weight.is_finite() && self.weight > 0.0
    }
}

/// One past draw. `result` is a copy of the winning label, not a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: DateTime<Utc>,
    pub result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}
