//! # Query Engine
//!
//! Pure functions over a snapshot of a collection. Nothing here touches
//! storage: callers load a snapshot, hand it in by reference, and get owned
//! results back. The snapshot itself is never modified.
//!
//! ## Log Ordering
//!
//! [`filter_entries`] returns newest first, by the composite key
//! (`date`, `createdAt`) descending. Records with an identical composite key
//! (same day, same creation instant, which happens with imported data) fall
//! back to insertion order reversed: the one that appears later in the
//! collection comes first. This makes the ordering total and deterministic.

use crate::model::{Category, Choice, ExerciseEntry, Stored};
use chrono::NaiveDate;

/// Text fields that a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Activity,
    Notes,
}

impl TextField {
    fn value(self, entry: &ExerciseEntry) -> &str {
        match self {
            TextField::Activity => &entry.activity,
            TextField::Notes => entry.notes.as_deref().unwrap_or(""),
        }
    }
}

/// Criteria for [`filter_entries`]. Every absent criterion matches all entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFilter {
    /// Case-insensitive substring. An empty string matches everything.
    pub search: Option<String>,
    pub category: Option<Category>,
    /// Inclusive lower bound on the entry date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date.
    pub date_to: Option<NaiveDate>,
    /// Fields the search term is matched against.
    pub search_fields: Vec<TextField>,
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            date_from: None,
            date_to: None,
            search_fields: vec![TextField::Activity, TextField::Notes],
        }
    }
}

impl EntryFilter {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn with_search_fields(mut self, fields: &[TextField]) -> Self {
        self.search_fields = fields.to_vec();
        self
    }

    fn matches(&self, entry: &ExerciseEntry, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let hit = self
                .search_fields
                .iter()
                .any(|field| field.value(entry).to_lowercase().contains(needle));
            if !hit {
                return false;
            }
        }
        if self.category.is_some_and(|c| c != entry.category) {
            return false;
        }
        if self.date_from.is_some_and(|from| entry.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| entry.date > to) {
            return false;
        }
        true
    }
}

/// Filter a snapshot of entries and sort the matches newest first.
pub fn filter_entries(
    snapshot: &[Stored<ExerciseEntry>],
    filter: &EntryFilter,
) -> Vec<Stored<ExerciseEntry>> {
    let needle = filter
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matches: Vec<(usize, &Stored<ExerciseEntry>)> = snapshot
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(&record.body, needle.as_deref()))
        .collect();

    matches.sort_by(|(idx_a, a), (idx_b, b)| {
        b.body
            .date
            .cmp(&a.body.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| idx_b.cmp(idx_a))
    });

    matches.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Entries logged for exactly `date`, in collection order.
pub fn entries_on(snapshot: &[Stored<ExerciseEntry>], date: NaiveDate) -> Vec<&Stored<ExerciseEntry>> {
    snapshot.iter().filter(|r| r.body.date == date).collect()
}

/// Choices that may take part in a draw: non-blank label and a positive weight.
pub fn eligible_for_selection(choices: &[Choice]) -> Vec<Choice> {
    choices.iter().filter(|c| c.is_eligible()).cloned().collect()
}
