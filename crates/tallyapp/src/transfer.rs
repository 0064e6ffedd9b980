//! # Transfer Codec
//!
//! Moves whole collections in and out of the app as a JSON array.
//!
//! Export is lossless: `id` and `createdAt` are written along with the body,
//! so an export imported into an empty store reproduces it exactly.
//!
//! Import is a merge by identity. Incoming records whose `id` is already
//! present, either in the existing collection or earlier in the same import,
//! are skipped and counted as duplicates. Records without an `id` get a fresh
//! one; records without `createdAt` are stamped with the import time.
//!
//! The payload is parsed and validated in full before anything is merged. A
//! single bad element rejects the whole import, so the caller never persists
//! a partial merge.

use crate::error::{Result, TallyError};
use crate::ids::fresh_id;
use crate::model::{Stored, Validate};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Pretty-printed JSON array of the full snapshot.
pub fn export_all<T: Serialize>(snapshot: &[T]) -> Result<String> {
    serde_json::to_string_pretty(snapshot).map_err(TallyError::Serialization)
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("exercise-tracker-export-{}.json", today.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome<T> {
    /// Existing records followed by the newly accepted ones, in payload order.
    pub merged: Vec<Stored<T>>,
    pub added: usize,
    pub duplicates: usize,
}

pub fn import_merge<T, R>(
    existing: &[Stored<T>],
    blob: &str,
    rng: &mut R,
) -> Result<ImportOutcome<T>>
where
    T: DeserializeOwned + Validate + Clone,
    R: Rng + ?Sized,
{
    let incoming = parse_records::<T, R>(blob, rng)?;
    let total = incoming.len();

    let mut seen: HashSet<String> = existing.iter().map(|r| r.id.clone()).collect();
    let mut merged = existing.to_vec();
    for record in incoming {
        if seen.insert(record.id.clone()) {
            merged.push(record);
        }
    }

    let added = merged.len() - existing.len();
    Ok(ImportOutcome {
        merged,
        added,
        duplicates: total - added,
    })
}

fn parse_records<T, R>(blob: &str, rng: &mut R) -> Result<Vec<Stored<T>>>
where
    T: DeserializeOwned + Validate,
    R: Rng + ?Sized,
{
    let value: Value = serde_json::from_str(blob)
        .map_err(|_| TallyError::InvalidFormat("Could not parse JSON file.".to_string()))?;
    let Value::Array(items) = value else {
        return Err(TallyError::InvalidFormat(
            "Invalid file: expected an array.".to_string(),
        ));
    };

    let now = Utc::now();
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let position = idx + 1;
            let Value::Object(mut fields) = item else {
                return Err(TallyError::InvalidFormat(format!(
                    "Invalid file: element {} is not an object.",
                    position
                )));
            };

            let has_id = fields
                .get("id")
                .is_some_and(|id| !id.is_null() && id.as_str() != Some(""));
            if !has_id {
                fields.insert("id".to_string(), Value::String(fresh_id(rng)));
            }
            if fields.get("createdAt").map_or(true, Value::is_null) {
                fields.insert("createdAt".to_string(), Value::String(now.to_rfc3339()));
            }

            let record: Stored<T> = serde_json::from_value(Value::Object(fields)).map_err(|err| {
                TallyError::InvalidFormat(format!("Invalid file: element {}: {}", position, err))
            })?;
            record.body.validate().map_err(|err| {
                TallyError::InvalidFormat(format!("Invalid file: element {}: {}", position, err))
            })?;
            Ok(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ExerciseEntry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(id: &str) -> Stored<ExerciseEntry> {
        Stored::new(
            id.to_string(),
            Utc::now(),
            ExerciseEntry::new(date("2024-01-01"), "Run", Category::Cardio, 30),
        )
    }

    fn entry_json(id: &str) -> String {
        format!(
            r#"{{"id":"{}","createdAt":"2024-01-01T10:00:00Z","date":"2024-01-01","activity":"Run","category":"Cardio","durationMin":30}}"#,
            id
        )
    }

    #[test]
    fn test_export_then_import_into_empty_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut lift = record("b");
        lift.body.category = Category::Strength;
        lift.body.sets = Some(5);
        lift.body.weight = Some(102.5);
        lift.body.notes = Some("PR".to_string());
        let snapshot = vec![record("a"), lift];

        let blob = export_all(&snapshot).unwrap();
        let outcome = import_merge::<ExerciseEntry, _>(&[], &blob, &mut rng).unwrap();

        assert_eq!(outcome.merged, snapshot);
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.duplicates, 0);
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let blob = export_all(&[record("a")]).unwrap();
        assert!(blob.starts_with("[\n  {"));
        assert!(blob.contains("\"durationMin\": 30"));
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(date("2024-03-09")),
            "exercise-tracker-export-2024-03-09.json"
        );
    }

    #[test]
    fn test_import_skips_existing_ids() {
        let mut rng = StdRng::seed_from_u64(2);
        let existing = vec![record("1")];
        let blob = format!("[{},{}]", entry_json("1"), entry_json("2"));

        let outcome = import_merge(&existing, &blob, &mut rng).unwrap();

        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.duplicates, 1);
        let ids: Vec<&str> = outcome.merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(outcome.merged[0], existing[0]);
    }

    #[test]
    fn test_import_dedupes_within_payload() {
        let mut rng = StdRng::seed_from_u64(3);
        let blob = format!("[{},{}]", entry_json("x"), entry_json("x"));
        let outcome = import_merge::<ExerciseEntry, _>(&[], &blob, &mut rng).unwrap();
        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.duplicates, 1);
        assert_eq!(outcome.merged.len(), 1);
    }

    #[test]
    fn test_import_assigns_missing_id_and_created_at() {
        let mut rng = StdRng::seed_from_u64(4);
        let blob = r#"[
            {"date":"2024-01-05","activity":"Swim","category":"Cardio","durationMin":40},
            {"id":"","createdAt":null,"date":"2024-01-06","activity":"Swim","category":"Cardio","durationMin":20}
        ]"#;
        let before = Utc::now();

        let outcome = import_merge::<ExerciseEntry, _>(&[], blob, &mut rng).unwrap();

        assert_eq!(outcome.added, 2);
        let first = &outcome.merged[0];
        let second = &outcome.merged[1];
        assert!(!first.id.is_empty());
        assert!(!second.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(first.created_at >= before);
        assert_eq!(first.body.sets, None);
    }

    #[test]
    fn test_import_rejects_non_array() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = import_merge::<ExerciseEntry, _>(&[], r#"{"id":"1"}"#, &mut rng).unwrap_err();
        assert!(matches!(err, TallyError::InvalidFormat(_)));
        assert_eq!(err.to_string(), "Invalid file: expected an array.");
    }

    #[test]
    fn test_import_rejects_unparsable_text() {
        let mut rng = StdRng::seed_from_u64(6);
        let err = import_merge::<ExerciseEntry, _>(&[], "not json", &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "Could not parse JSON file.");
    }

    #[test]
    fn test_import_rejects_non_object_element() {
        let mut rng = StdRng::seed_from_u64(7);
        let blob = format!("[{}, 42]", entry_json("1"));
        let err = import_merge::<ExerciseEntry, _>(&[], &blob, &mut rng).unwrap_err();
        assert!(matches!(err, TallyError::InvalidFormat(msg) if msg.contains("element 2")));
    }

    #[test]
    fn test_import_rejects_invalid_entry() {
        let mut rng = StdRng::seed_from_u64(8);
        let blob = r#"[{"id":"1","date":"2024-01-01","activity":"  ","category":"Cardio","durationMin":30}]"#;
        let err = import_merge::<ExerciseEntry, _>(&[], blob, &mut rng).unwrap_err();
        assert!(matches!(err, TallyError::InvalidFormat(_)));
    }

    #[test]
    fn test_import_empty_array_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(9);
        let existing = vec![record("1")];
        let outcome = import_merge(&existing, "[]", &mut rng).unwrap();
        assert_eq!(outcome.merged, existing);
        assert_eq!((outcome.added, outcome.duplicates), (0, 0));
    }
}
