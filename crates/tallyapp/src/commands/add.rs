use crate::commands::helpers::entries;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ExerciseEntry;
use crate::store::backend::StorageBackend;
use rand::Rng;

pub fn run<B: StorageBackend, R: Rng + ?Sized>(
    backend: &B,
    rng: &mut R,
    entry: ExerciseEntry,
) -> Result<CmdResult> {
    let record = entries(backend).create(entry.normalized(), rng)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exercise saved: {} ({} min)",
        record.body.activity, record.body.duration_min
    )));
    Ok(result.with_affected_entries(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::model::Category;
    use crate::store::mem_backend::MemBackend;
    use crate::store::ENTRIES_KEY;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_add_persists_trimmed_entry() {
        let backend = MemBackend::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut entry = ExerciseEntry::new(day(), "  Squat ", Category::Strength, 40);
        entry.notes = Some("  ".to_string());

        let result = run(&backend, &mut rng, entry).unwrap();

        assert_eq!(result.affected_entries.len(), 1);
        let saved = entries(&backend).load().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].body.activity, "Squat");
        assert_eq!(saved[0].body.notes, None);
        assert_eq!(saved[0], result.affected_entries[0]);
    }

    #[test]
    fn test_add_rejects_missing_fields_without_writing() {
        let backend = MemBackend::new();
        let mut rng = StdRng::seed_from_u64(2);
        let entry = ExerciseEntry::new(day(), "", Category::Cardio, 30);

        let err = run(&backend, &mut rng, entry).unwrap_err();

        assert!(matches!(err, TallyError::Validation(_)));
        assert_eq!(err.to_string(), "Please fill in activity, date, and duration.");
        assert_eq!(backend.raw(ENTRIES_KEY), None);
    }
}
