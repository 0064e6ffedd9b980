//! # Property-Based Tests
//!
//! Invariants of the pure engines over generated snapshots.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tallyapp::model::{Category, Choice, ExerciseEntry, Stored};
use tallyapp::picker::draw;
use tallyapp::query::{eligible_for_selection, filter_entries, EntryFilter};
use tallyapp::stats::{bucket_by_date, last_n_days, sum_field};
use tallyapp::transfer::{export_all, import_merge};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Strength),
        Just(Category::Cardio),
        Just(Category::Mobility),
        Just(Category::Other),
    ]
}

/// (day offset, creation offset in minutes, activity, category, minutes)
fn raw_entry() -> impl Strategy<Value = (i64, i64, String, Category, u32)> {
    (0i64..14, 0i64..600, "[a-zA-Z ]{1,12}", category(), 1u32..240)
        .prop_filter("activity must not be blank", |(_, _, activity, _, _)| {
            !activity.trim().is_empty()
        })
}

fn snapshot_from(raw: &[(i64, i64, String, Category, u32)]) -> Vec<Stored<ExerciseEntry>> {
    raw.iter()
        .enumerate()
        .map(|(idx, (day, created, activity, category, minutes))| {
            Stored::new(
                format!("id-{}", idx),
                base_time() + Duration::minutes(*created),
                ExerciseEntry::new(base_date() + Duration::days(*day), activity, *category, *minutes),
            )
        })
        .collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Filtering twice gives the same result and never touches the snapshot.
    #[test]
    fn filter_is_pure_and_deterministic(
        raw in vec(raw_entry(), 0..30),
        term in "[a-z]{0,2}",
    ) {
        let snapshot = snapshot_from(&raw);
        let copy = snapshot.clone();
        let filter = EntryFilter::default().with_search(term);

        let first = filter_entries(&snapshot, &filter);
        let second = filter_entries(&snapshot, &filter);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&snapshot, &copy);
    }

    /// Results are ordered by (date, createdAt) descending.
    #[test]
    fn filter_orders_newest_first(raw in vec(raw_entry(), 0..30)) {
        let snapshot = snapshot_from(&raw);
        let result = filter_entries(&snapshot, &EntryFilter::default());

        prop_assert_eq!(result.len(), snapshot.len());
        for pair in result.windows(2) {
            let a = (pair[0].body.date, pair[0].created_at);
            let b = (pair[1].body.date, pair[1].created_at);
            prop_assert!(a >= b);
        }
    }

    /// Date bounds are inclusive and exclude everything outside them.
    #[test]
    fn date_bounds_are_respected(
        raw in vec(raw_entry(), 0..30),
        from in 0i64..14,
        span in 0i64..14,
    ) {
        let snapshot = snapshot_from(&raw);
        let lo = base_date() + Duration::days(from);
        let hi = lo + Duration::days(span);
        let filter = EntryFilter::default().with_date_from(lo).with_date_to(hi);

        let result = filter_entries(&snapshot, &filter);

        let expected = snapshot
            .iter()
            .filter(|r| r.body.date >= lo && r.body.date <= hi)
            .count();
        prop_assert_eq!(result.len(), expected);
    }

    /// Per-day buckets over every day in range add up to the total duration.
    #[test]
    fn buckets_sum_to_total(raw in vec(raw_entry(), 0..30)) {
        let snapshot = snapshot_from(&raw);
        let days = last_n_days(base_date() + Duration::days(13), 14);

        let buckets = bucket_by_date(&snapshot, &days);
        let bucketed: u64 = buckets.iter().map(|b| b.minutes).sum();
        let total: u64 = sum_field(&snapshot, |r| Some(u64::from(r.body.duration_min)));

        prop_assert_eq!(buckets.len(), 14);
        prop_assert_eq!(bucketed, total);
    }

    /// Every incoming record is either added or counted as a duplicate.
    #[test]
    fn import_counts_account_for_every_record(
        existing in 0usize..10,
        incoming in vec(0usize..20, 0..20),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let raw: Vec<_> = (0..20)
            .map(|i| (i as i64 % 14, i as i64, format!("Entry {}", i), Category::Other, 10))
            .collect();
        let pool = snapshot_from(&raw);
        let current: Vec<_> = pool[..existing].to_vec();
        let payload: Vec<_> = incoming.iter().map(|&i| pool[i].clone()).collect();
        let blob = export_all(&payload).unwrap();

        let outcome = import_merge(&current, &blob, &mut rng).unwrap();

        prop_assert_eq!(outcome.added + outcome.duplicates, payload.len());
        prop_assert_eq!(outcome.merged.len(), current.len() + outcome.added);
        let mut ids: Vec<&str> = outcome.merged.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), outcome.merged.len());
    }

    /// A draw only ever returns the label of an eligible choice.
    #[test]
    fn draw_returns_an_eligible_label(
        weights in vec(0.0f64..10.0, 1..8),
        seed in any::<u64>(),
    ) {
        let choices: Vec<Choice> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| Choice::new(format!("c{}", i), *w))
            .collect();
        let eligible = eligible_for_selection(&choices);
        let mut rng = StdRng::seed_from_u64(seed);

        match draw(&eligible, &mut rng) {
            Ok(label) => prop_assert!(eligible.iter().any(|c| c.label == label)),
            Err(_) => prop_assert!(eligible.is_empty()),
        }
    }
}
