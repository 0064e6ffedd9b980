//! # Aggregation Engine
//!
//! Derived numbers over a snapshot of exercise entries: totals, per-day
//! buckets for the bar chart and personal bests. Like the query engine these
//! are pure functions; the date window is always supplied by the caller.

use crate::model::{Category, ExerciseEntry, Stored};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::iter::Sum;

/// Sum an optional numeric field; records where the selector yields `None` count as zero.
pub fn sum_field<T, N, F>(snapshot: &[T], selector: F) -> N
where
    F: Fn(&T) -> Option<N>,
    N: Sum<N>,
{
    snapshot.iter().filter_map(selector).sum()
}

/// Total minutes logged on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub minutes: u64,
}

/// Total `durationMin` per requested day, in the order the days were given.
/// Days without entries get zero.
pub fn bucket_by_date(snapshot: &[Stored<ExerciseEntry>], dates: &[NaiveDate]) -> Vec<DayBucket> {
    dates
        .iter()
        .map(|&date| DayBucket {
            date,
            minutes: snapshot
                .iter()
                .filter(|r| r.body.date == date)
                .map(|r| u64::from(r.body.duration_min))
                .sum(),
        })
        .collect()
}

/// The record with the largest score among those matching `predicate`.
/// On ties the first one encountered wins.
pub fn max_by<T, P, S, K>(snapshot: &[T], predicate: P, score: S) -> Option<&T>
where
    P: Fn(&T) -> bool,
    S: Fn(&T) -> K,
    K: PartialOrd,
{
    let mut best: Option<(&T, K)> = None;
    for record in snapshot.iter().filter(|r| predicate(r)) {
        let candidate = score(record);
        let replace = match &best {
            None => true,
            Some((_, current)) => candidate > *current,
        };
        if replace {
            best = Some((record, candidate));
        }
    }
    best.map(|(record, _)| record)
}

/// The `n` calendar days ending at `today`, oldest first. Days before the
/// earliest representable date are left out.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..u64::from(n))
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub workouts: usize,
    pub minutes: u64,
}

/// Count and total minutes of the entries whose date is in `dates`.
pub fn summarize(snapshot: &[Stored<ExerciseEntry>], dates: &[NaiveDate]) -> Summary {
    let in_window: Vec<&Stored<ExerciseEntry>> = snapshot
        .iter()
        .filter(|r| dates.contains(&r.body.date))
        .collect();
    Summary {
        workouts: in_window.len(),
        minutes: sum_field(&in_window, |r| Some(u64::from(r.body.duration_min))),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonalBests {
    /// Heaviest Strength entry that records a weight.
    pub heaviest_lift: Option<Stored<ExerciseEntry>>,
    /// Longest entry of any category.
    pub longest_session: Option<Stored<ExerciseEntry>>,
}

impl PersonalBests {
    pub fn is_empty(&self) -> bool {
        self.heaviest_lift.is_none() && self.longest_session.is_none()
    }
}

pub fn personal_bests(snapshot: &[Stored<ExerciseEntry>]) -> PersonalBests {
    let heaviest_lift = max_by(
        snapshot,
        |r| r.body.category == Category::Strength && r.body.weight.is_some(),
        |r| r.body.weight.unwrap_or(0.0),
    );
    let longest_session = max_by(snapshot, |_| true, |r| r.body.duration_min);

    PersonalBests {
        heaviest_lift: heaviest_lift.cloned(),
        longest_session: longest_session.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(id: &str, day: &str, category: Category, minutes: u32) -> Stored<ExerciseEntry> {
        Stored::new(
            id.to_string(),
            Utc::now(),
            ExerciseEntry::new(date(day), "Session", category, minutes),
        )
    }

    fn lift(id: &str, weight: Option<f64>) -> Stored<ExerciseEntry> {
        let mut r = record(id, "2024-01-01", Category::Strength, 30);
        r.body.weight = weight;
        r
    }

    fn two_days() -> Vec<Stored<ExerciseEntry>> {
        vec![
            record("1", "2024-01-01", Category::Cardio, 30),
            record("2", "2024-01-02", Category::Cardio, 45),
        ]
    }

    #[test]
    fn test_sum_field_over_durations() {
        let total: u64 = sum_field(&two_days(), |r| Some(u64::from(r.body.duration_min)));
        assert_eq!(total, 75);
    }

    #[test]
    fn test_sum_field_treats_missing_as_zero() {
        let snapshot = vec![lift("a", Some(100.0)), lift("b", None), lift("c", Some(50.5))];
        let total: f64 = sum_field(&snapshot, |r| r.body.weight);
        assert_eq!(total, 150.5);
    }

    #[test]
    fn test_bucket_by_date_fills_missing_days_with_zero() {
        let days = [date("2024-01-01"), date("2024-01-02"), date("2024-01-03")];
        let buckets = bucket_by_date(&two_days(), &days);
        assert_eq!(
            buckets,
            vec![
                DayBucket { date: date("2024-01-01"), minutes: 30 },
                DayBucket { date: date("2024-01-02"), minutes: 45 },
                DayBucket { date: date("2024-01-03"), minutes: 0 },
            ]
        );
    }

    #[test]
    fn test_bucket_by_date_sums_same_day() {
        let mut snapshot = two_days();
        snapshot.push(record("3", "2024-01-02", Category::Mobility, 15));
        let buckets = bucket_by_date(&snapshot, &[date("2024-01-02")]);
        assert_eq!(buckets[0].minutes, 60);
    }

    #[test]
    fn test_max_by_ties_keep_first() {
        let snapshot = vec![lift("a", Some(200.0)), lift("b", Some(200.0)), lift("c", Some(150.0))];
        let best = max_by(&snapshot, |_| true, |r| r.body.weight.unwrap_or(0.0)).unwrap();
        assert_eq!(best.id, "a");
    }

    #[test]
    fn test_max_by_none_when_predicate_rejects_all() {
        let snapshot = two_days();
        let best = max_by(&snapshot, |r| r.body.category == Category::Strength, |r| r.body.duration_min);
        assert!(best.is_none());
    }

    #[test]
    fn test_last_n_days_oldest_first() {
        let days = last_n_days(date("2024-03-01"), 3);
        assert_eq!(days, vec![date("2024-02-28"), date("2024-02-29"), date("2024-03-01")]);
        assert!(last_n_days(date("2024-03-01"), 0).is_empty());
    }

    #[test]
    fn test_last_n_days_stops_at_earliest_date() {
        let days = last_n_days(NaiveDate::MIN, 3);
        assert_eq!(days, vec![NaiveDate::MIN]);
    }

    #[test]
    fn test_summarize_window() {
        let summary = summarize(&two_days(), &[date("2024-01-02")]);
        assert_eq!(summary, Summary { workouts: 1, minutes: 45 });
    }

    #[test]
    fn test_personal_bests() {
        let mut snapshot = vec![
            lift("light", Some(95.0)),
            lift("heavy", Some(225.0)),
            lift("bodyweight", None),
            record("long", "2024-01-03", Category::Cardio, 90),
        ];
        let mut heavy_cardio = record("not-a-lift", "2024-01-03", Category::Cardio, 10);
        heavy_cardio.body.weight = Some(500.0);
        snapshot.push(heavy_cardio);

        let bests = personal_bests(&snapshot);
        assert_eq!(bests.heaviest_lift.unwrap().id, "heavy");
        assert_eq!(bests.longest_session.unwrap().id, "long");
    }

    #[test]
    fn test_personal_bests_empty() {
        assert!(personal_bests(&[]).is_empty());
    }
}
