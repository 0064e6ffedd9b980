use crate::commands::helpers::entries;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::query::entries_on;
use crate::stats::{
    bucket_by_date, last_n_days, personal_bests, sum_field, summarize, DayBucket, PersonalBests,
    Summary,
};
use crate::store::backend::StorageBackend;
use chrono::NaiveDate;

/// About ten years of days.
pub const MAX_STATS_DAYS: u32 = 3660;

/// Everything the statistics view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub today: Summary,
    /// Totals over the whole window.
    pub window: Summary,
    /// One bucket per day of the window, oldest first.
    pub days: Vec<DayBucket>,
    pub bests: PersonalBests,
}

pub fn run<B: StorageBackend>(backend: &B, today: NaiveDate, days: u32) -> Result<CmdResult> {
    if days == 0 || days > MAX_STATS_DAYS {
        return Err(TallyError::InvalidInput(format!(
            "The stats window must be between 1 and {} days.",
            MAX_STATS_DAYS
        )));
    }

    let snapshot = entries(backend).load()?;
    let window = last_n_days(today, days);
    let todays = entries_on(&snapshot, today);

    let report = StatsReport {
        today: Summary {
            workouts: todays.len(),
            minutes: sum_field(&todays, |r| Some(u64::from(r.body.duration_min))),
        },
        window: summarize(&snapshot, &window),
        days: bucket_by_date(&snapshot, &window),
        bests: personal_bests(&snapshot),
    };

    let mut result = CmdResult::default();
    if snapshot.is_empty() {
        result.add_message(CmdMessage::info("No entries yet. Log a workout to see stats."));
    }
    Ok(result.with_stats(report))
}
