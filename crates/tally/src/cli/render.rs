//! Output formatting.
//!
//! Every function here returns a `String` and never prints, so output can be
//! checked in tests. Colors come from `colored`, which drops them on its own
//! when `NO_COLOR` is set or stdout is not a terminal.

use chrono::{DateTime, NaiveDate, Utc};
use colored::{ColoredString, Colorize};
use tallyapp::commands::stats::StatsReport;
use tallyapp::commands::{CmdMessage, MessageLevel};
use tallyapp::model::{Choice, ExerciseEntry, HistoryEntry, Stored, Theme};
use tallyapp::picker::Preset;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 8;
const ACTIVITY_WIDTH: usize = 22;
const CATEGORY_WIDTH: usize = 9;
const DETAILS_WIDTH: usize = 20;
const NOTES_WIDTH: usize = 30;
const BAR_WIDTH: usize = 40;
const TIME_WIDTH: usize = 16;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Light => text.blue().bold(),
        Theme::Dark => text.bright_cyan().bold(),
    }
}

pub(super) fn render_entries(entries: &[Stored<ExerciseEntry>], theme: Theme) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let header = format!(
        "{}  {}  {}  {}  {:>4}  {}  {}",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("Date", 10),
        pad_to_width("Activity", ACTIVITY_WIDTH),
        pad_to_width("Category", CATEGORY_WIDTH),
        "Min",
        pad_to_width("Details", DETAILS_WIDTH),
        "Notes"
    );
    let mut out = format!("{}\n", accent(&header, theme));

    for record in entries {
        let entry = &record.body;
        let short_id: String = record.id.chars().take(ID_WIDTH).collect();
        let notes = entry.notes.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{}  {}  {}  {}  {:>4}  {}  {}\n",
            pad_to_width(&short_id, ID_WIDTH).yellow(),
            entry.date,
            pad_to_width(&entry.activity, ACTIVITY_WIDTH),
            pad_to_width(entry.category.as_str(), CATEGORY_WIDTH),
            entry.duration_min,
            pad_to_width(&format_details(entry), DETAILS_WIDTH),
            truncate_to_width(notes, NOTES_WIDTH).dimmed()
        ));
    }
    out
}

/// `3s × 10r × 135 lbs`, or `-` when there is nothing to show.
pub(super) fn format_details(entry: &ExerciseEntry) -> String {
    let mut parts = Vec::new();
    if let Some(sets) = entry.sets {
        parts.push(format!("{}s", sets));
    }
    if let Some(reps) = entry.reps {
        parts.push(format!("{}r", reps));
    }
    if let Some(weight) = entry.weight {
        parts.push(format!("{} lbs", weight));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" × ")
    }
}

pub(super) fn render_stats(report: &StatsReport, today: NaiveDate, theme: Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} workouts, {} min\n",
        accent("Today:", theme),
        report.today.workouts,
        report.today.minutes
    ));
    out.push_str(&format!(
        "{} {} workouts, {} min\n\n",
        accent(&format!("Last {} days:", report.days.len()), theme),
        report.window.workouts,
        report.window.minutes
    ));

    let max = report.days.iter().map(|d| d.minutes).max().unwrap_or(0);
    for day in &report.days {
        let len = if max == 0 {
            0
        } else {
            // Round so that any non-zero day gets at least one cell.
            ((day.minutes as usize * BAR_WIDTH) + max as usize - 1) / max as usize
        };
        let label = day.date.format("%m-%d %a").to_string();
        let label = if day.date == today {
            label.bold()
        } else {
            label.normal()
        };
        out.push_str(&format!(
            "{}  {}{}  {}\n",
            label,
            "█".repeat(len).green(),
            " ".repeat(BAR_WIDTH - len),
            day.minutes
        ));
    }

    out.push_str(&format!("\n{}\n", accent("Personal bests", theme)));
    match &report.bests.heaviest_lift {
        Some(best) => out.push_str(&format!(
            "  Heaviest lift:   {} lbs, {} ({})\n",
            best.body.weight.unwrap_or(0.0),
            best.body.activity,
            best.body.date
        )),
        None => out.push_str(&format!("  {}\n", "Heaviest lift:   -".dimmed())),
    }
    match &report.bests.longest_session {
        Some(best) => out.push_str(&format!(
            "  Longest session: {} min, {} ({})\n",
            best.body.duration_min, best.body.activity, best.body.date
        )),
        None => out.push_str(&format!("  {}\n", "Longest session: -".dimmed())),
    }
    out
}

pub(super) fn render_choices(choices: &[Choice]) -> String {
    if choices.is_empty() {
        return String::new();
    }
    let total: f64 = choices.iter().filter(|c| c.is_eligible()).map(|c| c.weight).sum();
    let label_width = choices
        .iter()
        .map(|c| c.label.width())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut out = String::new();
    for (idx, choice) in choices.iter().enumerate() {
        let share = if total > 0.0 && choice.is_eligible() {
            format!("{:>5.1}%", choice.weight / total * 100.0)
        } else {
            format!("{:>6}", "-")
        };
        out.push_str(&format!(
            "{:>3}. {}  {:>8}  {}\n",
            idx + 1,
            pad_to_width(&choice.label, label_width),
            choice.weight,
            share.dimmed()
        ));
    }
    out
}

pub(super) fn render_winner(winner: &str) -> String {
    format!("{} {}\n", "Winner:".green(), winner.bold())
}

pub(super) fn render_history(history: &[HistoryEntry]) -> String {
    let mut out = String::new();
    for entry in history {
        out.push_str(&format!(
            "{}  {}\n",
            format_time_ago(entry.time).dimmed(),
            entry.result.bold()
        ));
    }
    out
}

pub(super) fn render_presets(presets: &[Preset]) -> String {
    let mut out = String::new();
    for preset in presets {
        out.push_str(&format!("{}\n", preset.name.bold()));
        for choice in &preset.choices {
            out.push_str(&format!("  {} {}\n", choice.label, format!("({})", choice.weight).dimmed()));
        }
    }
    out
}

pub(super) fn render_theme(theme: Theme) -> String {
    format!("{}\n", theme)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
