//! Derived-metric engine over weight history
//!
//! Every function here is pure: it takes a ledger snapshot (a slice of
//! entries) and computes a display-ready value. Two different "7"s live in
//! this module and must not be conflated:
//! - `last_seven_change` looks at the last 7 *entries* by position in the
//!   date-sorted history, however far apart their dates are
//! - `weekly_training_count` looks at the inclusive 7-*calendar-day* window
//!   ending today

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::PlanCatalog;
use crate::models::{DayKind, WeightEntry};

// ---------------------------------------------------------------------------
/// Trend vs the previous entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Three-way branch: an exactly-zero delta is its own case, so an entry
    /// equal to the previous one renders as "no change" rather than "+0.0".
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            TrendDirection::Up
        } else if delta < 0.0 {
            TrendDirection::Down
        } else {
            // Covers exact zero; a NaN delta lands here too and the UI
            // shows it as "—"
            TrendDirection::Flat
        }
    }
}

/// Change against the latest earlier entry. Positive = weight went up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightTrend {
    pub delta: f64,
    pub direction: TrendDirection,
}

impl WeightTrend {
    pub fn from_delta(delta: f64) -> Self {
        Self {
            delta,
            direction: TrendDirection::from_delta(delta),
        }
    }
}

/// The latest entry strictly before `date`, comparing dates as opaque ISO
/// strings (lexicographic == chronological for the fixed format)
pub fn previous_entry_before<'a>(
    entries: &'a [WeightEntry],
    date: &str,
) -> Option<&'a WeightEntry> {
    entries
        .iter()
        .filter(|e| e.date.as_str() < date)
        .max_by(|a, b| a.date.cmp(&b.date))
}

/// Trend of `value` logged on `date` against the previous entry, or `None`
/// when no earlier entry exists
pub fn trend_vs_previous(
    entries: &[WeightEntry],
    date: &str,
    value: f64,
) -> Option<WeightTrend> {
    let prev = previous_entry_before(entries, date)?;
    Some(WeightTrend::from_delta(value - prev.value))
}

// ---------------------------------------------------------------------------
/// History-wide changes
// ---------------------------------------------------------------------------

fn sorted_ascending(entries: &[WeightEntry]) -> Vec<WeightEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

/// `last - first` over the date-sorted history. `None` for an empty ledger;
/// a single entry yields 0.
pub fn total_change(entries: &[WeightEntry]) -> Option<f64> {
    let sorted = sorted_ascending(entries);
    let first = sorted.first()?;
    let last = sorted.last()?;
    Some(last.value - first.value)
}

/// Change across the last 7 entries by position in the date-sorted history.
/// `None` when fewer than 2 entries exist. This is NOT a calendar window.
pub fn last_seven_change(entries: &[WeightEntry]) -> Option<f64> {
    if entries.len() < 2 {
        return None;
    }
    let sorted = sorted_ascending(entries);
    let window = &sorted[sorted.len().saturating_sub(7)..];
    Some(window.last()?.value - window.first()?.value)
}

// ---------------------------------------------------------------------------
/// Logging streak
// ---------------------------------------------------------------------------

fn parse_iso(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Consecutive days logged, counted backwards from the most recent entry
/// and stopping at the first calendar gap. Entry values don't matter.
/// A date that fails ISO parsing also stops the scan.
pub fn streak_days(entries: &[WeightEntry]) -> u32 {
    let mut dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
    dates.sort_unstable();

    let mut newest_first = dates.iter().rev();
    let Some(first) = newest_first.next() else {
        return 0;
    };
    let Some(mut cursor) = parse_iso(first) else {
        return 0;
    };

    let mut streak = 1;
    for date in newest_first {
        let expected = cursor.pred_opt();
        match (parse_iso(date), expected) {
            (Some(parsed), Some(expected)) if parsed == expected => {
                streak += 1;
                cursor = parsed;
            }
            _ => break,
        }
    }
    streak
}

// ---------------------------------------------------------------------------
/// Chart axis bounds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChartBounds {
    pub lower: f64,
    pub upper: f64,
}

/// Y-axis range for the weight chart: min/max padded by 40% of the span,
/// with a 0.5 kg floor so a flat history still gets visible headroom.
/// `None` for an empty value list.
pub fn axis_bounds(values: &[f64]) -> Option<ChartBounds> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = 0.5_f64.max((max - min) * 0.4);
    Some(ChartBounds {
        lower: min - padding,
        upper: max + padding,
    })
}

// ---------------------------------------------------------------------------
/// Weekly training count
// ---------------------------------------------------------------------------

/// Training days planned in the inclusive window `today-6 ..= today`.
/// This is the calendar-window "7", unrelated to `last_seven_change`.
pub fn weekly_training_count(catalog: &PlanCatalog, today: NaiveDate) -> usize {
    let window_start = today - Duration::days(6);
    catalog
        .all_days()
        .iter()
        .filter(|day| day.kind == DayKind::Training)
        .filter_map(|day| parse_iso(&day.date))
        .filter(|date| *date >= window_start && *date <= today)
        .count()
}

// ---------------------------------------------------------------------------
/// Progress Summary: Sent to the dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub current_weight: Option<f64>,
    pub total_change: Option<f64>,
    pub last_seven_change: Option<f64>,
    pub streak_days: u32,
    pub chart_bounds: Option<ChartBounds>,
    /// Full history, ascending by date, ready for the chart
    pub entries: Vec<WeightEntry>,
}

impl ProgressSummary {
    /// Compute every dashboard KPI from one ledger snapshot
    pub fn compute(entries: &[WeightEntry]) -> Self {
        let sorted = sorted_ascending(entries);
        let values: Vec<f64> = sorted.iter().map(|e| e.value).collect();

        Self {
            current_weight: sorted.last().map(|e| e.value),
            total_change: total_change(entries),
            last_seven_change: last_seven_change(entries),
            streak_days: streak_days(entries),
            chart_bounds: axis_bounds(&values),
            entries: sorted,
        }
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
