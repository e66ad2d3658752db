//! Chart-ready cumulative progress series.

use chrono::Duration;

use crate::types::Timestamp;

/// Number of days shown by the streak chart.
pub const CHART_WINDOW_DAYS: i64 = 14;

/// Aligned label/count sequences for a progress chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    /// Human-readable day labels, oldest first (e.g. `"Mar 4"`).
    pub labels: Vec<String>,
    /// Cumulative progress-entry count at each labelled day.
    pub data: Vec<i64>,
}

/// Derive the cumulative progress series for the `window_days` calendar days
/// ending at `reference`.
///
/// For each labelled day the count is the number of entries with a timestamp
/// at or before that day's instant (the reference time-of-day shifted back a
/// whole number of days). Counting an append-only sequence this way yields a
/// non-decreasing step function.
pub fn chart_series(entries: &[Timestamp], window_days: i64, reference: Timestamp) -> ChartSeries {
    let mut labels = Vec::with_capacity(window_days as usize);
    let mut data = Vec::with_capacity(window_days as usize);

    for offset in (0..window_days).rev() {
        let day = reference - Duration::days(offset);
        labels.push(day.format("%b %-d").to_string());
        data.push(entries.iter().filter(|e| **e <= day).count() as i64);
    }

    ChartSeries { labels, data }
}
