//! Window detail reports.
//!
//! Recomputes statistics for an externally chosen date range from the raw
//! half-day records. Counts and percentages here are per half-day, unlike
//! the selection pipeline which works on daily means; the two notions of
//! "good" are deliberately not unified.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DateRange, DayBreakdown, HalfDayScore, WindowDetail};
use crate::stats;

/// Builds a detail report for `[start, end]` (inclusive).
///
/// A half-day counts as good when its score is at least `good_threshold`.
/// Returns `None` when no record falls in range, including when
/// `end < start`.
pub fn window_detail(
    scores: &[HalfDayScore],
    start: NaiveDate,
    end: NaiveDate,
    good_threshold: f64,
) -> Option<WindowDetail> {
    let range = DateRange::new(start, end);

    let mut records: Vec<HalfDayScore> = scores
        .iter()
        .filter(|s| range.contains(s.date))
        .cloned()
        .collect();
    if records.is_empty() {
        return None;
    }
    records.sort_by(|a, b| a.date.cmp(&b.date).then(a.half_day.cmp(&b.half_day)));

    let values: Vec<f64> = records.iter().map(|s| s.score).collect();
    let avg_score = stats::mean(&values)?;
    let min_score = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_score = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let total_periods = records.len();
    let good_periods = values.iter().filter(|&&v| v >= good_threshold).count();

    let mut per_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for s in &records {
        let entry = per_day.entry(s.date).or_insert((0.0, 0));
        entry.0 += s.score;
        entry.1 += 1;
    }
    let daily_breakdown = per_day
        .into_iter()
        .map(|(date, (sum, periods))| DayBreakdown {
            date,
            mean_score: stats::round2(sum / periods as f64),
            periods,
        })
        .collect();

    Some(WindowDetail {
        start_date: start,
        end_date: end,
        duration_days: range.span_days(),
        avg_score,
        min_score,
        max_score,
        total_periods,
        good_periods,
        good_percentage: good_periods as f64 / total_periods as f64 * 100.0,
        daily_breakdown,
        records,
    })
}
