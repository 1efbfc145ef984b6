//! Sliding-window enumeration and score filtering.
//!
//! # Algorithm
//!
//! For every duration `d` in `[min_days, max_days]`, slide a window of `d`
//! consecutive entries over the daily series and summarize it (mean, sum,
//! sample standard deviation).
//!
//! Windows are consecutive *positions*, not consecutive calendar dates.
//! If the series skips a date, a window can span the gap; this is what the
//! weekend pipeline relies on (Sunday is followed by the next Friday).
//! [`ContiguityPolicy::Calendar`] drops such windows instead.
//!
//! # Complexity
//! O((max_days - min_days + 1) * N * max_days) for N daily entries.

use crate::config::{ContiguityPolicy, WindowParams};
use crate::models::{CandidateWindow, DailyScore, DateRange};
use crate::stats;

/// Summarizes a non-empty run of consecutive daily scores.
///
/// Returns `None` for an empty slice.
pub fn summarize_window(days: &[DailyScore]) -> Option<CandidateWindow> {
    let first = days.first()?;
    let last = days.last()?;
    let values: Vec<f64> = days.iter().map(|d| d.score).collect();
    let avg_score = stats::mean(&values)?;

    Some(CandidateWindow {
        start_date: first.date,
        end_date: last.date,
        duration_days: days.len() as u32,
        span_days: DateRange::new(first.date, last.date).span_days(),
        avg_score,
        total_score: values.iter().sum(),
        consistency: stats::sample_std_dev(&values).unwrap_or(0.0),
    })
}

/// Enumerates every window with `min_days <= duration <= max_days`.
///
/// An inverted or zero-length duration range yields nothing.
pub fn enumerate_windows(
    daily: &[DailyScore],
    min_days: u32,
    max_days: u32,
    policy: ContiguityPolicy,
) -> Vec<CandidateWindow> {
    let mut windows = Vec::new();
    let longest = max_days.min(u32::try_from(daily.len()).unwrap_or(u32::MAX));

    for duration in min_days.max(1)..=longest {
        for run in daily.windows(duration as usize) {
            let Some(window) = summarize_window(run) else {
                continue;
            };
            if policy == ContiguityPolicy::Calendar && !window.is_contiguous() {
                continue;
            }
            windows.push(window);
        }
    }

    windows
}

/// Keeps windows whose average score is at least `min_score`.
pub fn filter_windows(windows: Vec<CandidateWindow>, min_score: f64) -> Vec<CandidateWindow> {
    windows
        .into_iter()
        .filter(|w| w.avg_score >= min_score)
        .collect()
}

/// Enumerates and filters in one pass.
pub fn candidate_windows(
    daily: &[DailyScore],
    params: &WindowParams,
    policy: ContiguityPolicy,
) -> Vec<CandidateWindow> {
    filter_windows(
        enumerate_windows(daily, params.min_days, params.max_days, policy),
        params.min_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn series(values: &[f64]) -> Vec<DailyScore> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DailyScore::new(day(i as u32 + 1), v))
            .collect()
    }

    #[test]
    fn test_window_statistics() {
        let w = summarize_window(&series(&[2.0, 4.0, 6.0])).unwrap();
        assert_eq!(w.avg_score, 4.0);
        assert_eq!(w.total_score, 12.0);
        assert!((w.consistency - 2.0).abs() < 1e-12);
        assert_eq!(w.duration_days, 3);
        assert_eq!(w.span_days, 3);
        assert_eq!((w.start_date, w.end_date), (day(1), day(3)));
    }

    #[test]
    fn test_single_day_consistency_is_zero() {
        let w = summarize_window(&series(&[3.3])).unwrap();
        assert_eq!(w.consistency, 0.0);
        assert!(summarize_window(&[]).is_none());
    }

    #[test]
    fn test_window_count() {
        // N=5, durations 2..=3 → 4 + 3 windows
        let windows = enumerate_windows(&series(&[1.0; 5]), 2, 3, ContiguityPolicy::Positional);
        assert_eq!(windows.len(), 7);
        assert!(windows.iter().all(|w| (2..=3).contains(&w.duration_days)));
    }

    #[test]
    fn test_duration_longer_than_series() {
        let windows = enumerate_windows(&series(&[4.0, 4.0]), 3, 5, ContiguityPolicy::Positional);
        assert!(windows.is_empty());
    }

    #[test]
    fn test_huge_max_days_capped_by_series_length() {
        let windows =
            enumerate_windows(&series(&[4.0]), 1, u32::MAX, ContiguityPolicy::Positional);
        assert_eq!(windows.len(), 1);

        let windows =
            enumerate_windows(&series(&[4.0; 3]), 2, u32::MAX, ContiguityPolicy::Calendar);
        assert_eq!(windows.len(), 3);
    }

    #[test]
    fn test_inverted_and_zero_ranges_are_empty() {
        let daily = series(&[4.0, 4.0, 4.0]);
        assert!(enumerate_windows(&daily, 3, 2, ContiguityPolicy::Positional).is_empty());
        assert!(enumerate_windows(&daily, 0, 0, ContiguityPolicy::Positional).is_empty());
        // Zero minimum is clamped to one-day windows.
        assert_eq!(enumerate_windows(&daily, 0, 1, ContiguityPolicy::Positional).len(), 3);
    }

    #[test]
    fn test_filter_inclusive_threshold() {
        let daily = series(&[3.0, 3.0, 2.0]);
        let windows = candidate_windows(
            &daily,
            &WindowParams::new(2, 2, 3.0),
            ContiguityPolicy::Positional,
        );
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start_date, day(1));
    }

    #[test]
    fn test_empty_series() {
        let windows = candidate_windows(&[], &WindowParams::general(), ContiguityPolicy::Positional);
        assert!(windows.is_empty());
    }

    #[test]
    fn test_positional_windows_span_calendar_gaps() {
        // Jan 2 missing: positional 2-day window [Jan 1, Jan 3] spans 3 days.
        let daily = vec![
            DailyScore::new(day(1), 4.0),
            DailyScore::new(day(3), 4.0),
            DailyScore::new(day(4), 4.0),
        ];
        let windows = enumerate_windows(&daily, 2, 2, ContiguityPolicy::Positional);
        assert_eq!(windows.len(), 2);
        let gap = &windows[0];
        assert_eq!((gap.start_date, gap.end_date), (day(1), day(3)));
        assert_eq!(gap.duration_days, 2);
        assert_eq!(gap.span_days, 3);
        assert!(!gap.is_contiguous());
    }

    #[test]
    fn test_calendar_policy_rejects_gaps() {
        let daily = vec![
            DailyScore::new(day(1), 4.0),
            DailyScore::new(day(3), 4.0),
            DailyScore::new(day(4), 4.0),
        ];
        let windows = enumerate_windows(&daily, 2, 2, ContiguityPolicy::Calendar);
        assert_eq!(windows.len(), 1);
        assert_eq!((windows[0].start_date, windows[0].end_date), (day(3), day(4)));
    }
}
