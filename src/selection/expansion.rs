//! Best single window by seed-and-expand.
//!
//! # Algorithm
//!
//! 1. Seed on every pair of calendar-consecutive days; the pair's mean `a`
//!    caps the window length at `min(max_window_days, floor(a))`.
//! 2. Only seeds whose mean beats the best window found so far are grown.
//! 3. Grow forward, then backward, one consecutive day at a time, while
//!    that day's score is at least `a - EXPANSION_TOLERANCE` and the
//!    window does not exceed the cap.
//! 4. Keep the grown window if its mean beats the best so far and its
//!    length lies in `[2, cap]`.
//!
//! Unlike the sliding-window pipeline this never spans calendar gaps.

use chrono::Duration;

use super::summarize_window;
use crate::models::{CandidateWindow, DailyScore};

/// How far below the seed mean a day may score and still be added.
pub const EXPANSION_TOLERANCE: f64 = 1.5;

fn consecutive(a: &DailyScore, b: &DailyScore) -> bool {
    b.date - a.date == Duration::days(1)
}

/// Finds the best window over a daily series.
///
/// Returns `None` for fewer than two days, or when no seed produces a
/// window of at least two days (e.g. all seed means below 2.0).
///
/// # Example
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use trip_windows::models::DailyScore;
/// use trip_windows::selection::find_best_window;
///
/// let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let values = [1.0, 4.0, 4.4, 4.6, 3.5, 1.0];
/// let daily: Vec<DailyScore> = values
///     .iter()
///     .enumerate()
///     .map(|(i, &v)| DailyScore::new(start + Duration::days(i as i64), v))
///     .collect();
///
/// let best = find_best_window(&daily, 7).unwrap();
/// assert_eq!(best.start_date, start + Duration::days(1));
/// assert_eq!(best.end_date, start + Duration::days(4));
/// ```
pub fn find_best_window(daily: &[DailyScore], max_window_days: u32) -> Option<CandidateWindow> {
    if daily.len() < 2 {
        return None;
    }

    let mut best: Option<CandidateWindow> = None;
    let mut best_avg = f64::NEG_INFINITY;

    for i in 0..daily.len() - 1 {
        if !consecutive(&daily[i], &daily[i + 1]) {
            continue;
        }
        let seed_avg = (daily[i].score + daily[i + 1].score) / 2.0;
        if seed_avg <= best_avg {
            continue;
        }

        let cap = (max_window_days as usize).min(seed_avg.floor().max(0.0) as usize);
        let threshold = seed_avg - EXPANSION_TOLERANCE;
        let (mut lo, mut hi) = (i, i + 1);

        while hi + 1 < daily.len()
            && hi + 1 - lo < cap
            && consecutive(&daily[hi], &daily[hi + 1])
            && daily[hi + 1].score >= threshold
        {
            hi += 1;
        }
        while lo > 0
            && hi + 1 - lo < cap
            && consecutive(&daily[lo - 1], &daily[lo])
            && daily[lo - 1].score >= threshold
        {
            lo -= 1;
        }

        let Some(window) = summarize_window(&daily[lo..=hi]) else {
            continue;
        };
        let days = window.duration_days as usize;
        if window.avg_score > best_avg && (2..=cap).contains(&days) {
            best_avg = window.avg_score;
            best = Some(window);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(offset: i64) -> chrono::NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap() + Duration::days(offset)
    }

    fn daily(values: &[f64]) -> Vec<DailyScore> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DailyScore::new(day(i as i64), v))
            .collect()
    }

    #[test]
    fn test_too_short() {
        assert!(find_best_window(&[], 7).is_none());
        assert!(find_best_window(&daily(&[5.0]), 7).is_none());
    }

    #[test]
    fn test_grows_within_tolerance() {
        let best = find_best_window(&daily(&[1.0, 4.0, 4.4, 4.6, 3.5, 1.0]), 7).unwrap();
        // Seed (4.0, 4.4) grows forward to day 4 (cap 4); mean 4.125 holds.
        assert_eq!((best.start_date, best.end_date), (day(1), day(4)));
        assert_eq!(best.duration_days, 4);
    }

    #[test]
    fn test_cap_from_seed_score() {
        // Seed mean 3.0 caps the window at 3 days even with max 7.
        let best = find_best_window(&daily(&[3.0; 10]), 7).unwrap();
        assert_eq!(best.duration_days, 3);
    }

    #[test]
    fn test_cap_from_max_window_days() {
        let best = find_best_window(&daily(&[5.0; 10]), 2).unwrap();
        assert_eq!(best.duration_days, 2);
    }

    #[test]
    fn test_low_scores_yield_nothing() {
        // Seed mean below 2 → cap < 2 → no valid window.
        assert!(find_best_window(&daily(&[1.5; 6]), 7).is_none());
    }

    #[test]
    fn test_gaps_stop_growth() {
        let series: Vec<_> = daily(&[4.0, 4.0, 4.0, 4.0, 4.0])
            .into_iter()
            .filter(|d| d.date != day(2))
            .collect();
        let best = find_best_window(&series, 7).unwrap();
        assert_eq!(best.duration_days, 2);
        assert!(best.is_contiguous());
    }
}
