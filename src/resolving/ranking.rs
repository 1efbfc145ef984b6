//! Window ranking.
//!
//! Sequential multi-key comparison: each key is consulted only when all
//! previous keys tie.
//!
//! 1. `avg_score` descending
//! 2. `total_score` descending
//! 3. `start_date` ascending
//! 4. `duration_days` ascending
//!
//! Keys 3 and 4 only make the order total, so equal-score windows come out
//! the same way on every run.

use std::cmp::Ordering;

use crate::models::CandidateWindow;

/// Orders two windows, best first.
pub fn compare_windows(a: &CandidateWindow, b: &CandidateWindow) -> Ordering {
    b.avg_score
        .total_cmp(&a.avg_score)
        .then_with(|| b.total_score.total_cmp(&a.total_score))
        .then_with(|| a.start_date.cmp(&b.start_date))
        .then_with(|| a.duration_days.cmp(&b.duration_days))
}

/// Sorts windows best first.
pub fn rank_windows(windows: &mut [CandidateWindow]) {
    windows.sort_by(compare_windows);
}
