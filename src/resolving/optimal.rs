//! Weighted interval scheduling.
//!
//! # Algorithm
//!
//! 1. Sort candidates by end date.
//! 2. For candidate `i`, let `p(i)` be the number of earlier-ending
//!    candidates `j` with `end_j - start_i + 1 <= tolerance`.
//! 3. `best[i + 1] = max(best[i], total_score_i + best[p(i)])`.
//! 4. Walk back through the table, then rank and truncate.
//!
//! With tolerance 0 this is the classic exact algorithm. With a positive
//! tolerance every window in a chain ends no later than the predecessor
//! boundary of each later window, so the pairwise overlap bound still
//! holds; chains that only work through nesting are not explored.
//!
//! # Complexity
//! O(n log n).
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use chrono::Duration;

use super::{rank_windows, OverlapResolver};
use crate::config::DEFAULT_TOP_K;
use crate::models::CandidateWindow;

/// Maximum-total-score resolver.
#[derive(Debug, Clone)]
pub struct OptimalResolver {
    limit: usize,
}

impl OptimalResolver {
    /// Creates a resolver returning at most 10 windows.
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_TOP_K,
        }
    }

    /// Sets the maximum number of returned windows.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for OptimalResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapResolver for OptimalResolver {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn resolve(
        &self,
        candidates: &[CandidateWindow],
        max_overlap_days: u32,
    ) -> Vec<CandidateWindow> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut sorted = candidates.to_vec();
        sorted.sort_by(|a, b| {
            a.end_date
                .cmp(&b.end_date)
                .then_with(|| a.start_date.cmp(&b.start_date))
                .then_with(|| super::compare_windows(a, b))
        });

        let tolerance = Duration::days(i64::from(max_overlap_days));
        let predecessors: Vec<usize> = sorted
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let boundary = w.start_date + tolerance;
                sorted.partition_point(|j| j.end_date < boundary).min(i)
            })
            .collect();

        let mut best = vec![0.0_f64; sorted.len() + 1];
        for (i, w) in sorted.iter().enumerate() {
            let take = w.total_score + best[predecessors[i]];
            best[i + 1] = if take > best[i] { take } else { best[i] };
        }

        let mut chosen = Vec::new();
        let mut i = sorted.len();
        while i > 0 {
            let w = &sorted[i - 1];
            if w.total_score + best[predecessors[i - 1]] > best[i - 1] {
                chosen.push(w.clone());
                i = predecessors[i - 1];
            } else {
                i -= 1;
            }
        }

        rank_windows(&mut chosen);
        chosen.truncate(self.limit);
        chosen
    }

    fn description(&self) -> &'static str {
        "Maximum total score (weighted interval scheduling)"
    }
}
