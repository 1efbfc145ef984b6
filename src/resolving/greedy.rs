//! Greedy best-first overlap resolution.
//!
//! # Algorithm
//!
//! 1. Rank candidates (avg score desc, total score desc).
//! 2. Walk the ranking once, keeping an accepted set.
//! 3. Accept a candidate iff it overlaps every accepted window by at most
//!    the tolerance; otherwise discard it for good.
//! 4. Truncate to the limit.
//!
//! Not an optimal interval scheduler: a high-scoring window can block two
//! slightly lower ones whose combined value is larger.
//!
//! # Complexity
//! O(n log n + n * k) where n = candidates, k = accepted windows.

use log::trace;

use super::{fits, rank_windows, OverlapResolver};
use crate::config::DEFAULT_TOP_K;
use crate::models::CandidateWindow;

/// Best-first greedy resolver.
#[derive(Debug, Clone)]
pub struct GreedyResolver {
    limit: usize,
}

impl GreedyResolver {
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

    /// Maximum number of returned windows.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for GreedyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapResolver for GreedyResolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn resolve(
        &self,
        candidates: &[CandidateWindow],
        max_overlap_days: u32,
    ) -> Vec<CandidateWindow> {
        let mut ranked = candidates.to_vec();
        rank_windows(&mut ranked);

        let mut accepted: Vec<CandidateWindow> = Vec::new();
        for candidate in ranked {
            if accepted.len() >= self.limit {
                break;
            }
            if fits(&candidate, &accepted, max_overlap_days) {
                trace!(
                    "accept {}..{} avg {:.3}",
                    candidate.start_date,
                    candidate.end_date,
                    candidate.avg_score
                );
                accepted.push(candidate);
            }
        }

        accepted
    }

    fn description(&self) -> &'static str {
        "Greedy best-first selection"
    }
}
