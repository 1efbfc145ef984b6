//! Overlap resolution strategies.
//!
//! A resolver turns a set of (possibly overlapping) candidate windows into
//! a non-conflicting, ranked subset. Two strategies ship with the crate:
//!
//! - [`GreedyResolver`]: best-first single pass, no backtracking. Cheap,
//!   not optimal.
//! - [`OptimalResolver`]: weighted interval scheduling by dynamic
//!   programming, maximizing the summed `total_score`.
//!
//! # Usage
//!
//! ```
//! use trip_windows::resolving::{GreedyResolver, OverlapResolver};
//!
//! let resolver = GreedyResolver::new().with_limit(5);
//! let accepted = resolver.resolve(&[], 0);
//! assert!(accepted.is_empty());
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1 (Weighted Interval Scheduling)

mod greedy;
mod optimal;
mod ranking;

pub use greedy::GreedyResolver;
pub use optimal::OptimalResolver;
pub use ranking::{compare_windows, rank_windows};

use crate::models::CandidateWindow;
use std::fmt::Debug;

/// A strategy that selects non-overlapping windows.
///
/// # Contract
/// - No two returned windows share more than `max_overlap_days` days.
/// - The result is ordered by [`compare_windows`].
/// - The result is deterministic for identical input.
pub trait OverlapResolver: Send + Sync + Debug {
    /// Strategy name (e.g., "greedy").
    fn name(&self) -> &'static str;

    /// Selects accepted windows from `candidates`.
    fn resolve(
        &self,
        candidates: &[CandidateWindow],
        max_overlap_days: u32,
    ) -> Vec<CandidateWindow>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Whether `candidate` overlaps every accepted window by at most
/// `max_overlap_days`.
pub(crate) fn fits(
    candidate: &CandidateWindow,
    accepted: &[CandidateWindow],
    max_overlap_days: u32,
) -> bool {
    accepted
        .iter()
        .all(|a| candidate.overlap_days(a) <= max_overlap_days)
}
