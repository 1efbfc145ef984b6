//! Date ranges and candidate windows.
//!
//! # Time Model
//! All ranges are inclusive on both ends and measured in whole calendar
//! days: `[Jan 1, Jan 3]` spans 3 days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive span in calendar days. Zero when `end < start`.
    #[inline]
    pub fn span_days(&self) -> u32 {
        let days = (self.end - self.start).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }

    /// Whether a date falls within this range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlap_days(other) > 0
    }

    /// Number of days shared by two ranges (0 when disjoint).
    pub fn overlap_days(&self, other: &Self) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            DateRange::new(start, end).span_days()
        } else {
            0
        }
    }
}

/// A window of consecutive daily scores with summary statistics.
///
/// `duration_days` counts the daily entries in the window, so
/// `min_days <= duration_days <= max_days` holds for every enumerated
/// window. `span_days` is the calendar span; it only exceeds
/// `duration_days` when the daily series skips dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateWindow {
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
    /// Number of daily scores in the window.
    pub duration_days: u32,
    /// Inclusive calendar span `end - start + 1`.
    pub span_days: u32,
    /// Mean daily score.
    pub avg_score: f64,
    /// Sum of daily scores.
    pub total_score: f64,
    /// Sample standard deviation of daily scores (0.0 for one day).
    pub consistency: f64,
}

/// A window that survived filtering and overlap resolution.
pub type SelectedWindow = CandidateWindow;

impl CandidateWindow {
    /// The window's date range.
    #[inline]
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Days shared with another window.
    #[inline]
    pub fn overlap_days(&self, other: &Self) -> u32 {
        self.range().overlap_days(&other.range())
    }

    /// Whether the window covers calendar-consecutive days only.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.span_days == self.duration_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_date_range() {
        let r = DateRange::new(jan(1), jan(3));
        assert_eq!(r.span_days(), 3);
        assert!(r.contains(jan(1)));
        assert!(r.contains(jan(3)));
        assert!(!r.contains(jan(4)));
        assert_eq!(DateRange::new(jan(5), jan(5)).span_days(), 1);
        assert_eq!(DateRange::new(jan(5), jan(4)).span_days(), 0);
    }

    #[test]
    fn test_overlap_shared_endpoint() {
        let a = DateRange::new(jan(1), jan(3));
        let b = DateRange::new(jan(3), jan(5));
        assert_eq!(a.overlap_days(&b), 1);
        assert_eq!(b.overlap_days(&a), 1);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = DateRange::new(jan(1), jan(2));
        let b = DateRange::new(jan(4), jan(5));
        assert_eq!(a.overlap_days(&b), 0);
        assert!(!a.overlaps(&b));

        // Adjacent days do not overlap.
        let c = DateRange::new(jan(3), jan(4));
        assert_eq!(a.overlap_days(&c), 0);
    }

    #[test]
    fn test_overlap_nested() {
        let outer = DateRange::new(jan(1), jan(10));
        let inner = DateRange::new(jan(4), jan(6));
        assert_eq!(outer.overlap_days(&inner), 3);
        assert_eq!(inner.overlap_days(&outer), 3);
    }

    #[test]
    fn test_candidate_contiguity() {
        let w = CandidateWindow {
            start_date: jan(5),
            end_date: jan(7),
            duration_days: 2,
            span_days: 3,
            avg_score: 4.0,
            total_score: 8.0,
            consistency: 0.0,
        };
        assert!(!w.is_contiguous());
        assert_eq!(w.range(), DateRange::new(jan(5), jan(7)));
    }
}
