//! Window detail report.
//!
//! Descriptive statistics for an explicit date range, computed from the
//! raw half-day records rather than daily means.
//!
//! # Metrics
//!
//! | Field | Definition |
//! |-------|-----------|
//! | `avg_score` | Mean of half-day scores in range |
//! | `min_score` / `max_score` | Extremes of half-day scores |
//! | `total_periods` | Half-day records in range |
//! | `good_periods` | Half-day records with score >= good threshold |
//! | `good_percentage` | `good_periods / total_periods * 100` |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HalfDayScore;

/// Per-day line of a detail report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// Calendar date.
    pub date: NaiveDate,
    /// Mean half-day score, rounded to 2 decimal places.
    pub mean_score: f64,
    /// Number of half-day records on this date.
    pub periods: usize,
}

/// Detail report for a requested date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDetail {
    /// Requested first day.
    pub start_date: NaiveDate,
    /// Requested last day.
    pub end_date: NaiveDate,
    /// Inclusive calendar span of the requested range.
    pub duration_days: u32,
    /// Mean of all half-day scores in range.
    pub avg_score: f64,
    /// Lowest half-day score.
    pub min_score: f64,
    /// Highest half-day score.
    pub max_score: f64,
    /// Half-day records in range.
    pub total_periods: usize,
    /// Half-day records at or above the good threshold.
    pub good_periods: usize,
    /// Share of good periods, in percent (0.0..=100.0).
    pub good_percentage: f64,
    /// One line per date with data, ascending.
    pub daily_breakdown: Vec<DayBreakdown>,
    /// The half-day records in range, ordered by date then half-day.
    pub records: Vec<HalfDayScore>,
}

impl WindowDetail {
    /// Whether at least `fraction` (0.0..=1.0) of the periods are good.
    pub fn mostly_good(&self, fraction: f64) -> bool {
        self.total_periods > 0 && self.good_percentage >= fraction * 100.0
    }
}
