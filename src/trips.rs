//! Multi-spot trip planning.
//!
//! Runs window selection per spot and merges the results into a single
//! ranking. Per spot it contributes:
//!
//! | Kind | Source |
//! |------|--------|
//! | `Optimal` | top `per_spot_limit` windows of the general pipeline |
//! | `Weekend` | anchored Friday weekends (opt-in) |
//! | `Best` | seed-and-expand best window (opt-in) |

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{CandidateWindow, HalfDayScore};
use crate::resolving::compare_windows;
use crate::selection::{
    aggregate_daily, anchored_weekends, find_best_window, WeekendSpan, WindowSelector,
};

/// Number of general-pipeline windows kept per spot.
pub const DEFAULT_PER_SPOT_LIMIT: usize = 3;
/// Longest seed-and-expand window.
pub const DEFAULT_BEST_WINDOW_DAYS: u32 = 7;

/// Half-day scores of one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotScores {
    /// Location name.
    pub spot: String,
    /// Half-day scores for this location.
    pub scores: Vec<HalfDayScore>,
}

impl SpotScores {
    /// Creates spot scores.
    pub fn new(spot: impl Into<String>, scores: Vec<HalfDayScore>) -> Self {
        Self {
            spot: spot.into(),
            scores,
        }
    }
}

/// Where a trip window came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// General selection pipeline.
    Optimal,
    /// Anchored Friday weekend.
    Weekend,
    /// Seed-and-expand best window.
    Best,
}

/// A window at a specific spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripWindow {
    /// Location name.
    pub spot: String,
    /// Origin of the window.
    pub kind: WindowKind,
    /// The window itself.
    #[serde(flatten)]
    pub window: CandidateWindow,
}

/// Ranks trip windows across several spots.
///
/// # Example
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use trip_windows::models::HalfDayScore;
/// use trip_windows::trips::{SpotScores, TripPlanner};
///
/// let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
/// let scores = |v: f64| -> Vec<HalfDayScore> {
///     (0..14).map(|i| HalfDayScore::am(start + Duration::days(i), v)).collect()
/// };
/// let spots = vec![
///     SpotScores::new("North Beach", scores(3.2)),
///     SpotScores::new("Point Break", scores(4.6)),
/// ];
///
/// let trips = TripPlanner::new().plan(&spots);
/// assert_eq!(trips[0].spot, "Point Break");
/// ```
#[derive(Debug, Clone)]
pub struct TripPlanner {
    selector: WindowSelector,
    per_spot_limit: usize,
    weekends: Option<WeekendSpan>,
    best_window_days: Option<u32>,
}

impl TripPlanner {
    /// Creates a planner using the default selector, general windows only.
    pub fn new() -> Self {
        Self {
            selector: WindowSelector::new(),
            per_spot_limit: DEFAULT_PER_SPOT_LIMIT,
            weekends: None,
            best_window_days: None,
        }
    }

    /// Sets the selector used for general windows.
    pub fn with_selector(mut self, selector: WindowSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Sets how many general windows each spot contributes.
    pub fn with_per_spot_limit(mut self, limit: usize) -> Self {
        self.per_spot_limit = limit;
        self
    }

    /// Adds anchored weekends of the given shape.
    pub fn with_weekends(mut self, span: WeekendSpan) -> Self {
        self.weekends = Some(span);
        self
    }

    /// Adds the seed-and-expand best window, capped at `max_days`.
    pub fn with_best_window(mut self, max_days: u32) -> Self {
        self.best_window_days = Some(max_days);
        self
    }

    /// Windows for a single spot, unranked.
    pub fn spot_windows(&self, spot: &SpotScores) -> Vec<TripWindow> {
        if spot.scores.is_empty() {
            return Vec::new();
        }

        let tag = |kind: WindowKind| {
            move |window: CandidateWindow| TripWindow {
                spot: spot.spot.clone(),
                kind,
                window,
            }
        };

        let mut trips: Vec<TripWindow> = self
            .selector
            .select(&spot.scores)
            .into_iter()
            .take(self.per_spot_limit)
            .map(tag(WindowKind::Optimal))
            .collect();

        if self.weekends.is_some() || self.best_window_days.is_some() {
            let daily = aggregate_daily(&spot.scores);
            if let Some(span) = self.weekends {
                let weekends = anchored_weekends(&daily, span);
                trips.extend(weekends.into_iter().map(tag(WindowKind::Weekend)));
            }
            if let Some(max_days) = self.best_window_days {
                trips.extend(find_best_window(&daily, max_days).map(tag(WindowKind::Best)));
            }
        }

        debug!("{}: {} trip windows", spot.spot, trips.len());
        trips
    }

    /// Windows for every spot, best first.
    ///
    /// Ties keep spot order as given.
    pub fn plan(&self, spots: &[SpotScores]) -> Vec<TripWindow> {
        let mut trips: Vec<TripWindow> =
            spots.iter().flat_map(|s| self.spot_windows(s)).collect();
        trips.sort_by(|a, b| compare_windows(&a.window, &b.window));
        trips
    }
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::new()
    }
}
