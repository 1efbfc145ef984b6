//! Selection thresholds and pipeline parameters.
//!
//! Every threshold the pipelines use lives here with a named default.
//! The struct deserializes from a partial document (missing fields take
//! their defaults), so an external preset loader can hand it over as-is.
//!
//! # Defaults
//!
//! | Setting | General | Weekend |
//! |---------|---------|---------|
//! | `min_days` | 5 | 2 |
//! | `max_days` | 12 | 4 |
//! | `min_score` | 3.0 | 3.5 |
//! | `max_overlap_days` | 3 | 0 |
//!
//! Detail reports count a half-day as good at `good_threshold` (4.0),
//! independently of either `min_score`.

use serde::{Deserialize, Deserializer, Serialize};

/// General pipeline minimum average score.
pub const DEFAULT_MIN_SCORE: f64 = 3.0;
/// Weekend pipeline minimum average score.
pub const DEFAULT_WEEKEND_MIN_SCORE: f64 = 3.5;
/// Half-day score at which a detail report counts a period as good.
pub const DEFAULT_GOOD_THRESHOLD: f64 = 4.0;
/// Number of windows returned by a resolver.
pub const DEFAULT_TOP_K: usize = 10;

/// How the enumerator treats missing dates in the daily series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContiguityPolicy {
    /// Windows are consecutive array positions; a window may silently
    /// span calendar gaps.
    #[default]
    Positional,
    /// Windows whose calendar span differs from their entry count are
    /// dropped.
    Calendar,
}

/// Parameters of one selection pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Shortest window, in daily entries.
    pub min_days: u32,
    /// Longest window, in daily entries.
    pub max_days: u32,
    /// Inclusive lower bound on a window's average score.
    pub min_score: f64,
    /// Days two selected windows may share.
    pub max_overlap_days: u32,
}

impl WindowParams {
    /// Creates parameters with the general overlap tolerance.
    pub fn new(min_days: u32, max_days: u32, min_score: f64) -> Self {
        Self {
            min_days,
            max_days,
            min_score,
            max_overlap_days: 3,
        }
    }

    /// Defaults of the general pipeline.
    pub fn general() -> Self {
        Self::new(5, 12, DEFAULT_MIN_SCORE)
    }

    /// Defaults of the weekend pipeline.
    pub fn weekend() -> Self {
        Self::new(2, 4, DEFAULT_WEEKEND_MIN_SCORE).with_max_overlap(0)
    }

    /// Sets the duration range.
    pub fn with_days(mut self, min_days: u32, max_days: u32) -> Self {
        self.min_days = min_days;
        self.max_days = max_days;
        self
    }

    /// Sets the minimum average score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Sets the overlap tolerance.
    pub fn with_max_overlap(mut self, days: u32) -> Self {
        self.max_overlap_days = days;
        self
    }
}

impl Default for WindowParams {
    fn default() -> Self {
        Self::general()
    }
}

/// Full selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// General pipeline parameters.
    pub general: WindowParams,
    /// Weekend pipeline parameters. A partial `weekend` object fills its
    /// gaps from the weekend defaults.
    #[serde(default = "WindowParams::weekend", deserialize_with = "weekend_params")]
    pub weekend: WindowParams,
    /// Good-period threshold for detail reports.
    pub good_threshold: f64,
    /// Maximum number of selected windows.
    pub top_k: usize,
    /// Gap handling for the general pipeline.
    pub contiguity: ContiguityPolicy,
}

impl SelectionConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            general: WindowParams::general(),
            weekend: WindowParams::weekend(),
            good_threshold: DEFAULT_GOOD_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            contiguity: ContiguityPolicy::Positional,
        }
    }

    /// Sets general pipeline parameters.
    pub fn with_general(mut self, params: WindowParams) -> Self {
        self.general = params;
        self
    }

    /// Sets weekend pipeline parameters.
    pub fn with_weekend(mut self, params: WindowParams) -> Self {
        self.weekend = params;
        self
    }

    /// Sets the good-period threshold.
    pub fn with_good_threshold(mut self, threshold: f64) -> Self {
        self.good_threshold = threshold;
        self
    }

    /// Sets the result size.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the gap policy.
    pub fn with_contiguity(mut self, policy: ContiguityPolicy) -> Self {
        self.contiguity = policy;
        self
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `WindowParams` fields present in a document.
#[derive(Deserialize)]
struct ParamsPatch {
    min_days: Option<u32>,
    max_days: Option<u32>,
    min_score: Option<f64>,
    max_overlap_days: Option<u32>,
}

impl ParamsPatch {
    fn apply(self, base: WindowParams) -> WindowParams {
        WindowParams {
            min_days: self.min_days.unwrap_or(base.min_days),
            max_days: self.max_days.unwrap_or(base.max_days),
            min_score: self.min_score.unwrap_or(base.min_score),
            max_overlap_days: self.max_overlap_days.unwrap_or(base.max_overlap_days),
        }
    }
}

fn weekend_params<'de, D>(deserializer: D) -> Result<WindowParams, D::Error>
where
    D: Deserializer<'de>,
{
    ParamsPatch::deserialize(deserializer).map(|patch| patch.apply(WindowParams::weekend()))
}
