//! Window selection pipeline.
//!
//! # Algorithm
//!
//! 1. Aggregate half-day scores into a daily series.
//! 2. Enumerate windows for every duration in `[min_days, max_days]`.
//! 3. Drop windows whose average is below `min_score`.
//! 4. Resolve overlaps (greedy best-first by default).
//! 5. Keep the top `top_k`.
//!
//! Empty input, an inverted duration range, or no qualifying window all
//! produce an empty result. The `try_*` variants validate first and report
//! problems instead.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::{aggregate_daily, candidate_windows, window_detail, weekend_scores};
use crate::config::{ContiguityPolicy, SelectionConfig, WindowParams};
use crate::error::{Result, WindowError};
use crate::models::{parse_date, HalfDayScore, SelectedWindow, WindowDetail};
use crate::resolving::{GreedyResolver, OverlapResolver};
use crate::validation;

/// Input container for one selection run.
#[derive(Debug, Clone)]
pub struct WindowRequest {
    /// Half-day scores to select from.
    pub scores: Vec<HalfDayScore>,
    /// Pipeline parameters.
    pub params: WindowParams,
}

impl WindowRequest {
    /// Creates a request with the general defaults.
    pub fn new(scores: Vec<HalfDayScore>) -> Self {
        Self {
            scores,
            params: WindowParams::general(),
        }
    }

    /// Sets the pipeline parameters.
    pub fn with_params(mut self, params: WindowParams) -> Self {
        self.params = params;
        self
    }
}

/// Selects ranked, non-overlapping travel windows from half-day scores.
///
/// # Example
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use trip_windows::config::WindowParams;
/// use trip_windows::models::HalfDayScore;
/// use trip_windows::selection::WindowSelector;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let scores: Vec<HalfDayScore> = (0..10)
///     .flat_map(|i| {
///         let d = start + Duration::days(i);
///         let s = if i < 5 { 4.5 } else { 1.0 };
///         [HalfDayScore::am(d, s), HalfDayScore::pm(d, s)]
///     })
///     .collect();
///
/// let selector = WindowSelector::new();
/// let params = WindowParams::new(3, 5, 4.0).with_max_overlap(0);
/// let windows = selector.select_with(&scores, &params);
/// assert_eq!(windows[0].duration_days, 5);
/// assert_eq!(windows[0].start_date, start);
/// ```
#[derive(Debug, Clone)]
pub struct WindowSelector {
    config: SelectionConfig,
    /// `None` = greedy, limited to `config.top_k`.
    resolver: Option<Arc<dyn OverlapResolver>>,
}

impl WindowSelector {
    /// Creates a selector with the default configuration and the greedy
    /// resolver.
    pub fn new() -> Self {
        Self {
            config: SelectionConfig::default(),
            resolver: None,
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SelectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the overlap resolver.
    ///
    /// The result holds at most `min(resolver limit, top_k)` windows.
    pub fn with_resolver<R: OverlapResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Runs the general pipeline with the configured parameters.
    pub fn select(&self, scores: &[HalfDayScore]) -> Vec<SelectedWindow> {
        self.select_with(scores, &self.config.general)
    }

    /// Runs the general pipeline with explicit parameters.
    pub fn select_with(
        &self,
        scores: &[HalfDayScore],
        params: &WindowParams,
    ) -> Vec<SelectedWindow> {
        self.run(scores, params, self.config.contiguity)
    }

    /// Runs the pipeline on a request.
    pub fn select_request(&self, request: &WindowRequest) -> Vec<SelectedWindow> {
        self.select_with(&request.scores, &request.params)
    }

    /// Runs the weekend pipeline with the configured weekend parameters.
    ///
    /// Only Friday, Saturday and Sunday records take part, and windows are
    /// positional over those days regardless of the contiguity policy.
    pub fn select_weekends(&self, scores: &[HalfDayScore]) -> Vec<SelectedWindow> {
        self.select_weekends_with(scores, &self.config.weekend)
    }

    /// Runs the weekend pipeline with explicit parameters.
    pub fn select_weekends_with(
        &self,
        scores: &[HalfDayScore],
        params: &WindowParams,
    ) -> Vec<SelectedWindow> {
        let weekend = weekend_scores(scores);
        self.run(&weekend, params, ContiguityPolicy::Positional)
    }

    /// Validates input, then runs the general pipeline.
    ///
    /// # Errors
    /// [`WindowError::Validation`] listing every problem found.
    pub fn try_select(&self, scores: &[HalfDayScore]) -> Result<Vec<SelectedWindow>> {
        self.try_select_with(scores, &self.config.general)
    }

    /// Validates input, then runs the general pipeline with explicit
    /// parameters.
    ///
    /// # Errors
    /// [`WindowError::Validation`] listing every problem found.
    pub fn try_select_with(
        &self,
        scores: &[HalfDayScore],
        params: &WindowParams,
    ) -> Result<Vec<SelectedWindow>> {
        validation::validate_input(scores, params).map_err(WindowError::Validation)?;
        Ok(self.select_with(scores, params))
    }

    /// Validates input, then runs the weekend pipeline.
    ///
    /// # Errors
    /// [`WindowError::Validation`] listing every problem found.
    pub fn try_select_weekends(&self, scores: &[HalfDayScore]) -> Result<Vec<SelectedWindow>> {
        validation::validate_input(scores, &self.config.weekend)
            .map_err(WindowError::Validation)?;
        Ok(self.select_weekends(scores))
    }

    /// Detail report for an explicit range, using the configured good
    /// threshold. `None` if no record falls in range.
    pub fn detail(
        &self,
        scores: &[HalfDayScore],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<WindowDetail> {
        window_detail(scores, start, end, self.config.good_threshold)
    }

    /// Detail report for a range given as date strings.
    ///
    /// # Errors
    /// [`WindowError::MalformedDate`] if either bound cannot be parsed.
    pub fn detail_str(
        &self,
        scores: &[HalfDayScore],
        start: &str,
        end: &str,
    ) -> Result<Option<WindowDetail>> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Ok(self.detail(scores, start, end))
    }

    fn run(
        &self,
        scores: &[HalfDayScore],
        params: &WindowParams,
        policy: ContiguityPolicy,
    ) -> Vec<SelectedWindow> {
        let daily = aggregate_daily(scores);
        let candidates = candidate_windows(&daily, params, policy);
        let mut selected = match &self.resolver {
            Some(resolver) => resolver.resolve(&candidates, params.max_overlap_days),
            None => GreedyResolver::new()
                .with_limit(self.config.top_k)
                .resolve(&candidates, params.max_overlap_days),
        };
        selected.truncate(self.config.top_k);

        debug!(
            "{} resolver: {} days, {} candidates, {} selected (days {}..={}, min score {})",
            self.resolver.as_ref().map_or("greedy", |r| r.name()),
            daily.len(),
            candidates.len(),
            selected.len(),
            params.min_days,
            params.max_days,
            params.min_score
        );

        selected
    }
}

impl Default for WindowSelector {
    fn default() -> Self {
        Self::new()
    }
}
