//! Input validation for window selection.
//!
//! The lenient pipelines never validate: bad parameters simply produce an
//! empty result. Callers that prefer an explicit report run these checks
//! first (or use the `try_*` pipeline entry points). Detects:
//! - Zero minimum duration
//! - Inverted duration range
//! - Non-finite thresholds
//! - Non-finite scores
//! - Duplicate (date, half-day) records

use std::collections::HashSet;

use crate::config::WindowParams;
use crate::models::HalfDayScore;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `min_days` is zero.
    InvalidDuration,
    /// `max_days < min_days`.
    InvertedDurationRange,
    /// A score threshold is NaN or infinite.
    NonFiniteThreshold,
    /// A half-day score is NaN or infinite.
    NonFiniteScore,
    /// Two records share the same date and half-day.
    DuplicateRecord,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates pipeline parameters.
///
/// Checks:
/// 1. `min_days >= 1`
/// 2. `max_days >= min_days`
/// 3. `min_score` is finite
pub fn validate_params(params: &WindowParams) -> ValidationResult {
    let mut errors = Vec::new();

    if params.min_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "min_days must be at least 1",
        ));
    }

    if params.max_days < params.min_days {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedDurationRange,
            format!(
                "max_days ({}) is less than min_days ({})",
                params.max_days, params.min_days
            ),
        ));
    }

    if !params.min_score.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteThreshold,
            format!("min_score must be finite, got {}", params.min_score),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates half-day score records.
///
/// Checks:
/// 1. Every score is finite
/// 2. No two records share a (date, half-day) pair
pub fn validate_scores(scores: &[HalfDayScore]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for s in scores {
        if !s.score.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteScore,
                format!("score on {} {:?} is {}", s.date, s.half_day, s.score),
            ));
        }
        if !seen.insert((s.date, s.half_day)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRecord,
                format!("duplicate record for {} {:?}", s.date, s.half_day),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Runs both parameter and score checks, collecting every error.
pub fn validate_input(scores: &[HalfDayScore], params: &WindowParams) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_params(params) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_scores(scores) {
        errors.append(&mut e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
