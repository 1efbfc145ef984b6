//! Score records.
//!
//! A scoring producer rates each half of a day (morning / afternoon) on a
//! roughly 0–5 scale. The selection pipeline works on daily means of those
//! half-day scores.
//!
//! # Date Model
//! Dates are `chrono::NaiveDate`. Anything date-like arriving from outside
//! is normalized once through [`parse_date`]; no computation re-parses.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WindowError};

/// Half of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HalfDay {
    /// Before 13:00.
    #[serde(alias = "morning")]
    Am,
    /// From 13:00 on.
    #[serde(alias = "afternoon")]
    Pm,
}

impl HalfDay {
    /// Hour at which the afternoon begins.
    pub const AFTERNOON_STARTS_AT: u32 = 13;

    /// Classifies a time of day.
    pub fn from_time(time: NaiveTime) -> Self {
        if time.hour() < Self::AFTERNOON_STARTS_AT {
            HalfDay::Am
        } else {
            HalfDay::Pm
        }
    }
}

/// One half-day quality score (pipeline input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfDayScore {
    /// Calendar date.
    pub date: NaiveDate,
    /// Morning or afternoon.
    pub half_day: HalfDay,
    /// Quality score. Expected finite; thresholds assume a 0–5 scale.
    pub score: f64,
}

impl HalfDayScore {
    /// Creates a half-day score.
    pub fn new(date: NaiveDate, half_day: HalfDay, score: f64) -> Self {
        Self {
            date,
            half_day,
            score,
        }
    }

    /// Creates a morning score.
    pub fn am(date: NaiveDate, score: f64) -> Self {
        Self::new(date, HalfDay::Am, score)
    }

    /// Creates an afternoon score.
    pub fn pm(date: NaiveDate, score: f64) -> Self {
        Self::new(date, HalfDay::Pm, score)
    }

    /// Creates a score from a forecast timestamp, classifying its half-day.
    pub fn at(timestamp: NaiveDateTime, score: f64) -> Self {
        Self::new(timestamp.date(), HalfDay::from_time(timestamp.time()), score)
    }
}

/// Mean score of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyScore {
    /// Calendar date.
    pub date: NaiveDate,
    /// Mean of all half-day scores on this date.
    pub score: f64,
}

impl DailyScore {
    /// Creates a daily score.
    pub fn new(date: NaiveDate, score: f64) -> Self {
        Self { date, score }
    }
}

/// Normalizes a date-like string to a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and naive
/// `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS` timestamps (the time part
/// is dropped).
///
/// # Errors
/// [`WindowError::MalformedDate`] if none of the shapes match.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    let date_err = match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => return Ok(date),
        Err(e) => e,
    };
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(ts.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(ts.date());
        }
    }
    Err(WindowError::MalformedDate {
        value: value.to_string(),
        source: date_err,
    })
}
