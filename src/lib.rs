//! Travel window selection over half-day quality scores.
//!
//! Given precomputed scores per half-day (e.g. surf conditions), selects
//! multi-day windows that satisfy duration and quality constraints, then
//! removes overlapping candidates best-first.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `HalfDayScore`, `DailyScore`,
//!   `CandidateWindow`, `DateRange`, `WindowDetail`
//! - **`selection`**: Daily aggregation, window enumeration, the
//!   `WindowSelector` pipeline, weekend windows, detail reports
//! - **`resolving`**: Overlap resolution strategies (greedy, optimal)
//! - **`trips`**: Ranking windows across several locations
//! - **`config`**: Thresholds and pipeline parameters with named defaults
//! - **`validation`**: Optional precondition checks
//!
//! # Architecture
//!
//! Pure, synchronous, in-memory transforms. Fetching forecasts, computing
//! the half-day score, and exporting results belong to the caller.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1, 6.1

pub mod config;
pub mod error;
pub mod models;
pub mod resolving;
pub mod selection;
pub mod stats;
pub mod trips;
pub mod validation;

pub use error::{Result, WindowError};
