//! Window selection pipelines and reports.
//!
//! Control flow of the general pipeline:
//!
//! ```text
//! half-day scores → aggregate_daily → candidate_windows → resolver → top-K
//! ```
//!
//! The weekend pipeline filters to Friday–Sunday records first. The detail
//! reporter runs independently on the raw half-day records.
//!
//! # Modules
//!
//! - **`aggregate`**: half-day → daily means
//! - **`enumerate`**: sliding windows and score filtering
//! - **`pipeline`**: `WindowSelector`, the end-to-end entry point
//! - **`weekend`**: Friday–Sunday filtering and anchored weekends
//! - **`detail`**: statistics for an explicit date range
//! - **`expansion`**: seed-and-expand best window

mod aggregate;
mod detail;
mod enumerate;
mod expansion;
mod pipeline;
mod weekend;

pub use aggregate::aggregate_daily;
pub use detail::window_detail;
pub use enumerate::{candidate_windows, enumerate_windows, filter_windows, summarize_window};
pub use expansion::{find_best_window, EXPANSION_TOLERANCE};
pub use pipeline::{WindowRequest, WindowSelector};
pub use weekend::{anchored_weekends, is_weekend_day, weekend_scores, WeekendSpan};
