//! Window selection domain models.
//!
//! Input records, the derived daily series, candidate/selected windows,
//! and detail reports.
//!
//! # Lifecycle
//!
//! | Type | Produced by | Consumed by |
//! |------|-------------|-------------|
//! | `HalfDayScore` | scoring producer | aggregator, detail reporter |
//! | `DailyScore` | aggregator | enumerator |
//! | `CandidateWindow` | enumerator | resolver |
//! | `SelectedWindow` | resolver | presentation layer |
//! | `WindowDetail` | detail reporter | presentation layer |

mod detail;
mod score;
mod window;

pub use detail::{DayBreakdown, WindowDetail};
pub use score::{parse_date, DailyScore, HalfDay, HalfDayScore};
pub use window::{CandidateWindow, DateRange, SelectedWindow};
