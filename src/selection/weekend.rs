//! Weekend windows.
//!
//! Two flavours:
//!
//! - [`weekend_scores`] keeps Friday–Sunday records for the weekend
//!   pipeline (`WindowSelector::select_weekends`). Windows there are
//!   positional over weekend days only, so a 2-day window is usually a
//!   Saturday + Sunday pair, and a Sunday can be followed by the next
//!   Friday.
//! - [`anchored_weekends`] builds one fixed window per Friday:
//!   Friday–Sunday or Friday–Monday.

use chrono::{Datelike, Duration, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{CandidateWindow, DailyScore, DateRange, HalfDayScore};
use crate::resolving::rank_windows;
use crate::stats;

/// Whether a weekday belongs to the weekend pipeline.
#[inline]
pub fn is_weekend_day(day: Weekday) -> bool {
    matches!(day, Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// Keeps Friday, Saturday and Sunday records.
pub fn weekend_scores(scores: &[HalfDayScore]) -> Vec<HalfDayScore> {
    scores
        .iter()
        .filter(|s| is_weekend_day(s.date.weekday()))
        .cloned()
        .collect()
}

/// Shape of an anchored weekend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendSpan {
    /// Friday to Sunday (3 days).
    FridayToSunday,
    /// Friday to Monday (4 days).
    #[default]
    FridayToMonday,
}

impl WeekendSpan {
    /// Days from Friday to the last day of the weekend.
    pub fn extra_days(&self) -> i64 {
        match self {
            WeekendSpan::FridayToSunday => 2,
            WeekendSpan::FridayToMonday => 3,
        }
    }
}

/// One window per Friday whose closing day is also in the series.
///
/// The window's statistics cover the daily scores present inside the
/// range, so every day weighs the same however many half-day records it
/// had; `duration_days` counts those entries. Sorted best first.
pub fn anchored_weekends(daily: &[DailyScore], span: WeekendSpan) -> Vec<CandidateWindow> {
    let mut windows = Vec::new();

    for (i, friday) in daily.iter().enumerate() {
        if friday.date.weekday() != Weekday::Fri {
            continue;
        }
        let range = DateRange::new(friday.date, friday.date + Duration::days(span.extra_days()));

        let inside: Vec<f64> = daily[i..]
            .iter()
            .take_while(|d| d.date <= range.end)
            .map(|d| d.score)
            .collect();
        let closes = daily[i..].iter().any(|d| d.date == range.end);
        if !closes {
            continue;
        }
        let Some(avg_score) = stats::mean(&inside) else {
            continue;
        };

        windows.push(CandidateWindow {
            start_date: range.start,
            end_date: range.end,
            duration_days: inside.len() as u32,
            span_days: range.span_days(),
            avg_score,
            total_score: inside.iter().sum(),
            consistency: stats::sample_std_dev(&inside).unwrap_or(0.0),
        });
    }

    rank_windows(&mut windows);
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::aggregate_daily;
    use chrono::NaiveDate;

    // 2024-01-01 is a Monday.
    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
    }

    fn daily(values: &[f64]) -> Vec<DailyScore> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DailyScore::new(day(i as i64), v))
            .collect()
    }

    #[test]
    fn test_weekend_scores_filter() {
        let scores: Vec<_> = (0..7).map(|i| HalfDayScore::am(day(i), 1.0)).collect();
        let weekend = weekend_scores(&scores);
        let days: Vec<_> = weekend.iter().map(|s| s.date.weekday()).collect();
        assert_eq!(days, vec![Weekday::Fri, Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_anchored_friday_to_monday() {
        // Mon..Mon (8 days). Friday is offset 4.
        let series = daily(&[1.0, 1.0, 1.0, 1.0, 4.0, 5.0, 3.0, 4.0]);
        let windows = anchored_weekends(&series, WeekendSpan::FridayToMonday);
        assert_eq!(windows.len(), 1);
        let w = &windows[0];
        assert_eq!((w.start_date, w.end_date), (day(4), day(7)));
        assert_eq!(w.duration_days, 4);
        assert_eq!(w.avg_score, 4.0);
    }

    #[test]
    fn test_anchored_needs_closing_day() {
        // Series ends on Sunday: no Friday–Monday window, one Friday–Sunday.
        let series = daily(&[1.0; 7]);
        assert!(anchored_weekends(&series, WeekendSpan::FridayToMonday).is_empty());
        let windows = anchored_weekends(&series, WeekendSpan::FridayToSunday);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].span_days, 3);
    }

    #[test]
    fn test_anchored_sorted_best_first() {
        let mut values = vec![2.0; 14];
        values[11] = 5.0; // second Friday
        values[12] = 5.0;
        values[13] = 5.0;
        let windows = anchored_weekends(&daily(&values), WeekendSpan::FridayToSunday);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].start_date, day(11));
    }

    #[test]
    fn test_anchored_with_missing_saturday() {
        let series: Vec<_> = daily(&[3.0; 7])
            .into_iter()
            .filter(|d| d.date != day(5))
            .collect();
        let windows = anchored_weekends(&series, WeekendSpan::FridayToSunday);
        assert_eq!(windows[0].duration_days, 2);
        assert_eq!(windows[0].span_days, 3);
    }

    #[test]
    fn test_anchored_days_weigh_equally() {
        // Friday and Sunday have both halves, Saturday only the morning.
        let scores = vec![
            HalfDayScore::am(day(4), 4.0),
            HalfDayScore::pm(day(4), 4.0),
            HalfDayScore::am(day(5), 2.0),
            HalfDayScore::am(day(6), 5.0),
            HalfDayScore::pm(day(6), 5.0),
        ];
        let windows = anchored_weekends(&aggregate_daily(&scores), WeekendSpan::FridayToSunday);
        assert_eq!(windows.len(), 1);
        assert!((windows[0].avg_score - 11.0 / 3.0).abs() < 1e-12);
        assert_eq!(windows[0].total_score, 11.0);
    }
}
