//! Daily aggregation of half-day scores.

use std::collections::BTreeMap;

use crate::models::{DailyScore, HalfDayScore};

/// Collapses half-day scores into one mean score per date.
///
/// Input order does not matter. The result has one entry per distinct
/// date, strictly ascending. A date with a single half-day record keeps
/// that value as its mean.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use trip_windows::models::HalfDayScore;
/// use trip_windows::selection::aggregate_daily;
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let daily = aggregate_daily(&[HalfDayScore::am(d, 3.0), HalfDayScore::pm(d, 5.0)]);
/// assert_eq!(daily.len(), 1);
/// assert_eq!(daily[0].score, 4.0);
/// ```
pub fn aggregate_daily(scores: &[HalfDayScore]) -> Vec<DailyScore> {
    let mut by_date: BTreeMap<_, (f64, usize)> = BTreeMap::new();
    for s in scores {
        let entry = by_date.entry(s.date).or_insert((0.0, 0));
        entry.0 += s.score;
        entry.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| DailyScore::new(date, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_am_pm_mean() {
        let daily =
            aggregate_daily(&[HalfDayScore::am(day(1), 3.0), HalfDayScore::pm(day(1), 5.0)]);
        assert_eq!(daily, vec![DailyScore::new(day(1), 4.0)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn test_unsorted_input_sorted_output() {
        let daily = aggregate_daily(&[
            HalfDayScore::pm(day(3), 1.0),
            HalfDayScore::am(day(1), 2.0),
            HalfDayScore::am(day(3), 3.0),
            HalfDayScore::pm(day(2), 4.0),
        ]);
        let dates: Vec<_> = daily.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);
        assert_eq!(daily[2].score, 2.0);
    }

    #[test]
    fn test_single_half_day_not_penalized() {
        let daily = aggregate_daily(&[HalfDayScore::pm(day(5), 4.5)]);
        assert_eq!(daily[0].score, 4.5);
    }

    #[test]
    fn test_extra_records_all_contribute() {
        // No uniqueness enforcement: every record on the date counts.
        let daily = aggregate_daily(&[
            HalfDayScore::am(day(1), 1.0),
            HalfDayScore::am(day(1), 2.0),
            HalfDayScore::pm(day(1), 6.0),
        ]);
        assert_eq!(daily[0].score, 3.0);
    }
}
