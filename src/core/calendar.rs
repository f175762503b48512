use chrono::{Datelike, Months, NaiveDate};

use crate::error::CoreError;
use crate::model::schedule::WeekdayLabel;

/// Business days (Mon-Fri) of the given month, ascending.
///
/// A month strictly in the past runs through its last day; the current month
/// is truncated at `today`; a month strictly in the future yields an empty
/// sequence. A month outside 1..=12 is a caller contract violation.
pub fn business_days(year: i32, month: u32, today: NaiveDate) -> Result<Vec<NaiveDate>, CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::InvalidArgument(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CoreError::InvalidArgument(format!("invalid calendar month {year}-{month:02}"))
    })?;

    if (year, month) > (today.year(), today.month()) {
        return Ok(Vec::new());
    }

    let last_of_month = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| {
            CoreError::InvalidArgument(format!("calendar overflow for {year}-{month:02}"))
        })?;

    let end = if (year, month) == (today.year(), today.month()) {
        today.min(last_of_month)
    } else {
        last_of_month
    };

    Ok(first
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !WeekdayLabel::from(*d).is_weekend())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_2024_has_23_business_days() {
        let days = business_days(2024, 1, date(2025, 6, 1)).unwrap();
        assert_eq!(days.len(), 23);
        assert_eq!(days.first(), Some(&date(2024, 1, 1)));
        assert_eq!(days.last(), Some(&date(2024, 1, 31)));
        assert!(
            days.iter()
                .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        );
    }

    #[test]
    fn march_2024_has_21_business_days() {
        let days = business_days(2024, 3, date(2025, 6, 1)).unwrap();
        assert_eq!(days.len(), 21);
    }

    #[test]
    fn current_month_truncates_at_today() {
        let today = date(2024, 3, 13);
        let days = business_days(2024, 3, today).unwrap();
        assert!(days.iter().all(|d| *d <= today));
        assert!(days.iter().all(|d| d.day() >= 1));
        assert_eq!(days.last(), Some(&date(2024, 3, 13)));
    }

    #[test]
    fn future_month_is_empty() {
        let days = business_days(2024, 4, date(2024, 3, 13)).unwrap();
        assert!(days.is_empty());
        let days = business_days(2025, 1, date(2024, 12, 31)).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn month_13_is_rejected() {
        let err = business_days(2024, 13, date(2024, 3, 13)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn month_zero_is_rejected() {
        let err = business_days(2024, 0, date(2024, 3, 13)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn deterministic_for_the_same_today() {
        let today = date(2024, 3, 13);
        assert_eq!(
            business_days(2024, 3, today).unwrap(),
            business_days(2024, 3, today).unwrap()
        );
    }
}
