use chrono::{Datelike, NaiveDate};

/// Resolves a day-month pair within a specific year.
///
/// A `29-02` pair falls back to 1 March in non-leap years; any other pair
/// that does not exist in the calendar resolves to `None`.
pub fn resolve_in_year(year: i32, day: u32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// Next occurrence of a day-month on or after the reference date.
pub fn next_occurrence(day: u32, month: u32, on_or_after: NaiveDate) -> Option<NaiveDate> {
    let this_year = resolve_in_year(on_or_after.year(), day, month)?;
    if this_year >= on_or_after {
        Some(this_year)
    } else {
        resolve_in_year(on_or_after.year() + 1, day, month)
    }
}

/// Formats a date for user-facing lists, e.g. "15 March".
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d %B").to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        assert_eq!(
            next_occurrence(15, 3, date(2025, 3, 10)),
            Some(date(2025, 3, 15))
        );
    }

    #[test]
    fn test_next_occurrence_on_the_day() {
        assert_eq!(
            next_occurrence(15, 3, date(2025, 3, 15)),
            Some(date(2025, 3, 15))
        );
    }

    #[test]
    fn test_next_occurrence_wraps_to_next_year() {
        assert_eq!(
            next_occurrence(15, 3, date(2025, 3, 16)),
            Some(date(2026, 3, 15))
        );
        assert_eq!(
            next_occurrence(2, 1, date(2025, 12, 30)),
            Some(date(2026, 1, 2))
        );
    }

    #[test]
    fn test_next_occurrence_leap_day_in_leap_year() {
        assert_eq!(
            next_occurrence(29, 2, date(2024, 2, 1)),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_next_occurrence_leap_day_in_non_leap_year() {
        // 29-02 resolves to 1 March when February is short
        assert_eq!(
            next_occurrence(29, 2, date(2025, 2, 1)),
            Some(date(2025, 3, 1))
        );
    }

    #[test]
    fn test_next_occurrence_leap_day_after_february() {
        assert_eq!(
            next_occurrence(29, 2, date(2024, 3, 5)),
            Some(date(2025, 3, 1))
        );
    }

    #[test]
    fn test_next_occurrence_impossible_date() {
        assert_eq!(next_occurrence(31, 2, date(2025, 1, 1)), None);
    }

    #[test]
    fn test_format_day_month() {
        assert_eq!(format_day_month(date(2025, 3, 15)), "15 March");
        assert_eq!(format_day_month(date(2025, 1, 2)), "02 January");
    }
}
