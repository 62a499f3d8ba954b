use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Splits the raw `/add` argument string into a name and a date token.
///
/// The final whitespace-separated token is the date; everything before it is
/// the name, which may itself contain spaces. Returns `None` when either part
/// is missing.
pub fn split_add_args(args: &str) -> Option<(&str, &str)> {
    let args = args.trim();
    let (name, date) = args.rsplit_once(char::is_whitespace)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, date))
}

pub fn validate_name(name: &str) -> Result<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(anyhow!("Name cannot be empty"));
    }

    if name.len() > 100 {
        return Err(anyhow!("Name cannot be longer than 100 characters"));
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(anyhow!("Name cannot contain line breaks"));
    }

    Ok(())
}

/// Parses a `DD-MM` birthday into a (day, month) pair.
///
/// Both fields must be 1-2 digits and the pair must exist in the calendar.
/// The day is range-checked against a leap year, so `29-02` is accepted and
/// `31-02` is not.
pub fn parse_birthday(input: &str) -> Result<(u32, u32)> {
    let input = input.trim();

    let (day_str, month_str) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Birthday must use the DD-MM format"))?;

    if !is_date_field(day_str) || !is_date_field(month_str) {
        return Err(anyhow!("Birthday must use the DD-MM format"));
    }

    let day: u32 = day_str
        .parse()
        .map_err(|_| anyhow!("Birthday must use the DD-MM format"))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| anyhow!("Birthday must use the DD-MM format"))?;

    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be between 1 and 12"));
    }

    // 2000 is a leap year, so 29-02 passes the existence check
    if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
        return Err(anyhow!("Day {day} does not exist in month {month}"));
    }

    Ok((day, month))
}

fn is_date_field(s: &str) -> bool {
    (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_split_add_args_simple() {
        assert_eq!(split_add_args("Ann 01-01"), Some(("Ann", "01-01")));
    }

    #[test]
    fn test_split_add_args_name_with_spaces() {
        assert_eq!(
            split_add_args("Ann-Marie van Dijk 15-03"),
            Some(("Ann-Marie van Dijk", "15-03"))
        );
    }

    #[test]
    fn test_split_add_args_extra_whitespace() {
        assert_eq!(split_add_args("  Ann   01-01  "), Some(("Ann", "01-01")));
    }

    #[test]
    fn test_split_add_args_missing_parts() {
        assert_eq!(split_add_args(""), None);
        assert_eq!(split_add_args("Ann"), None);
        assert_eq!(split_add_args("   "), None);
        assert_eq!(split_add_args(" 01-01"), None);
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Ann").is_ok());
        assert!(validate_name("Ann-Marie van Dijk").is_ok());
        assert!(validate_name("  Trimmed  ").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("line\nbreak").is_err());
        assert!(validate_name(&"a".repeat(101)).is_err());
        assert!(validate_name(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_parse_birthday_valid() {
        assert_eq!(parse_birthday("01-01").unwrap(), (1, 1));
        assert_eq!(parse_birthday("15-03").unwrap(), (15, 3));
        assert_eq!(parse_birthday("5-3").unwrap(), (5, 3));
        assert_eq!(parse_birthday("31-12").unwrap(), (31, 12));
        assert_eq!(parse_birthday(" 15-03 ").unwrap(), (15, 3));
    }

    #[test]
    fn test_parse_birthday_leap_day() {
        assert_eq!(parse_birthday("29-02").unwrap(), (29, 2));
    }

    #[test]
    fn test_parse_birthday_bad_format() {
        assert!(parse_birthday("").is_err());
        assert!(parse_birthday("5/13").is_err());
        assert!(parse_birthday("15.03").is_err());
        assert!(parse_birthday("123-03").is_err());
        assert!(parse_birthday("15-034").is_err());
        assert!(parse_birthday("1a-03").is_err());
        assert!(parse_birthday("15-").is_err());
        assert!(parse_birthday("-03").is_err());
    }

    #[test]
    fn test_parse_birthday_out_of_range() {
        assert!(parse_birthday("00-01").is_err());
        assert!(parse_birthday("01-00").is_err());
        assert!(parse_birthday("01-13").is_err());
        assert!(parse_birthday("32-01").is_err());
        assert!(parse_birthday("31-02").is_err());
        assert!(parse_birthday("30-02").is_err());
        assert!(parse_birthday("31-04").is_err());
    }
}
