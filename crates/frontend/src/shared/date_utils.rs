/// Utilities for date and time formatting
///
/// French display formats used across the application
use chrono::{Local, NaiveDate, NaiveDateTime};
use contracts::shared::dates::parse_calendar_date;

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    parse_calendar_date(date_str)
        .map(format_naive_date)
        .unwrap_or_else(|| date_str.to_string())
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Hours with a comma decimal separator, e.g. 7.5 -> "7,5"
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    rounded.to_string().replace('.', ",")
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(7.5), "7,5");
        assert_eq!(format_hours(8.0), "8");
        assert_eq!(format_hours(1.0 / 3.0), "0,33");
    }
}
