//! Calendar helpers shared by every date-filtered list.
//!
//! Dates arrive from the API as ISO strings, sometimes with a time suffix and
//! sometimes missing entirely. Everything here is lenient: a value that cannot
//! be parsed becomes `None` instead of an error.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Parse `YYYY-MM-DD`, ignoring any time-of-day suffix
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse an API timestamp.
///
/// Accepts RFC 3339 (kept in its own offset), naive ISO date-times with or
/// without seconds, and bare dates (midnight).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(date)
}

fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1)
        .unwrap_or(date)
}

/// Inclusive calendar-date range.
///
/// The range only filters when both bounds are set; a half-open range is a
/// no-op, matching the date pickers where the second click is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// From the `yyyy-mm-dd` values of two `<input type="date">` fields
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self::new(parse_calendar_date(start), parse_calendar_date(end))
    }

    /// Initial period of the timesheet screens: start of month through today
    pub fn default_for(today: NaiveDate) -> Self {
        DateRangePreset::Reset.resolve(today)
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// A record without a date never falls inside a bounded range
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date.map_or(false, |d| start <= d && d <= end),
            _ => true,
        }
    }

    pub fn start_input(&self) -> String {
        self.start.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    }

    pub fn end_input(&self) -> String {
        self.end.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    }
}

/// Quick-pick buttons of the date range picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangePreset {
    ThisWeek,
    LastMonth,
    NextMonth,
    Reset,
}

impl DateRangePreset {
    pub fn all() -> Vec<DateRangePreset> {
        vec![
            DateRangePreset::ThisWeek,
            DateRangePreset::LastMonth,
            DateRangePreset::NextMonth,
            DateRangePreset::Reset,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::ThisWeek => "Cette semaine",
            DateRangePreset::LastMonth => "Mois dernier",
            DateRangePreset::NextMonth => "Mois prochain",
            DateRangePreset::Reset => "Réinitialiser",
        }
    }

    /// Weeks start on Sunday
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            DateRangePreset::ThisWeek => {
                let offset = today.weekday().num_days_from_sunday() as i64;
                DateRange::between(today - Duration::days(offset), today)
            }
            DateRangePreset::LastMonth => {
                let start = shift_month(today, -1);
                DateRange::between(start, last_day_of_month(start))
            }
            DateRangePreset::NextMonth => {
                let start = shift_month(today, 1);
                DateRange::between(start, last_day_of_month(start))
            }
            DateRangePreset::Reset => DateRange::between(first_day_of_month(today), today),
        }
    }
}
