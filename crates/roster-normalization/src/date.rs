//! Date normalization to ISO 8601 (`YYYY-MM-DD`).
//!
//! Accepted inputs, tried in order:
//! 1. ISO `YYYY-MM-DD`
//! 2. `DD/MM/YYYY` (day first)
//! 3. Spreadsheet date serials (1900 date system)
//! 4. Common textual layouts (`2010/05/15`, `15 May 2010`, RFC 3339, ...)

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid ISO date regex"));

static DAY_FIRST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("Invalid DD/MM/YYYY regex")
});

/// Largest serial a spreadsheet can hold (9999-12-31).
const MAX_SERIAL: f64 = 2_958_465.0;

/// Serial number of the non-existent 1900-02-29 kept for Lotus 1-2-3 compatibility.
const PHANTOM_LEAP_DAY: i64 = 60;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Normalize a raw date cell to ISO `YYYY-MM-DD`.
///
/// Returns an empty string when the value cannot be interpreted as a date.
pub fn parse_date(raw: &str) -> String {
    parse_date_value(raw)
        .map(format_iso_date)
        .unwrap_or_default()
}

/// Interpret a raw date cell as a calendar date.
pub fn parse_date_value(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if ISO_DATE_REGEX.is_match(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok();
    }

    if let Some(captures) = DAY_FIRST_REGEX.captures(trimmed) {
        let day = captures[1].parse().ok()?;
        let month = captures[2].parse().ok()?;
        let year = captures[3].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
        // Day-first failed (e.g. 05/15/2010); the generic layouts try month-first.
    }

    if let Ok(serial) = trimmed.parse::<f64>() {
        return serial_to_date(serial);
    }

    parse_generic(trimmed)
}

/// Decode a 1900-system spreadsheet date serial.
///
/// Serial 1 is 1900-01-01. The fractional part (time of day) is ignored.
/// Serial 60, the phantom 1900-02-29, has no calendar date.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }
    let days = serial.trunc() as i64;
    let epoch = match days.cmp(&PHANTOM_LEAP_DAY) {
        std::cmp::Ordering::Less => NaiveDate::from_ymd_opt(1899, 12, 31)?,
        std::cmp::Ordering::Equal => return None,
        std::cmp::Ordering::Greater => NaiveDate::from_ymd_opt(1899, 12, 30)?,
    };
    epoch.checked_add_days(chrono::Days::new(days as u64))
}

/// Encode a date as a 1900-system spreadsheet serial.
pub fn date_to_serial(date: NaiveDate) -> f64 {
    let Some(march_first) = NaiveDate::from_ymd_opt(1900, 3, 1) else {
        return 0.0;
    };
    let epoch = if date < march_first {
        NaiveDate::from_ymd_opt(1899, 12, 31)
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)
    };
    epoch.map_or(0.0, |epoch| (date - epoch).num_days() as f64)
}

/// Format a date as ISO `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_generic(value: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_verbatim() {
        assert_eq!(parse_date("2010-05-15"), "2010-05-15");
        assert_eq!(parse_date("  2010-05-15 "), "2010-05-15");
    }

    #[test]
    fn test_iso_impossible_date() {
        assert_eq!(parse_date("2010-02-30"), "");
    }

    #[test]
    fn test_day_first() {
        assert_eq!(parse_date("15/05/2010"), "2010-05-15");
        assert_eq!(parse_date("1/2/2011"), "2011-02-01");
    }

    #[test]
    fn test_day_first_falls_back_to_month_first() {
        assert_eq!(parse_date("05/15/2010"), "2010-05-15");
    }

    #[test]
    fn test_serial() {
        assert_eq!(parse_date("40313"), "2010-05-15");
        assert_eq!(parse_date("40313.75"), "2010-05-15");
        assert_eq!(parse_date("1"), "1900-01-01");
        assert_eq!(parse_date("59"), "1900-02-28");
        assert_eq!(parse_date("61"), "1900-03-01");
    }

    #[test]
    fn test_serial_out_of_range() {
        assert_eq!(serial_to_date(0.0), None);
        assert_eq!(serial_to_date(60.0), None);
        assert_eq!(serial_to_date(-5.0), None);
        assert_eq!(serial_to_date(f64::NAN), None);
        assert_eq!(serial_to_date(3_000_000.0), None);
    }

    #[test]
    fn test_serial_inverse() {
        let date = NaiveDate::from_ymd_opt(2010, 5, 15).unwrap();
        assert_eq!(date_to_serial(date), 40313.0);
        assert_eq!(serial_to_date(date_to_serial(date)), Some(date));

        let early = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(date_to_serial(early), 1.0);
    }

    #[test]
    fn test_generic_layouts() {
        assert_eq!(parse_date("2010/05/15"), "2010-05-15");
        assert_eq!(parse_date("15 May 2010"), "2010-05-15");
        assert_eq!(parse_date("May 15, 2010"), "2010-05-15");
        assert_eq!(parse_date("2010-05-15T08:30:00"), "2010-05-15");
        assert_eq!(parse_date("2010-05-15T08:30:00+02:00"), "2010-05-15");
        assert_eq!(parse_date("15.05.2010"), "2010-05-15");
        assert_eq!(parse_date("2010-5-15"), "2010-05-15");
        assert_eq!(parse_date("2010-5-1"), "2010-05-01");
    }

    #[test]
    fn test_total_failure_is_empty() {
        assert_eq!(parse_date(""), "");
        assert_eq!(parse_date("not a date"), "");
        assert_eq!(parse_date("31/31/2010"), "");
    }
}
