//! Permissive date/time parsing.
//!
//! One parser serves both type inference and coercion so the two always
//! agree on what counts as a temporal value. Parsing is non-strict in
//! spirit: callers treat `None` as "not a temporal value", never as an
//! error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Parses a datetime from common delimited formats. Date-only values
/// are accepted and land at midnight, the same promotion the underlying
/// readers apply when inferring a datetime from a bare date.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    parse_date(trimmed).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parses a date-only value from common delimited formats.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parses a time-of-day value.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_datetime() {
        let dt = parse_datetime("2023-01-15T10:30:00").unwrap();
        assert_eq!(dt.to_string(), "2023-01-15 10:30:00");

        let dt = parse_datetime("2023-01-15 10:30:00.250").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn promotes_bare_date_to_midnight() {
        let dt = parse_datetime("2023-01-01").unwrap();
        assert_eq!(dt.to_string(), "2023-01-01 00:00:00");
    }

    #[test]
    fn parses_slash_dates() {
        assert!(parse_date("2023/01/15").is_some());
        assert!(parse_date("01/15/2023").is_some());
    }

    #[test]
    fn parses_times() {
        assert!(parse_time("10:30").is_some());
        assert!(parse_time("10:30:59").is_some());
        assert!(parse_time("23:59:59.999").is_some());
    }

    #[test]
    fn rejects_non_temporal_values() {
        assert_eq!(parse_datetime("hello"), None);
        assert_eq!(parse_datetime("123.45"), None);
        assert_eq!(parse_date("20230101x"), None);
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("   "), None);
    }
}
