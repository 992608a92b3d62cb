//! Lenient date and timestamp parsing for submitted payload fields.
//!
//! Capture clients send ISO-8601 text (`2023-05-01`, `2024-03-15T10:20:30.000Z`,
//! `2024-03-15 10:20:30+05:30`, ...). Anything that does not parse becomes
//! `None`; a bad date never fails a submission.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

enum Timestamp {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

/// Parse a calendar date. Timestamps are accepted too and truncated to the
/// date as written (in their own offset).
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let raw = non_empty_str(value)?;

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    parse_timestamp(raw).map(|ts| match ts {
        Timestamp::Naive(dt) => dt.date(),
        Timestamp::Offset(dt) => dt.date_naive(),
    })
}

/// Parse a timestamp for a zone-less column. Offset-bearing values are
/// normalised to UTC; a bare date means midnight.
pub fn parse_datetime(value: &Value) -> Option<NaiveDateTime> {
    let raw = non_empty_str(value)?;

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0);
    }

    parse_timestamp(raw).map(|ts| match ts {
        Timestamp::Naive(dt) => dt,
        Timestamp::Offset(dt) => dt.naive_utc(),
    })
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    // chrono's %:z does not take a bare "Z"
    let with_offset = match raw.strip_suffix(|c| c == 'Z' || c == 'z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => raw.to_string(),
    };

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(Timestamp::Offset(dt));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Timestamp::Naive(dt));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_parse_date_plain_iso() {
        assert_eq!(parse_date(&json!("2023-05-01")), Some(date(2023, 5, 1)));
    }

    #[test]
    fn test_parse_date_truncates_timestamps() {
        assert_eq!(
            parse_date(&json!("2023-05-01T23:10:00")),
            Some(date(2023, 5, 1))
        );
        // Date as written in its own offset, not converted to UTC
        assert_eq!(
            parse_date(&json!("2023-05-01T01:30:00+05:30")),
            Some(date(2023, 5, 1))
        );
        assert_eq!(
            parse_date(&json!("2024-02-10T09:30:00.123Z")),
            Some(date(2024, 2, 10))
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage_as_none() {
        assert_eq!(parse_date(&json!("not-a-date")), None);
        assert_eq!(parse_date(&json!("2023-13-01")), None);
        assert_eq!(parse_date(&json!("01/05/2023")), None);
    }

    #[test]
    fn test_parse_date_empty_and_non_string_values() {
        assert_eq!(parse_date(&json!("")), None);
        assert_eq!(parse_date(&json!("   ")), None);
        assert_eq!(parse_date(&Value::Null), None);
        assert_eq!(parse_date(&json!(false)), None);
        assert_eq!(parse_date(&json!(0)), None);
        assert_eq!(parse_date(&json!(20230501)), None);
        assert_eq!(parse_date(&json!({"year": 2023})), None);
    }

    #[test]
    fn test_parse_datetime_browser_iso_string() {
        assert_eq!(
            parse_datetime(&json!("2024-03-15T10:20:30.000Z")),
            Some(datetime(2024, 3, 15, 10, 20, 30))
        );
    }

    #[test]
    fn test_parse_datetime_normalises_offsets_to_utc() {
        assert_eq!(
            parse_datetime(&json!("2024-03-15T10:20:30+05:30")),
            Some(datetime(2024, 3, 15, 4, 50, 30))
        );
        assert_eq!(
            parse_datetime(&json!("2024-03-15 01:00:00-02:00")),
            Some(datetime(2024, 3, 15, 3, 0, 0))
        );
    }

    #[test]
    fn test_parse_datetime_naive_forms() {
        assert_eq!(
            parse_datetime(&json!("2024-03-15T10:20:30")),
            Some(datetime(2024, 3, 15, 10, 20, 30))
        );
        assert_eq!(
            parse_datetime(&json!("2024-03-15 10:20")),
            Some(datetime(2024, 3, 15, 10, 20, 0))
        );
        assert_eq!(
            parse_datetime(&json!("2024-03-15")),
            Some(datetime(2024, 3, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_datetime_garbage_is_none() {
        assert_eq!(parse_datetime(&json!("yesterday")), None);
        assert_eq!(parse_datetime(&json!("2024-03-15T25:00:00")), None);
        assert_eq!(parse_datetime(&json!(1710498030)), None);
        assert_eq!(parse_datetime(&Value::Null), None);
    }
}
