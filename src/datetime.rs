//! Date/time utilities for filedrop.

use chrono::{DateTime, NaiveDateTime};

/// Convert a database datetime string to RFC 3339 format.
///
/// SQLite's `datetime('now')` produces `YYYY-MM-DD HH:MM:SS` in UTC.
/// Strings already in RFC 3339 form pass through normalized; anything
/// unparseable is returned as-is.
pub fn to_rfc3339(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.to_rfc3339();
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S") {
        return naive.and_utc().to_rfc3339();
    }

    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rfc3339_sqlite_format() {
        let result = to_rfc3339("2025-10-30 12:00:00");
        assert_eq!(result, "2025-10-30T12:00:00+00:00");
    }

    #[test]
    fn test_to_rfc3339_already_rfc3339() {
        let result = to_rfc3339("2025-10-30T12:00:00+00:00");
        assert_eq!(result, "2025-10-30T12:00:00+00:00");
    }

    #[test]
    fn test_to_rfc3339_invalid_passthrough() {
        assert_eq!(to_rfc3339("not a date"), "not a date");
        assert_eq!(to_rfc3339(""), "");
    }
}
