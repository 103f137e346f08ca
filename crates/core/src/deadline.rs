//! Modification deadline parsing and enforcement.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Naive formats accepted for a deadline without an offset. They are read
/// as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A deadline string that matched none of the accepted formats.
#[derive(Debug, thiserror::Error)]
#[error("Invalid deadline '{0}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS")]
pub struct DeadlineParseError(pub String);

/// Parse a configured deadline.
///
/// Accepts RFC 3339 (`2024-12-15T23:59:59+03:00`) or a naive
/// `2024-12-15T23:59:59`, which is taken to be UTC.
pub fn parse_deadline(value: &str) -> Result<Timestamp, DeadlineParseError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DeadlineParseError(value.to_string()))
}

/// A submission stays editable up to and including its deadline.
pub fn is_editable(now: Timestamp, deadline: Timestamp) -> bool {
    now <= deadline
}

/// Fail with [`CoreError::DeadlineExpired`] once `now` is past `deadline`.
pub fn ensure_editable(now: Timestamp, deadline: Timestamp) -> Result<(), CoreError> {
    if is_editable(now, deadline) {
        Ok(())
    } else {
        Err(CoreError::DeadlineExpired { deadline })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone};

    use super::*;

    fn dec_15() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 12, 15, 23, 59, 59).unwrap()
    }

    #[test]
    fn parses_naive_as_utc() {
        assert_eq!(parse_deadline("2024-12-15T23:59:59").unwrap(), dec_15());
        assert_eq!(parse_deadline("2024-12-15 23:59:59").unwrap(), dec_15());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_deadline("2024-12-16T02:59:59+03:00").unwrap();
        assert_eq!(parsed, dec_15());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_deadline("next friday").unwrap_err();
        assert!(err.to_string().contains("next friday"));
    }

    #[test]
    fn deadline_instant_is_still_editable() {
        assert!(is_editable(dec_15(), dec_15()));
        assert!(is_editable(dec_15() - Duration::days(1), dec_15()));
        assert!(!is_editable(dec_15() + Duration::seconds(1), dec_15()));
    }

    #[test]
    fn ensure_editable_reports_expiry() {
        let late = dec_15() + Duration::minutes(5);
        assert_matches!(
            ensure_editable(late, dec_15()),
            Err(CoreError::DeadlineExpired { deadline }) if deadline == dec_15()
        );
    }
}
