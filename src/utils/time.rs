use crate::error::{invalid_timestamp, ApiResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Naive date/time shapes accepted by the time setters, tried in order
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a free-form date/time string into an absolute UTC instant.
///
/// Accepts RFC 3339, a naive date-time with `T` or space separator, or a
/// bare `YYYY-MM-DD` date (taken as midnight). Naive input is interpreted
/// as UTC. Anything else is an `InvalidTimestamp` error.
pub fn parse_timestamp(input: &str) -> ApiResult<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(invalid_timestamp(input))
}

/// Canonical ISO-8601 rendering stored in resources and sent on the wire.
/// Whole seconds, numeric offset.
pub fn to_canonical(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_timestamp() {
        // RFC 3339, offset converted to UTC
        let instant = parse_timestamp("2024-01-01T10:00:00Z").unwrap();
        assert_eq!(to_canonical(&instant), "2024-01-01T10:00:00+00:00");

        let instant = parse_timestamp("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(to_canonical(&instant), "2024-01-01T10:00:00+00:00");

        // Naive date-time, T and space separators
        let instant = parse_timestamp("2024-06-15T08:30:00").unwrap();
        assert_eq!(to_canonical(&instant), "2024-06-15T08:30:00+00:00");

        let instant = parse_timestamp("2024-06-15 08:30:00").unwrap();
        assert_eq!(to_canonical(&instant), "2024-06-15T08:30:00+00:00");

        // Bare date becomes midnight
        let instant = parse_timestamp("2024-06-15").unwrap();
        assert_eq!(to_canonical(&instant), "2024-06-15T00:00:00+00:00");

        // Surrounding whitespace is tolerated
        let instant = parse_timestamp("  2024-06-15  ").unwrap();
        assert_eq!(to_canonical(&instant), "2024-06-15T00:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        for input in ["", "next tuesday", "15/06/2024", "2024-13-01"] {
            match parse_timestamp(input) {
                Err(Error::InvalidTimestamp(reported)) => assert_eq!(reported, input),
                other => panic!("expected InvalidTimestamp for {:?}, got {:?}", input, other),
            }
        }
    }
}
