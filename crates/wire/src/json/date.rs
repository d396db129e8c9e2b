//! ISO-8601 rendering of epoch timestamps

use chrono::{DateTime, Utc};

/// Output layout; the broker stores whole seconds, hence the fixed `.00`
const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.00Z";

/// Render seconds since the Unix epoch as an ISO-8601 UTC string
///
/// Timestamps outside the representable calendar range are clamped to the
/// nearest representable instant.
pub fn iso8601(epoch_seconds: i64) -> String {
    let instant = match DateTime::<Utc>::from_timestamp(epoch_seconds, 0) {
        Some(dt) => dt,
        None if epoch_seconds < 0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    };
    instant.format(ISO8601_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso8601_epoch() {
        assert_eq!(iso8601(0), "1970-01-01T00:00:00.00Z");
    }

    #[test]
    fn test_iso8601_known_instant() {
        assert_eq!(iso8601(1_500_000_000), "2017-07-14T02:40:00.00Z");
    }

    #[test]
    fn test_iso8601_before_epoch() {
        assert_eq!(iso8601(-86_400), "1969-12-31T00:00:00.00Z");
    }

    #[test]
    fn test_iso8601_out_of_range_does_not_panic() {
        assert!(!iso8601(i64::MAX).is_empty());
        assert!(!iso8601(i64::MIN).is_empty());
    }
}
