//! Forecast horizon check

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Parse a forecast timestamp.
///
/// RFC 3339 with an offset is what the API sends; a bare local date-time
/// (`2024-05-01T10:00:00` or `2024-05-01T10:00`) is read as UTC.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

/// True when `timestamp` falls before `now + horizon`.
///
/// Only the upper bound is checked, so timestamps already in the past pass.
/// Unparseable timestamps never pass. A horizon reaching past the end of the
/// representable calendar has no upper bound.
#[must_use]
pub fn within_horizon(timestamp: &str, now: DateTime<Utc>, horizon: Duration) -> bool {
    match parse_timestamp(timestamp) {
        Some(start) => now
            .checked_add_signed(horizon)
            .is_none_or(|limit| start < limit),
        None => {
            tracing::debug!("Unparseable forecast timestamp {:?}", timestamp);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case("2024-05-01T13:00:00+00:00", true)]
    #[case("2024-05-04T11:59:59Z", true)]
    #[case("2024-05-04T12:00:00Z", false)]
    #[case("2024-05-04T12:00:00+00:00", false)]
    #[case("2024-05-10T08:00:00-04:00", false)]
    // 2024-05-04T07:00-04:00 is 11:00 UTC, inside the window
    #[case("2024-05-04T07:00:00-04:00", true)]
    fn test_horizon_upper_bound(#[case] timestamp: &str, #[case] expected: bool) {
        assert_eq!(within_horizon(timestamp, now(), Duration::hours(72)), expected);
    }

    #[test]
    fn test_past_timestamps_pass() {
        assert!(within_horizon(
            "2024-04-20T08:00:00Z",
            now(),
            Duration::hours(72)
        ));
    }

    #[test]
    fn test_huge_horizon_does_not_overflow() {
        assert!(within_horizon(
            "2024-05-02T08:00:00Z",
            now(),
            Duration::hours(i64::from(u32::MAX))
        ));
        assert!(within_horizon("2024-05-02T08:00:00Z", now(), Duration::MAX));
    }

    #[rstest]
    #[case("")]
    #[case("tomorrow")]
    #[case("2024-13-45T99:00:00Z")]
    fn test_unparseable_timestamps_fail(#[case] timestamp: &str) {
        assert!(!within_horizon(timestamp, now(), Duration::hours(72)));
    }

    #[test]
    fn test_naive_timestamps_read_as_utc() {
        assert_eq!(
            parse_timestamp("2024-05-01T10:00"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2024-05-01T10:00:30"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 30).unwrap())
        );
    }
}
