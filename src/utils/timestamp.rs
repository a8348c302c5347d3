//! ISO-8601 timestamp helpers for persisted records.
//!
//! Records carry millisecond precision with a `Z` suffix
//! (`2024-05-01T12:00:00.123Z`), both in JSON responses and in the store.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Current UTC time truncated to milliseconds.
///
/// Truncation keeps a freshly created record equal to its own
/// formatted-then-parsed copy.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC 3339 timestamp into UTC.
pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.with_timezone(&Utc))
}

/// Serde adapter for `#[serde(with = "crate::utils::timestamp")]`.
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

/// Serde adapter for `#[serde(with = "crate::utils::timestamp")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_millis_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format(&ts), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_parse_accepts_offsets() {
        let ts = parse("2024-05-01T14:00:00.250+02:00").unwrap();
        assert_eq!(format(&ts), "2024-05-01T12:00:00.250Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
    }

    #[test]
    fn test_now_round_trips_through_format() {
        let ts = now();
        assert_eq!(parse(&format(&ts)).unwrap(), ts);
    }
}
