//! Coercion of client-supplied values into store representations.
//!
//! Date-bearing fields accept three textual forms:
//!
//! | Form                          | Interpretation           |
//! |-------------------------------|--------------------------|
//! | RFC 3339 (`...T10:00:00+02:00`) | as given, stored in UTC |
//! | naive `YYYY-MM-DDTHH:MM[:SS]` | UTC                      |
//! | bare `YYYY-MM-DD`             | UTC midnight             |
//!
//! The `deserialize_*` functions plug into `#[serde(deserialize_with)]` on
//! request DTOs so the shape check happens during JSON extraction.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::calendar;
use crate::error::CoreError;
use crate::types::Timestamp;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a client timestamp in any of the accepted forms.
///
/// The UTC date must fall within [`calendar::SUPPORTED_YEARS`].
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    let ts = parse_any_timestamp(raw.trim())?;
    calendar::check_supported(ts.date_naive())?;
    Ok(ts)
}

fn parse_any_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    parse_date(raw)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| CoreError::Validation(format!("Invalid date or timestamp '{raw}'")))
}

/// Parse a calendar date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Deserialize a required timestamp field.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Deserialize an optional timestamp field. Pair with `#[serde(default)]`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Deserialize a patchable timestamp: absent (`None`), explicit `null`
/// (`Some(None)`) or a value. Pair with `#[serde(default)]`.
pub fn deserialize_nullable_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Option<Timestamp>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_timestamp(deserializer).map(Some)
}

/// Deserialize a patchable field of any type. Absent keys never reach this
/// function, so `#[serde(default)]` yields `None` for them while `null`
/// becomes `Some(None)`.
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Timelike};

    use super::*;

    #[test]
    fn rfc3339_is_normalised_to_utc() {
        let ts = parse_timestamp("2025-06-01T10:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn naive_minutes_form_is_utc() {
        let ts = parse_timestamp("2025-06-01T23:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 23, 0, 0).unwrap());
    }

    #[test]
    fn bare_date_is_midnight() {
        let ts = parse_timestamp("2025-06-01").unwrap();
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn garbage_is_a_validation_error() {
        assert_matches!(parse_timestamp("next tuesday"), Err(CoreError::Validation(_)));
        assert_matches!(parse_date("2025-13-01"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn years_outside_the_supported_range_are_rejected() {
        assert_matches!(parse_timestamp("+12025-06-01"), Err(CoreError::Validation(_)));
        assert_matches!(parse_timestamp("0000-06-01T10:00"), Err(CoreError::Validation(_)));
        assert!(parse_timestamp("9999-12-31T23:59:59Z").is_ok());
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable_timestamp")]
        due_date: Option<Option<Timestamp>>,
        #[serde(default, deserialize_with = "deserialize_nullable")]
        assignee: Option<Option<String>>,
    }

    #[test]
    fn nullable_fields_distinguish_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.due_date, None);
        assert_eq!(absent.assignee, None);

        let cleared: Patch =
            serde_json::from_str(r#"{"due_date": null, "assignee": null}"#).unwrap();
        assert_eq!(cleared.due_date, Some(None));
        assert_eq!(cleared.assignee, Some(None));

        let set: Patch =
            serde_json::from_str(r#"{"due_date": "2025-06-01", "assignee": "Sam"}"#).unwrap();
        assert!(matches!(set.due_date, Some(Some(_))));
        assert_eq!(set.assignee, Some(Some("Sam".to_string())));
    }
}
