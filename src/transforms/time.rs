//! Conversions between UNIX timestamps, ISO8601 dates and humanized durations.

use crate::constants::time::{DURATION_UNITS, MAX_DURATION_UNITS};
use crate::error::{Error, Result};
use crate::string_utils::parse_leading_int;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Naive layouts interpreted as UTC when no offset is given
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Layouts carrying a numeric offset without a colon (e.g. `+0200`)
const OFFSET_DATE_TIME_FORMATS: [&str; 2] =
    ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn format_iso8601(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a date in any of the supported layouts, normalized to UTC.
///
/// Accepted layouts are RFC 3339, RFC 2822, `YYYY-MM-DD[ T]HH:MM[:SS[.fff]]`
/// with an optional `+HHMM` offset, and a bare `YYYY-MM-DD` (UTC midnight).
///
/// # Examples
///
/// ```
/// use textmorph::transforms::time::parse_date;
///
/// let date = parse_date("2024-02-29T12:00:00+01:00").unwrap();
/// assert_eq!(date.timestamp(), 1709204400);
/// assert!(parse_date("yesterday").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(text) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Some(date) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    {
        return Ok(date.with_timezone(&Utc));
    }
    if let Some(date) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Ok(date.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| Error::Date(text.to_string()))
}

fn millis_to_iso8601(millis: i64) -> Result<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|date| format_iso8601(&date))
        .ok_or(Error::Timestamp(millis))
}

fn leading_int(text: &str) -> Result<i64> {
    parse_leading_int(text).ok_or_else(|| Error::Number(text.trim().to_string()))
}

pub fn unix_seconds_to_iso8601(text: &str) -> Result<String> {
    let seconds = leading_int(text)?;
    let millis = seconds
        .checked_mul(1000)
        .ok_or(Error::Timestamp(seconds))?;
    millis_to_iso8601(millis)
}

pub fn unix_millis_to_iso8601(text: &str) -> Result<String> {
    millis_to_iso8601(leading_int(text)?)
}

pub fn iso8601_to_unix_seconds(text: &str) -> Result<String> {
    Ok(parse_date(text)?.timestamp().to_string())
}

pub fn iso8601_to_unix_millis(text: &str) -> Result<String> {
    Ok(parse_date(text)?.timestamp_millis().to_string())
}

/// Humanizes the time between now and the date in the input.
pub fn duration_from_now(text: &str) -> Result<String> {
    let date = parse_date(text)?;
    Ok(time_difference(&Utc::now(), &date))
}

/// Describes how far `to` lies from `from` in human terms.
///
/// The difference is broken into years (365 days), months (30 days), days,
/// hours, minutes and seconds; at most the three largest non-zero units are
/// listed.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use textmorph::transforms::time::time_difference;
///
/// let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let to = from + Duration::hours(26) + Duration::seconds(5);
/// assert_eq!(time_difference(&from, &to), "in 1 day, 2 hours, 5 seconds");
/// assert_eq!(time_difference(&to, &from), "1 day, 2 hours, 5 seconds ago");
/// assert_eq!(time_difference(&from, &from), "now");
/// ```
pub fn time_difference(from: &DateTime<Utc>, to: &DateTime<Utc>) -> String {
    let delta = (*to - *from).num_seconds();
    if delta == 0 {
        return "now".to_string();
    }

    let mut remaining = delta.unsigned_abs();
    let mut parts = Vec::with_capacity(MAX_DURATION_UNITS);
    for (unit, unit_seconds) in DURATION_UNITS {
        let unit_seconds = unit_seconds as u64;
        let count = remaining / unit_seconds;
        if count > 0 {
            parts.push(format!(
                "{} {}{}",
                count,
                unit,
                if count == 1 { "" } else { "s" }
            ));
            remaining %= unit_seconds;
        }
        if parts.len() == MAX_DURATION_UNITS {
            break;
        }
    }

    let span = parts.join(", ");
    if delta > 0 {
        format!("in {}", span)
    } else {
        format!("{} ago", span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unix_to_iso8601() {
        assert_eq!(
            unix_seconds_to_iso8601("1700000000").unwrap(),
            "2023-11-14T22:13:20.000Z"
        );
        assert_eq!(
            unix_seconds_to_iso8601(" 1700000000 seconds").unwrap(),
            "2023-11-14T22:13:20.000Z"
        );
        assert_eq!(
            unix_millis_to_iso8601("1700000000123").unwrap(),
            "2023-11-14T22:13:20.123Z"
        );
        assert_eq!(unix_seconds_to_iso8601("0").unwrap(), "1970-01-01T00:00:00.000Z");
        assert_eq!(unix_seconds_to_iso8601("-1").unwrap(), "1969-12-31T23:59:59.000Z");
    }

    #[test]
    fn test_unix_to_iso8601_failures() {
        assert!(unix_seconds_to_iso8601("abc").is_err());
        assert!(unix_seconds_to_iso8601("").is_err());
        assert!(unix_seconds_to_iso8601("9223372036854775807").is_err());
        assert!(unix_millis_to_iso8601("9223372036854775807").is_err());
    }

    #[test]
    fn test_iso8601_to_unix() {
        assert_eq!(
            iso8601_to_unix_seconds("2023-11-14T22:13:20.000Z").unwrap(),
            "1700000000"
        );
        assert_eq!(
            iso8601_to_unix_millis("2023-11-14T22:13:20.123Z").unwrap(),
            "1700000000123"
        );
        assert_eq!(iso8601_to_unix_seconds("1970-01-02").unwrap(), "86400");
        assert_eq!(iso8601_to_unix_seconds("1970-01-01 00:01").unwrap(), "60");
        assert_eq!(
            iso8601_to_unix_seconds("1970-01-01T01:00:00+0100").unwrap(),
            "0"
        );
        assert_eq!(
            iso8601_to_unix_seconds("Thu, 01 Jan 1970 00:00:10 +0000").unwrap(),
            "10"
        );
        assert_eq!(
            iso8601_to_unix_seconds("1969-12-31T23:59:59.500Z").unwrap(),
            "-1"
        );
    }

    #[test]
    fn test_iso8601_to_unix_failures() {
        assert!(iso8601_to_unix_seconds("not a date").is_err());
        assert!(iso8601_to_unix_millis("2023-13-45").is_err());
        assert!(iso8601_to_unix_millis("").is_err());
    }

    #[test]
    fn test_time_difference_units() {
        let from = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            time_difference(&from, &(from + Duration::seconds(1))),
            "in 1 second"
        );
        assert_eq!(
            time_difference(&from, &(from - Duration::minutes(90))),
            "1 hour, 30 minutes ago"
        );
        assert_eq!(
            time_difference(&from, &(from + Duration::days(400) + Duration::minutes(3))),
            "in 1 year, 1 month, 5 days"
        );
    }

    #[test]
    fn test_duration_from_now() {
        let past = format_iso8601(&(Utc::now() - Duration::days(3) - Duration::hours(1)));
        let described = duration_from_now(&past).unwrap();
        assert!(described.starts_with("3 days, 1 hour"), "{}", described);
        assert!(described.ends_with(" ago"));

        let future = format_iso8601(&(Utc::now() + Duration::days(800)));
        assert!(duration_from_now(&future).unwrap().starts_with("in 2 years"));

        assert!(duration_from_now("whenever").is_err());
    }
}
