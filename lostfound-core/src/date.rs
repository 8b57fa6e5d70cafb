//! Calendar-day handling for report dates.
//!
//! Reports only care about which day something happened. Timestamps coming
//! from the data layer are collapsed to their UTC calendar day so that two
//! reports on the same day always compare as zero days apart.

use jiff::{Timestamp, civil, tz::TimeZone};
use thiserror::Error;

/// Error returned by [`parse_calendar_day`].
#[derive(Debug, Error)]
#[error("{raw:?} is neither a calendar date nor a timestamp")]
pub struct CalendarDayError {
    /// Input that failed to parse.
    pub raw: String,
    /// Error from the last parse attempt.
    #[source]
    pub source: jiff::Error,
}

/// Parse a report date into a calendar day.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp (normalised to its UTC day), or
/// a civil datetime without offset (its date part is used as-is).
///
/// # Errors
/// Returns [`CalendarDayError`] when none of the accepted forms match.
///
/// # Examples
/// ```
/// use jiff::civil::date;
/// use lostfound_core::parse_calendar_day;
///
/// assert_eq!(parse_calendar_day("2025-04-01").ok(), Some(date(2025, 4, 1)));
/// assert_eq!(
///     parse_calendar_day("2025-04-01T23:30:00-02:00").ok(),
///     Some(date(2025, 4, 2)),
/// );
/// ```
pub fn parse_calendar_day(raw: &str) -> Result<civil::Date, CalendarDayError> {
    let trimmed = raw.trim();
    if !trimmed.contains(['T', 't', ' ']) {
        return trimmed.parse::<civil::Date>().map_err(|source| CalendarDayError {
            raw: raw.to_owned(),
            source,
        });
    }
    if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::UTC).date());
    }
    trimmed
        .parse::<civil::DateTime>()
        .map(|datetime| datetime.date())
        .map_err(|source| CalendarDayError {
            raw: raw.to_owned(),
            source,
        })
}

#[cfg(feature = "serde")]
pub(crate) mod calendar_day {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(date)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_day(&raw).map_err(D::Error::custom)
    }
}
