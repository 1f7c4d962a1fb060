//! Coercion of loosely typed input into instants.
//!
//! The formatter only accepts `chrono` date-times. Hosting code that receives
//! timestamps or strings goes through [`resolve_instant`] first.

use crate::error::{AgoError, Result};
use chrono::{DateTime, FixedOffset, Months, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use tracing::trace;

#[cfg(test)]
mod tests;

/// Canonical text form of a Unix timestamp before it is parsed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const OFFSET_UNITS: [&str; 9] = [
    "year", "month", "week", "day", "hour", "minute", "min", "second", "sec",
];

const NAIVE_FORMATS: [&str; 3] = [TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Anything that can be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstantInput {
    /// Already an instant.
    DateTime(DateTime<Utc>),
    /// Seconds since the Unix epoch.
    Timestamp(i64),
    /// Text such as `2024-05-01 10:00:00`, RFC 3339, `now` or `-3 days`.
    Text(String),
}

impl From<DateTime<Utc>> for InstantInput {
    fn from(value: DateTime<Utc>) -> Self {
        InstantInput::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for InstantInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        InstantInput::DateTime(value.with_timezone(&Utc))
    }
}

impl From<i64> for InstantInput {
    fn from(value: i64) -> Self {
        InstantInput::Timestamp(value)
    }
}

impl From<&str> for InstantInput {
    fn from(value: &str) -> Self {
        InstantInput::Text(value.to_string())
    }
}

impl From<String> for InstantInput {
    fn from(value: String) -> Self {
        InstantInput::Text(value)
    }
}

/// Resolves input into a UTC instant, reading relative text against now.
///
/// # Examples
///
/// ```
/// use libago::instant::resolve_instant;
///
/// let from_int = resolve_instant(1_700_000_000_i64).unwrap();
/// let from_text = resolve_instant("2023-11-14 22:13:20").unwrap();
/// assert_eq!(from_int, from_text);
/// ```
pub fn resolve_instant(input: impl Into<InstantInput>) -> Result<DateTime<Utc>> {
    resolve_instant_at(input, Utc::now())
}

/// Resolves input into a UTC instant, reading relative text against `now`.
pub fn resolve_instant_at(
    input: impl Into<InstantInput>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    match input.into() {
        InstantInput::DateTime(value) => Ok(value),
        InstantInput::Timestamp(seconds) => {
            let value = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
                AgoError::parse(format!("Timestamp {seconds} is out of range"))
            })?;
            parse_instant_at(&value.format(TIMESTAMP_FORMAT).to_string(), now)
        }
        InstantInput::Text(text) => parse_instant_at(&text, now),
    }
}

/// Parses a textual instant.
///
/// Accepted forms, tried in order: `now`, a relative offset such as
/// `-3 days` or `+1 year 2 months`, RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM` and `YYYY-MM-DD`. Values without
/// an offset are taken as UTC.
pub fn parse_instant_at(text: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("now") {
        return Ok(now);
    }

    if let Some(value) = parse_relative(text, now)? {
        trace!(text, %value, "parsed relative instant");
        return Ok(value);
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Ok(value.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(value.and_utc());
        }
    }

    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(chrono::NaiveTime::MIN).and_utc()),
        Err(e) => Err(AgoError::parse_with_source(
            format!("Invalid date/time '{text}'"),
            e,
        )),
    }
}

/// Parses `[+|-]N unit [[+|-]N unit ...]`, each term signed on its own.
///
/// Returns `None` when `text` does not look like an offset at all.
fn parse_relative(text: &str, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let looks_relative = tokens.first().is_some_and(|t| {
        t.starts_with(['+', '-']) || (tokens.len() > 1 && t.parse::<i64>().is_ok())
    });
    if !looks_relative || tokens.len() % 2 != 0 {
        return Ok(None);
    }

    let mut value = now;
    for pair in tokens.chunks(2) {
        let amount: i64 = pair[0]
            .parse()
            .map_err(|e| AgoError::parse_with_source(format!("Invalid offset '{}'", pair[0]), e))?;
        let unit = pair[1].to_lowercase();
        let unit = unit.strip_suffix('s').unwrap_or(&unit);
        if !OFFSET_UNITS.contains(&unit) {
            return Err(AgoError::parse(format!("Unknown offset unit '{}'", pair[1])));
        }
        value = shift(value, amount, unit)
            .ok_or_else(|| AgoError::parse(format!("Offset '{text}' is out of range")))?;
    }
    Ok(Some(value))
}

fn shift(value: DateTime<Utc>, amount: i64, unit: &str) -> Option<DateTime<Utc>> {
    let months = |n: i64| {
        let n = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
        if amount < 0 {
            value.checked_sub_months(n)
        } else {
            value.checked_add_months(n)
        }
    };

    match unit {
        "year" => months(amount.checked_mul(12)?),
        "month" => months(amount),
        "week" => value.checked_add_signed(TimeDelta::try_weeks(amount)?),
        "day" => value.checked_add_signed(TimeDelta::try_days(amount)?),
        "hour" => value.checked_add_signed(TimeDelta::try_hours(amount)?),
        "minute" | "min" => value.checked_add_signed(TimeDelta::try_minutes(amount)?),
        "second" | "sec" => value.checked_add_signed(TimeDelta::try_seconds(amount)?),
        _ => None,
    }
}
