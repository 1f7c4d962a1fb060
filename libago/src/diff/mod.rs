//! Calendar differences between two instants.
//!
//! A [`CalendarDiff`] is the wall-clock decomposition of the time between two
//! instants into years, months, days, hours, minutes and seconds, plus the
//! direction of the difference. [`ChronoDiffer`] produces it with `chrono`.

use crate::unit::TimeUnit;
use chrono::{DateTime, Datelike, Months, NaiveDateTime, Offset, TimeZone, Timelike};
use serde::Serialize;
use std::fmt;


/// Direction of a diff, as spelled in message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The reference instant lies in the past: "2 days ago".
    Ago,
    /// The reference instant lies in the future: "in 2 days".
    In,
}

impl Direction {
    /// Maps an invert flag onto a direction.
    pub fn from_invert(invert: bool) -> Self {
        if invert { Direction::Ago } else { Direction::In }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ago => "ago",
            Direction::In => "in",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-unit counts of a calendar difference.
///
/// `invert` is `true` when `from` precedes `to`, so the message reads
/// "X units ago".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CalendarDiff {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub invert: bool,
}

impl CalendarDiff {
    /// Builds a diff from counts ordered year to second.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::{CalendarDiff, TimeUnit};
    ///
    /// let diff = CalendarDiff::from_counts([3, 2, 0, 0, 0, 0], true);
    /// assert_eq!(diff.get(TimeUnit::Month), 2);
    /// assert!(!diff.is_empty());
    /// ```
    pub fn from_counts(counts: [u32; 6], invert: bool) -> Self {
        let [years, months, days, hours, minutes, seconds] = counts;
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            invert,
        }
    }

    /// Returns the count for a unit.
    pub fn get(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Year => self.years,
            TimeUnit::Month => self.months,
            TimeUnit::Day => self.days,
            TimeUnit::Hour => self.hours,
            TimeUnit::Minute => self.minutes,
            TimeUnit::Second => self.seconds,
        }
    }

    /// Returns the counts ordered year to second.
    pub fn counts(&self) -> [u32; 6] {
        TimeUnit::ALL.map(|unit| self.get(unit))
    }

    /// True when every count is zero.
    pub fn is_empty(&self) -> bool {
        self.counts().iter().all(|count| *count == 0)
    }

    pub fn direction(&self) -> Direction {
        Direction::from_invert(self.invert)
    }
}

/// Capability that decomposes the time between two instants.
pub trait CalendarDiffer {
    /// Computes the difference of `to` relative to `from`.
    fn diff<Tz: TimeZone>(&self, from: &DateTime<Tz>, to: &DateTime<Tz>) -> CalendarDiff;
}

/// Default [`CalendarDiffer`] built on `chrono`.
///
/// Both instants are read as wall-clock times in the offset of `from`. Whole
/// months are added to the earlier instant while it stays at or before the
/// later one, clamping the day to the end of shorter months, and the rest is
/// split into days, hours, minutes and seconds. Jan 31 to Mar 1 is one month
/// (to Feb 28) and one day. Sub-second precision is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDiffer;

impl CalendarDiffer for ChronoDiffer {
    fn diff<Tz: TimeZone>(&self, from: &DateTime<Tz>, to: &DateTime<Tz>) -> CalendarDiff {
        let offset = from.offset().fix();
        let from_local = from.with_timezone(&offset).naive_local();
        let to_local = to.with_timezone(&offset).naive_local();

        let invert = from < to;
        let (earlier, later) = if invert {
            (from_local, to_local)
        } else {
            (to_local, from_local)
        };

        let counts = decompose(earlier, later);
        CalendarDiff::from_counts(counts, invert)
    }
}

fn decompose(earlier: NaiveDateTime, later: NaiveDateTime) -> [u32; 6] {
    let earlier = earlier.with_nanosecond(0).unwrap_or(earlier);
    let later = later.with_nanosecond(0).unwrap_or(later);

    let mut months = (i64::from(later.year()) - i64::from(earlier.year())) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    let mut anchor = add_months(earlier, months);
    while months > 0 && anchor.is_none_or(|at| at > later) {
        months -= 1;
        anchor = add_months(earlier, months);
    }
    let months = months.max(0);

    let rest = (later - anchor.unwrap_or(earlier)).num_seconds().max(0);
    let days = rest / SECONDS_PER_DAY;
    let hours = rest % SECONDS_PER_DAY / 3600;
    let minutes = rest % 3600 / 60;
    let seconds = rest % 60;

    [months / 12, months % 12, days, hours, minutes, seconds]
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
}

const SECONDS_PER_DAY: i64 = 86_400;

/// Adds whole months, clamping the day to the end of shorter months.
fn add_months(at: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    u32::try_from(months)
        .ok()
        .and_then(|months| at.checked_add_months(Months::new(months)))
}
