//! Calendar units reported in diff messages.
//!
//! Units are always walked from the most significant (`year`) to the least
//! significant (`second`). The order of [`TimeUnit::ALL`] and [`UNITS`] is that
//! walk order.

use crate::error::{AgoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// Short code and name of every unit, most significant first.
pub const UNITS: [(&str, &str); 6] = [
    ("y", "year"),
    ("m", "month"),
    ("d", "day"),
    ("h", "hour"),
    ("i", "minute"),
    ("s", "second"),
];

/// A calendar unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Every unit in descending significance.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// Returns the lowercase unit name used in message keys.
    pub fn name(self) -> &'static str {
        UNITS[self.index()].1
    }

    /// Returns the one-letter short code (`i` is minute, `m` is month).
    pub fn code(self) -> &'static str {
        UNITS[self.index()].0
    }

    /// Looks a unit up by its short code.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::from_code("i"), Some(TimeUnit::Minute));
    /// assert_eq!(TimeUnit::from_code("w"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        UNITS
            .iter()
            .position(|(c, _)| *c == code)
            .map(|i| Self::ALL[i])
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a unit name, ignoring case.
///
/// Only the six full names are accepted here; short codes go through
/// [`TimeUnit::from_code`] or [`parse_precision`].
impl FromStr for TimeUnit {
    type Err = AgoError;

    fn from_str(s: &str) -> Result<Self> {
        let unit = s.to_lowercase();
        UNITS
            .iter()
            .position(|(_, name)| *name == unit)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| AgoError::unsupported_unit(unit))
    }
}

/// Parses a single precision entry: a unit name or a short code, in any case.
pub fn parse_precision_item(item: &str) -> Result<TimeUnit> {
    let item = item.trim();
    match TimeUnit::from_code(&item.to_lowercase()) {
        Some(unit) => Ok(unit),
        None => item.parse(),
    }
}

/// Parses a comma separated precision list such as `"y,m"` or `"year, Day"`.
///
/// Duplicates are dropped and the result is sorted most significant first.
/// An empty or blank string yields an empty precision set.
///
/// # Examples
///
/// ```
/// use libago::TimeUnit;
/// use libago::unit::parse_precision;
///
/// let precision = parse_precision("d,year,y").unwrap();
/// assert_eq!(precision, vec![TimeUnit::Year, TimeUnit::Day]);
/// ```
pub fn parse_precision(list: &str) -> Result<Vec<TimeUnit>> {
    let items: Vec<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    normalize_precision(items)
}

/// Parses and normalizes an already split list of precision entries.
pub fn normalize_precision<I, S>(items: I) -> Result<Vec<TimeUnit>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut units = items
        .into_iter()
        .map(|item| parse_precision_item(item.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    units.sort();
    units.dedup();
    Ok(units)
}
