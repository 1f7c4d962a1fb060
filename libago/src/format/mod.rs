//! Human-readable diff formatting.
//!
//! This module turns the difference between two instants into a translated
//! message such as "2 days ago" or "in 3 months".
//!
//! Units are walked from year down to second. Without a precision set only
//! the most significant non-zero unit is reported. With a precision set every
//! selected non-zero unit is reported, separated by a space; the first one
//! carries the direction (`diff.ago.year`), the following ones use the bare
//! unit key (`month`). When nothing qualifies the `diff.empty` message is
//! returned.

use crate::diff::{CalendarDiff, CalendarDiffer, ChronoDiffer, Direction};
use crate::error::{AgoError, Result};
use crate::translator::{Params, Translator};
use crate::unit::TimeUnit;
use chrono::{DateTime, TimeZone};
use tracing::debug;


/// Message domain holding every diff message.
pub const DOMAIN: &str = "time";

/// Key of the message used when there is nothing to report.
pub const EMPTY_KEY: &str = "diff.empty";

/// Builds the message key for a unit.
///
/// The first reported unit gets the directional key, the others the bare
/// unit name.
///
/// # Examples
///
/// ```
/// use libago::TimeUnit;
/// use libago::format::message_key;
///
/// assert_eq!(message_key(true, TimeUnit::Year, true), "diff.ago.year");
/// assert_eq!(message_key(false, TimeUnit::Day, true), "diff.in.day");
/// assert_eq!(message_key(true, TimeUnit::Month, false), "month");
/// ```
pub fn message_key(invert: bool, unit: TimeUnit, is_first: bool) -> String {
    if is_first {
        format!("diff.{}.{}", Direction::from_invert(invert), unit)
    } else {
        unit.name().to_string()
    }
}

/// Formats calendar differences through a [`Translator`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libago::format::DiffFormatter;
/// use libago::translator::{ChoiceTranslator, TranslatorKind, builtin_catalog};
///
/// let catalog = builtin_catalog(TranslatorKind::Choice, "en").unwrap().unwrap();
/// let formatter = DiffFormatter::new(ChoiceTranslator::new(catalog));
///
/// let from = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
/// let to = Utc.with_ymd_and_hms(2024, 3, 3, 9, 0, 0).unwrap();
/// assert_eq!(formatter.format_diff(&from, &to, &[]).unwrap(), "2 days ago");
/// assert_eq!(formatter.format_diff(&to, &from, &[]).unwrap(), "in 2 days");
/// ```
#[derive(Debug, Clone)]
pub struct DiffFormatter<T, D = ChronoDiffer> {
    translator: T,
    differ: D,
    domain: String,
}

impl<T: Translator> DiffFormatter<T> {
    /// Creates a formatter using the `chrono` differ.
    pub fn new(translator: T) -> Self {
        Self::with_differ(translator, ChronoDiffer)
    }
}

impl<T: Translator, D: CalendarDiffer> DiffFormatter<T, D> {
    /// Creates a formatter with a custom calendar differ.
    pub fn with_differ(translator: T, differ: D) -> Self {
        Self {
            translator,
            differ,
            domain: DOMAIN.to_string(),
        }
    }

    /// Uses another message domain than `time`.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn differ(&self) -> &D {
        &self.differ
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns a formatted diff for the given instants.
    ///
    /// An empty `precision` reports the single most significant unit.
    pub fn format_diff<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        to: &DateTime<Tz>,
        precision: &[TimeUnit],
    ) -> Result<String> {
        let diff = self.differ.diff(from, to);
        debug!(
            counts = ?diff.counts(),
            invert = diff.invert,
            "computed calendar diff"
        );
        self.format_calendar_diff(&diff, precision)
    }

    /// Formats an already computed diff.
    pub fn format_calendar_diff(
        &self,
        diff: &CalendarDiff,
        precision: &[TimeUnit],
    ) -> Result<String> {
        let mut messages = Vec::new();

        for unit in TimeUnit::ALL {
            let count = diff.get(unit);
            if count == 0 {
                continue;
            }

            if precision.is_empty() {
                debug!(%unit, count, "reporting most significant unit");
                return self.render_diff_message(count, diff.invert, unit, true);
            }

            if precision.contains(&unit) {
                let is_first = messages.is_empty();
                messages.push(self.render_diff_message(count, diff.invert, unit, is_first)?);
            }
        }

        if messages.is_empty() {
            return self.get_empty_diff_message();
        }

        Ok(messages.join(" "))
    }

    /// Returns the diff message for the specified count and unit.
    ///
    /// The unit must be one of year, month, day, hour, minute or second, in
    /// any case.
    ///
    /// # Errors
    ///
    /// [`AgoError::ZeroCount`] when `count` is zero and
    /// [`AgoError::UnsupportedUnit`] for any other unit name.
    pub fn get_diff_message(&self, count: u32, invert: bool, unit: &str) -> Result<String> {
        if count == 0 {
            return Err(AgoError::ZeroCount);
        }
        let unit: TimeUnit = unit.parse()?;
        self.render_diff_message(count, invert, unit, true)
    }

    /// Returns the message for an empty diff.
    pub fn get_empty_diff_message(&self) -> Result<String> {
        self.translator.render(EMPTY_KEY, &Params::new(), &self.domain)
    }

    fn render_diff_message(
        &self,
        count: u32,
        invert: bool,
        unit: TimeUnit,
        is_first: bool,
    ) -> Result<String> {
        let key = message_key(invert, unit, is_first);
        debug!(key = %key, count, "rendering diff message");
        self.translator
            .render_plural(&key, count, &Params::count(count), &self.domain)
    }
}
