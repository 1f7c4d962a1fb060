//! Plural-choice translator.
//!
//! A message is a list of forms separated by `|`. A form may start with an
//! interval that decides when it applies:
//!
//! - `{1}` or `{0,2,4}` - an explicit set of counts
//! - `[2,Inf[`, `]1,10]`, `[-Inf,0]` - a range; `[` `]` on the inside include
//!   the bound, on the outside exclude it
//!
//! Forms with a matching interval win. Otherwise the forms without an interval
//! are indexed by the CLDR plural category of the count, in the order the
//! message locale uses them: `one|other` in English, `one|few|many` in
//! Russian. A count whose index has no form gets the last one.

use super::plural::{ChainRules, PluralRule};
use super::{MessageCatalog, Params, Translator};
use crate::error::Result;
use tracing::trace;

/// [`Translator`] selecting plural forms from interval-annotated messages.
///
/// # Examples
///
/// ```
/// use libago::translator::{ChoiceTranslator, MessageCatalog, Params, Translator};
///
/// let mut catalog = MessageCatalog::new("en");
/// catalog.add("time", "diff.ago.day", "{1} yesterday|]1,Inf[ %count% days ago");
/// let translator = ChoiceTranslator::new(catalog);
///
/// let one = translator.render_plural("diff.ago.day", 1, &Params::count(1), "time").unwrap();
/// let many = translator.render_plural("diff.ago.day", 4, &Params::count(4), "time").unwrap();
/// assert_eq!(one, "yesterday");
/// assert_eq!(many, "4 days ago");
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceTranslator {
    catalog: MessageCatalog,
    rules: ChainRules,
    strict: bool,
}

impl ChoiceTranslator {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            rules: ChainRules::for_catalog(&catalog),
            catalog,
            strict: false,
        }
    }

    /// Fail with `MissingMessage` instead of echoing unknown keys.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }
}

impl Translator for ChoiceTranslator {
    fn render_plural(
        &self,
        key: &str,
        count: u32,
        params: &Params,
        domain: &str,
    ) -> Result<String> {
        let (message, locale) = self.catalog.resolve(domain, key, self.strict)?;
        let form = choose(message, i64::from(count), self.rules.get(locale));
        trace!(key, count, locale, form, "selected plural form");
        Ok(params.apply(form))
    }

    fn render(&self, key: &str, params: &Params, domain: &str) -> Result<String> {
        let (message, _) = self.catalog.resolve(domain, key, self.strict)?;
        Ok(params.apply(message))
    }

    fn locale(&self) -> &str {
        self.catalog.locale()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Interval {
    Set(Vec<i64>),
    Range {
        low: Option<i64>,
        low_inclusive: bool,
        high: Option<i64>,
        high_inclusive: bool,
    },
}

impl Interval {
    fn contains(&self, count: i64) -> bool {
        match self {
            Interval::Set(values) => values.contains(&count),
            Interval::Range {
                low,
                low_inclusive,
                high,
                high_inclusive,
            } => {
                let above = match low {
                    None => true,
                    Some(low) if *low_inclusive => count >= *low,
                    Some(low) => count > *low,
                };
                let below = match high {
                    None => true,
                    Some(high) if *high_inclusive => count <= *high,
                    Some(high) => count < *high,
                };
                above && below
            }
        }
    }
}

/// Picks the form of `message` for `count`.
pub(crate) fn choose<'a>(message: &'a str, count: i64, rule: &PluralRule) -> &'a str {
    let mut standard = Vec::new();
    let mut last = message.trim();

    for part in message.split('|') {
        match parse_interval(part) {
            Some((interval, text)) => {
                if interval.contains(count) {
                    return text;
                }
                last = text;
            }
            None => {
                let text = part.trim();
                standard.push(text);
                last = text;
            }
        }
    }

    match standard.as_slice() {
        [] => last,
        [only] => *only,
        forms => forms
            .get(rule.form_index(count))
            .or(forms.last())
            .copied()
            .unwrap_or(last),
    }
}

fn parse_interval(part: &str) -> Option<(Interval, &str)> {
    let part = part.trim_start();
    let opening = part.chars().next()?;

    match opening {
        '{' => {
            let end = part.find('}')?;
            let values = part[1..end]
                .split(',')
                .map(|v| v.trim().parse::<i64>().ok())
                .collect::<Option<Vec<_>>>()?;
            Some((Interval::Set(values), part[end + 1..].trim()))
        }
        '[' | ']' => {
            let comma = part.find(',')?;
            let close = comma + part[comma..].find(|c: char| c == ']' || c == '[')?;
            let low = parse_bound(&part[1..comma])?;
            let high = parse_bound(&part[comma + 1..close])?;
            let interval = Interval::Range {
                low,
                low_inclusive: opening == '[',
                high,
                high_inclusive: part[close..].starts_with(']'),
            };
            Some((interval, part[close + 1..].trim()))
        }
        _ => None,
    }
}

/// `Inf`, `+Inf` and `-Inf` are unbounded; anything else must be an integer.
fn parse_bound(bound: &str) -> Option<Option<i64>> {
    match bound.trim() {
        "Inf" | "+Inf" | "-Inf" => Some(None),
        value => value.parse().ok().map(Some),
    }
}

#[cfg(test)]
#[path = "choice_tests.rs"]
mod tests;
