//! Translation capability used to render diff messages.
//!
//! The formatter only knows the [`Translator`] trait. Two adapters implement it
//! over a [`MessageCatalog`]:
//!
//! - [`ChoiceTranslator`] - messages hold `|`-separated plural forms with
//!   optional intervals (`{1} 1 day ago|]1,Inf[ %count% days ago`).
//! - [`PlainTranslator`] - messages embed a count-aware block
//!   (`{count, plural, one {# day ago} other {# days ago}}`).
//!
//! Both pick plural forms by the CLDR category of the count ([`PluralRule`]).
//! The hosting application picks one adapter when it builds the formatter.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod catalog;
mod choice;
mod plain;
mod plural;

pub use catalog::{BUILTIN_LOCALES, MessageCatalog, builtin_catalog};
pub use choice::ChoiceTranslator;
pub use plain::PlainTranslator;
pub use plural::PluralRule;

#[cfg(test)]
mod tests;

/// Renders catalog messages.
pub trait Translator: Send + Sync {
    /// Renders `key`, selecting the plural form for `count`.
    fn render_plural(&self, key: &str, count: u32, params: &Params, domain: &str)
    -> Result<String>;

    /// Renders `key` without plural selection.
    fn render(&self, key: &str, params: &Params, domain: &str) -> Result<String>;

    /// Locale of the primary catalog.
    fn locale(&self) -> &str;
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn render_plural(
        &self,
        key: &str,
        count: u32,
        params: &Params,
        domain: &str,
    ) -> Result<String> {
        (**self).render_plural(key, count, params, domain)
    }

    fn render(&self, key: &str, params: &Params, domain: &str) -> Result<String> {
        (**self).render(key, params, domain)
    }

    fn locale(&self) -> &str {
        (**self).locale()
    }
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn render_plural(
        &self,
        key: &str,
        count: u32,
        params: &Params,
        domain: &str,
    ) -> Result<String> {
        (**self).render_plural(key, count, params, domain)
    }

    fn render(&self, key: &str, params: &Params, domain: &str) -> Result<String> {
        (**self).render(key, params, domain)
    }

    fn locale(&self) -> &str {
        (**self).locale()
    }
}

/// Which translation contract to build.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorKind {
    /// Interval based plural choice.
    #[default]
    Choice,

    /// Plain lookup with an embedded plural block.
    Plain,
}

impl TranslatorKind {
    /// Wraps a catalog in the matching adapter.
    pub fn build(self, catalog: MessageCatalog, strict: bool) -> Box<dyn Translator> {
        match self {
            TranslatorKind::Choice => Box::new(ChoiceTranslator::new(catalog).strict(strict)),
            TranslatorKind::Plain => Box::new(PlainTranslator::new(catalog).strict(strict)),
        }
    }
}

impl std::str::FromStr for TranslatorKind {
    type Err = crate::error::AgoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "choice" => Ok(TranslatorKind::Choice),
            "plain" | "icu" => Ok(TranslatorKind::Plain),
            other => Err(crate::error::AgoError::parse(format!(
                "Unknown translator '{other}', expected 'choice' or 'plain'"
            ))),
        }
    }
}

/// Ordered placeholder substitutions, e.g. `%count%` -> `3`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

/// Placeholder bound to the diff count.
pub const COUNT_PARAM: &str = "%count%";

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters holding only the count.
    pub fn count(count: u32) -> Self {
        Self::new().with(COUNT_PARAM, count)
    }

    /// Adds or replaces a placeholder.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replaces every placeholder occurring in `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::translator::Params;
    ///
    /// let params = Params::count(3);
    /// assert_eq!(params.apply("%count% days ago"), "3 days ago");
    /// ```
    pub fn apply(&self, message: &str) -> String {
        self.iter()
            .fold(message.to_string(), |acc, (name, value)| {
                acc.replace(name, value)
            })
    }
}
