//! CLDR plural categories for catalog locales.
//!
//! Both translators ask the locale of the catalog that holds a message which
//! plural category a count falls into (`one`, `few`, `many`, ...). Locales
//! unknown to the CLDR tables fall back to their language, then to English.

use super::MessageCatalog;
use intl_pluralrules::{PluralCategory, PluralRuleType, PluralRules};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Categories in CLDR order.
const CATEGORIES: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

/// Large counts sampled, on top of 0..=200, to find the categories an integer
/// count can reach.
const LARGE_COUNTS: [u64; 4] = [1_000, 10_000, 100_000, 1_000_000];

/// Cardinal plural rule of one locale.
#[derive(Clone)]
pub struct PluralRule {
    locale: String,
    rules: Option<Arc<PluralRules>>,
    categories: Vec<&'static str>,
}

impl PluralRule {
    /// Builds the rule for `locale` (`ru`, `fr_CA`, `pt-PT`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::translator::PluralRule;
    ///
    /// let ru = PluralRule::for_locale("ru");
    /// assert_eq!(ru.category(21), "one");
    /// assert_eq!(ru.category(3), "few");
    /// assert_eq!(ru.category(5), "many");
    ///
    /// assert_eq!(PluralRule::for_locale("en").category(5), "other");
    /// ```
    pub fn for_locale(locale: &str) -> Self {
        let rules = create_rules(locale).map(Arc::new);
        let mut reached: Vec<&'static str> = (0..=200u64)
            .chain(LARGE_COUNTS)
            .map(|count| select(rules.as_deref(), count))
            .collect();
        reached.sort_by_key(|name| CATEGORIES.iter().position(|c| c == name));
        reached.dedup();

        Self {
            locale: locale.to_string(),
            rules,
            categories: reached,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Category of `count`. Negative counts use their absolute value.
    pub fn category(&self, count: i64) -> &'static str {
        select(self.rules.as_deref(), count.unsigned_abs())
    }

    /// Categories an integer count can fall into, in CLDR order.
    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    /// Position of the category of `count` among [`categories`](Self::categories).
    ///
    /// Messages listing one unprefixed form per category are indexed with it.
    pub fn form_index(&self, count: i64) -> usize {
        let category = self.category(count);
        self.categories
            .iter()
            .position(|c| *c == category)
            .unwrap_or(self.categories.len())
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluralRule")
            .field("locale", &self.locale)
            .field("categories", &self.categories)
            .finish()
    }
}

/// Plural rules for every locale of a catalog's fallback chain.
#[derive(Debug, Clone)]
pub(crate) struct ChainRules {
    primary: PluralRule,
    fallbacks: Vec<PluralRule>,
}

impl ChainRules {
    pub(crate) fn for_catalog(catalog: &MessageCatalog) -> Self {
        let primary = PluralRule::for_locale(catalog.locale());
        let mut fallbacks: Vec<PluralRule> = Vec::new();
        let mut next = catalog.fallback();
        while let Some(fallback) = next {
            let locale = fallback.locale();
            if locale != primary.locale() && fallbacks.iter().all(|r| r.locale() != locale) {
                fallbacks.push(PluralRule::for_locale(locale));
            }
            next = fallback.fallback();
        }
        Self { primary, fallbacks }
    }

    /// Rule of the catalog locale a message was found in.
    pub(crate) fn get(&self, locale: &str) -> &PluralRule {
        self.fallbacks
            .iter()
            .find(|rule| rule.locale() == locale)
            .unwrap_or(&self.primary)
    }
}

fn create_rules(locale: &str) -> Option<PluralRules> {
    let normalized = locale.replace('_', "-");
    let language = normalized.split('-').next().unwrap_or_default();

    for candidate in [normalized.as_str(), language, "en"] {
        let Ok(langid) = candidate.parse::<LanguageIdentifier>() else {
            continue;
        };
        if let Ok(rules) = PluralRules::create(langid, PluralRuleType::CARDINAL) {
            if candidate != normalized {
                debug!(locale, rules = candidate, "no plural rules for locale, using fallback");
            }
            return Some(rules);
        }
    }
    None
}

fn select(rules: Option<&PluralRules>, count: u64) -> &'static str {
    match rules.map(|rules| rules.select(count)) {
        Some(Ok(category)) => category_name(category),
        Some(Err(_)) => "other",
        None if count == 1 => "one",
        None => "other",
    }
}

fn category_name(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::ZERO => "zero",
        PluralCategory::ONE => "one",
        PluralCategory::TWO => "two",
        PluralCategory::FEW => "few",
        PluralCategory::MANY => "many",
        PluralCategory::OTHER => "other",
    }
}

#[cfg(test)]
#[path = "plural_tests.rs"]
mod tests;
