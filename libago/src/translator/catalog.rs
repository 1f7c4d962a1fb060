//! In-memory message catalogs.
//!
//! Catalog files are YAML mappings. Nested keys are flattened with dots, so
//!
//! ```yaml
//! diff:
//!   ago:
//!     day: "{1} 1 day ago|]1,Inf[ %count% days ago"
//! ```
//!
//! provides the key `diff.ago.day`.

use super::TranslatorKind;
use crate::error::{AgoError, Result};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

const EN_CHOICE: &str = include_str!("../../resources/translations/time.en.yaml");
const FR_CHOICE: &str = include_str!("../../resources/translations/time.fr.yaml");
const EN_PLAIN: &str = include_str!("../../resources/translations/time+intl-icu.en.yaml");
const FR_PLAIN: &str = include_str!("../../resources/translations/time+intl-icu.fr.yaml");

/// Locales shipped with the crate.
pub const BUILTIN_LOCALES: [&str; 2] = ["en", "fr"];

/// Messages for one locale, grouped by domain, with an optional fallback chain.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, HashMap<String, String>>,
    fallback: Option<Box<MessageCatalog>>,
}

impl MessageCatalog {
    /// Creates an empty catalog.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
            fallback: None,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Adds or replaces a single message.
    pub fn add(&mut self, domain: &str, key: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(domain.to_string())
            .or_default()
            .insert(key.into(), message.into());
    }

    /// Sets the catalog consulted when a key is missing here.
    ///
    /// The fallback keeps its own fallback, so chains are possible.
    pub fn with_fallback(mut self, fallback: MessageCatalog) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn fallback(&self) -> Option<&MessageCatalog> {
        self.fallback.as_deref()
    }

    /// Number of messages this catalog holds for `domain`, fallbacks excluded.
    pub fn len(&self, domain: &str) -> usize {
        self.messages.get(domain).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.values().all(HashMap::is_empty)
    }

    /// Looks a message up here, then along the fallback chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::translator::MessageCatalog;
    ///
    /// let mut en = MessageCatalog::new("en");
    /// en.add("time", "diff.empty", "now");
    /// let fr = MessageCatalog::new("fr").with_fallback(en);
    ///
    /// assert_eq!(fr.get("time", "diff.empty"), Some("now"));
    /// assert_eq!(fr.get("time", "diff.ago.year"), None);
    /// ```
    pub fn get(&self, domain: &str, key: &str) -> Option<&str> {
        self.lookup(domain, key).map(|(message, _)| message)
    }

    /// Like [`get`](Self::get), also returning the locale of the catalog in
    /// the chain that holds the message.
    pub fn lookup(&self, domain: &str, key: &str) -> Option<(&str, &str)> {
        self.messages
            .get(domain)
            .and_then(|messages| messages.get(key))
            .map(|message| (message.as_str(), self.locale.as_str()))
            .or_else(|| self.fallback().and_then(|f| f.lookup(domain, key)))
    }

    pub fn contains(&self, domain: &str, key: &str) -> bool {
        self.get(domain, key).is_some()
    }

    /// Loads messages for `domain` from a YAML document.
    ///
    /// Returns the number of messages added.
    pub fn load_yaml_str(&mut self, domain: &str, yaml: &str) -> Result<usize> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| AgoError::catalog_with_source("Invalid catalog YAML", e))?;

        let mut entries = Vec::new();
        flatten("", &value, &mut entries)?;

        let count = entries.len();
        for (key, message) in entries {
            self.add(domain, key, message);
        }
        debug!(locale = %self.locale, domain, count, "loaded catalog messages");
        Ok(count)
    }

    /// Loads messages for `domain` from a YAML file.
    pub fn load_yaml_file(&mut self, domain: &str, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AgoError::catalog_with_source(
                format!("Failed to read catalog {}", path.display()),
                e,
            )
        })?;
        self.load_yaml_str(domain, &content)
    }

    /// Returns the message for `key` with the locale it was found in, or the
    /// key itself when lenient.
    pub(crate) fn resolve<'a>(
        &'a self,
        domain: &str,
        key: &'a str,
        strict: bool,
    ) -> Result<(&'a str, &'a str)> {
        match self.lookup(domain, key) {
            Some(found) => Ok(found),
            None if strict => Err(AgoError::missing_message(domain, key, self.locale.as_str())),
            None => {
                warn!(locale = %self.locale, domain, key, "message not found, using key");
                Ok((key, self.locale.as_str()))
            }
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                let key = scalar_to_string(key).ok_or_else(|| {
                    AgoError::catalog(format!("Unsupported catalog key under '{prefix}'"))
                })?;
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out)?;
            }
            Ok(())
        }
        Value::Tagged(tagged) => flatten(prefix, &tagged.value, out),
        Value::Sequence(_) => Err(AgoError::catalog(format!(
            "Catalog entry '{prefix}' must be a message, not a list"
        ))),
        scalar => {
            if prefix.is_empty() {
                return Err(AgoError::catalog("Catalog root must be a mapping"));
            }
            let message = scalar_to_string(scalar).unwrap_or_default();
            out.push((prefix.to_string(), message));
            Ok(())
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn builtin_source(kind: TranslatorKind, language: &str) -> Option<&'static str> {
    match (kind, language) {
        (TranslatorKind::Choice, "en") => Some(EN_CHOICE),
        (TranslatorKind::Choice, "fr") => Some(FR_CHOICE),
        (TranslatorKind::Plain, "en") => Some(EN_PLAIN),
        (TranslatorKind::Plain, "fr") => Some(FR_PLAIN),
        _ => None,
    }
}

/// Loads the shipped `time` catalog for `locale`, if there is one.
///
/// Regional locales fall back to their language (`fr_CA` uses `fr`). The
/// returned catalog is tagged with the requested locale.
///
/// # Examples
///
/// ```
/// use libago::translator::{TranslatorKind, builtin_catalog};
///
/// let catalog = builtin_catalog(TranslatorKind::Choice, "en_GB").unwrap().unwrap();
/// assert_eq!(catalog.locale(), "en_GB");
/// assert!(catalog.contains("time", "diff.ago.year"));
/// assert!(builtin_catalog(TranslatorKind::Choice, "tlh").unwrap().is_none());
/// ```
pub fn builtin_catalog(kind: TranslatorKind, locale: &str) -> Result<Option<MessageCatalog>> {
    let normalized = locale.to_lowercase().replace('-', "_");
    let language = normalized.split('_').next().unwrap_or_default();

    let Some(source) = builtin_source(kind, &normalized).or_else(|| builtin_source(kind, language))
    else {
        return Ok(None);
    };

    let mut catalog = MessageCatalog::new(locale);
    catalog.load_yaml_str(crate::format::DOMAIN, source)?;
    Ok(Some(catalog))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
