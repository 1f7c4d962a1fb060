//! High-level API for the Ago library.
//!
//! This module provides a simplified interface for formatting time
//! differences. It's the recommended entry point for most users.
//!
//! # Examples
//!
//! ```
//! use libago::Ago;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ago = Ago::new()?;
//!
//!     let message = ago.diff("2024-01-01 00:00:00", "2024-01-03 00:00:00")?;
//!     assert_eq!(message, "2 days ago");
//!
//!     let message = ago.diff("2024-04-01", "2024-01-01")?;
//!     assert_eq!(message, "in 3 months");
//!
//!     Ok(())
//! }
//! ```

use crate::config::{CatalogSource, Config};
use crate::error::Result;
use crate::format::DiffFormatter;
use crate::instant::{InstantInput, resolve_instant_at};
use crate::translator::{MessageCatalog, Translator, TranslatorKind, builtin_catalog};
use crate::unit::TimeUnit;
use chrono::Utc;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

#[cfg(test)]
#[path = "ago_tests.rs"]
mod tests;

/// High-level interface for formatting time differences.
///
/// `Ago` wires a [`DiffFormatter`] to the translator described by a
/// [`Config`] and accepts loosely typed instants (date-times, Unix
/// timestamps, strings).
///
/// # Examples
///
/// ## Multi-unit output
///
/// ```
/// use libago::{Ago, TimeUnit};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ago = Ago::new()?;
///     let message = ago.diff_with_precision(
///         "2020-01-01 00:00:00",
///         "2023-03-01 00:00:00",
///         &[TimeUnit::Year, TimeUnit::Month],
///     )?;
///     assert_eq!(message, "3 years ago 2 months");
///     Ok(())
/// }
/// ```
///
/// ## Another locale and translator
///
/// ```
/// use libago::Ago;
/// use libago::translator::TranslatorKind;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ago = Ago::builder()
///         .locale("fr")
///         .translator(TranslatorKind::Plain)
///         .build()?;
///     assert_eq!(ago.message(2, true, "hour")?, "il y a 2 heures");
///     Ok(())
/// }
/// ```
pub struct Ago {
    formatter: DiffFormatter<Box<dyn Translator>>,
    precision: Vec<TimeUnit>,
}

impl fmt::Debug for Ago {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ago")
            .field("locale", &self.locale())
            .field("precision", &self.precision)
            .finish_non_exhaustive()
    }
}

impl Ago {
    /// Creates an `Ago` with the default configuration (English, choice
    /// translator, single-unit output).
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> AgoBuilder {
        AgoBuilder::new()
    }

    /// Creates an `Ago` from a resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let translator = build_translator(config)?;
        let precision = config.precision_units()?;
        let formatter = DiffFormatter::new(translator).with_domain(config.domain.clone());

        Ok(Self {
            formatter,
            precision,
        })
    }

    /// Formats the difference between `from` and `to` with the configured
    /// precision.
    pub fn diff(
        &self,
        from: impl Into<InstantInput>,
        to: impl Into<InstantInput>,
    ) -> Result<String> {
        self.diff_with_precision(from, to, &self.precision)
    }

    /// Formats the difference between `from` and `to` reporting `precision`.
    pub fn diff_with_precision(
        &self,
        from: impl Into<InstantInput>,
        to: impl Into<InstantInput>,
        precision: &[TimeUnit],
    ) -> Result<String> {
        let now = Utc::now();
        let from = resolve_instant_at(from, now)?;
        let to = resolve_instant_at(to, now)?;
        self.formatter.format_diff(&from, &to, precision)
    }

    /// Formats the difference between `from` and now.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::Ago;
    ///
    /// let ago = Ago::new().unwrap();
    /// assert_eq!(ago.ago("-3 days").unwrap(), "3 days ago");
    /// assert_eq!(ago.ago("now").unwrap(), "now");
    /// ```
    pub fn ago(&self, from: impl Into<InstantInput>) -> Result<String> {
        self.diff(from, "now")
    }

    /// Renders a single unit message. See [`DiffFormatter::get_diff_message`].
    pub fn message(&self, count: u32, invert: bool, unit: &str) -> Result<String> {
        self.formatter.get_diff_message(count, invert, unit)
    }

    /// Renders the empty diff message.
    pub fn empty(&self) -> Result<String> {
        self.formatter.get_empty_diff_message()
    }

    pub fn locale(&self) -> &str {
        self.formatter.translator().locale()
    }

    /// Configured default precision.
    pub fn precision(&self) -> &[TimeUnit] {
        &self.precision
    }

    pub fn formatter(&self) -> &DiffFormatter<Box<dyn Translator>> {
        &self.formatter
    }
}

/// Builds the translator described by `config`.
///
/// The primary catalog holds the shipped messages for `config.locale` plus
/// its configured files. Unless the fallback locale is the same, a fallback
/// catalog is assembled the same way and chained behind it.
pub fn build_translator(config: &Config) -> Result<Box<dyn Translator>> {
    let mut catalog = load_catalog(config, &config.locale)?;

    if !config.fallback_locale.eq_ignore_ascii_case(&config.locale) {
        let fallback = load_catalog(config, &config.fallback_locale)?;
        catalog = catalog.with_fallback(fallback);
    }

    debug!(
        locale = %config.locale,
        fallback = %config.fallback_locale,
        translator = ?config.translator,
        "built translator"
    );
    Ok(config.translator.build(catalog, config.strict))
}

fn load_catalog(config: &Config, locale: &str) -> Result<MessageCatalog> {
    let mut catalog = match builtin_catalog(config.translator, locale)? {
        Some(builtin) if config.domain == crate::format::DOMAIN => builtin,
        _ => MessageCatalog::new(locale),
    };
    for path in config.catalogs_for(locale) {
        catalog.load_yaml_file(&config.domain, path)?;
    }
    Ok(catalog)
}

/// Builder for creating an `Ago` instance with custom configuration.
///
/// Values set on the builder override the ones of the configuration file or
/// [`Config`] it starts from.
///
/// # Examples
///
/// ```no_run
/// use libago::{Ago, TimeUnit};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ago = Ago::builder()
///         .with_config_file("./ago.yaml")
///         .precision(vec![TimeUnit::Day, TimeUnit::Hour])
///         .build()?;
///     println!("{}", ago.ago(1_700_000_000_i64)?);
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct AgoBuilder {
    config: Option<Config>,
    config_path: Option<PathBuf>,
    locale: Option<String>,
    fallback_locale: Option<String>,
    translator: Option<TranslatorKind>,
    strict: Option<bool>,
    precision: Option<Vec<TimeUnit>>,
    catalogs: Vec<CatalogSource>,
}

impl AgoBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file when building.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Set configuration directly.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    pub fn translator(mut self, kind: TranslatorKind) -> Self {
        self.translator = Some(kind);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Default units reported by [`Ago::diff`].
    pub fn precision(mut self, precision: Vec<TimeUnit>) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Add a catalog file for `locale`.
    pub fn catalog(mut self, locale: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.catalogs.push(CatalogSource {
            locale: locale.into(),
            path: path.into(),
        });
        self
    }

    /// Resolve the configuration the builder describes.
    pub fn resolve_config(self) -> Result<Config> {
        let mut config = match (self.config, &self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => Config::load(Some(path.as_path()))?,
            (None, None) => Config::default(),
        };

        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(locale) = self.fallback_locale {
            config.fallback_locale = locale;
        }
        if let Some(kind) = self.translator {
            config.translator = kind;
        }
        if let Some(strict) = self.strict {
            config.strict = strict;
        }
        if let Some(precision) = self.precision {
            config.precision = precision.iter().map(|u| u.name().to_string()).collect();
        }
        config.catalogs.extend(self.catalogs);

        Ok(config)
    }

    /// Build the `Ago` instance.
    pub fn build(self) -> Result<Ago> {
        let config = self.resolve_config()?;
        Ago::from_config(&config)
    }
}
