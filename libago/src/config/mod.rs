//! Library configuration.
//!
//! This module manages formatter configuration with sensible defaults,
//! loading from a YAML file merged over the serialized defaults.

use crate::error::{AgoError, Result};
use crate::translator::TranslatorKind;
use crate::unit::{TimeUnit, normalize_precision};
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Locale of the primary catalog.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Locale consulted when a message is missing from the primary one.
    #[serde(default = "default_locale")]
    pub fallback_locale: String,

    #[serde(default)]
    pub translator: TranslatorKind,

    /// Fail on missing messages instead of echoing the key.
    #[serde(default)]
    pub strict: bool,

    #[serde(default = "default_domain")]
    pub domain: String,

    /// Units to report, as names or short codes. Empty reports one unit.
    #[serde(default)]
    pub precision: Vec<String>,

    /// Extra catalog files loaded on top of the shipped ones.
    #[serde(default)]
    pub catalogs: Vec<CatalogSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fallback_locale: default_locale(),
            translator: TranslatorKind::default(),
            strict: false,
            domain: default_domain(),
            precision: Vec::new(),
            catalogs: Vec::new(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_domain() -> String {
    crate::format::DOMAIN.to_string()
}

/// A catalog file for one locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSource {
    pub locale: String,
    pub path: PathBuf,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::Config;
    /// use libago::translator::TranslatorKind;
    ///
    /// let config = Config::from_yaml_str("locale: fr\ntranslator: plain").unwrap();
    /// assert_eq!(config.locale, "fr");
    /// assert_eq!(config.translator, TranslatorKind::Plain);
    /// assert_eq!(config.fallback_locale, "en");
    /// ```
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            // Add default values
            .add_source(ConfigRs::try_from(&Config::default())?)
            // Merge with YAML string
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// Without a path the defaults are returned. A given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder()
            // Add default values
            .add_source(ConfigRs::try_from(&Config::default())?);

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        Self::from_builder(builder, path)
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                AgoError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path.map(|p| p.display().to_string()),
                    e,
                )
            })
    }

    /// Parses the configured precision into units.
    pub fn precision_units(&self) -> Result<Vec<TimeUnit>> {
        normalize_precision(&self.precision).map_err(|e| {
            AgoError::config_with_source("Invalid precision".to_string(), None, e)
        })
    }

    /// Catalog files registered for `locale`.
    pub fn catalogs_for<'a>(&'a self, locale: &'a str) -> impl Iterator<Item = &'a Path> + 'a {
        self.catalogs
            .iter()
            .filter(move |source| source.locale.eq_ignore_ascii_case(locale))
            .map(|source| source.path.as_path())
    }
}
