//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::format::ColorChoice;
use libago::translator::builtin_catalog;
use libago::{Ago, Config, TranslatorKind};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How chatty the CLI is, from the number of `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    #[default]
    Normal,
    /// -v
    Verbose,
    /// -vv
    VeryVerbose,
    /// -vvv and more
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Default log filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::VeryVerbose => "debug",
            VerbosityLevel::Trace => "trace",
        }
    }
}

/// Overrides given as CLI flags
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub locale: Option<String>,
    pub translator: Option<TranslatorKind>,
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    pub color: ColorChoice,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(color: ColorChoice, overrides: CliOverrides) -> Self {
        let config_path = get_config_path();
        let env_locale = env::var("AGO_LOCALE").ok();
        Self::resolve(&config_path, env_locale, color, overrides)
    }

    /// Resolve the context from explicit inputs
    pub fn resolve(
        config_path: &Path,
        env_locale: Option<String>,
        color: ColorChoice,
        overrides: CliOverrides,
    ) -> Self {
        // 1. Start with defaults
        let mut config = Config::default();

        // 2. Load and merge config file if it exists
        if config_path.exists() {
            match Config::load(Some(config_path)) {
                Ok(file_config) => {
                    debug!(path = %config_path.display(), "loaded config file");
                    config = file_config;
                }
                Err(e) => {
                    warn!(path = %config_path.display(), error = %e, "ignoring invalid config file");
                }
            }
        }

        // 3. Apply environment variable overrides
        if let Some(locale) = env_locale.filter(|l| !l.trim().is_empty()) {
            config.locale = locale;
        }

        // 4. Apply CLI flag overrides (highest priority)
        if let Some(locale) = overrides.locale {
            config.locale = locale;
        }
        if let Some(kind) = overrides.translator {
            config.translator = kind;
        }

        Self { config, color }
    }

    /// Warning to show when the locale has neither shipped nor configured messages
    pub fn locale_warning(&self) -> Option<String> {
        let locale = &self.config.locale;
        let shipped = matches!(
            builtin_catalog(self.config.translator, locale),
            Ok(Some(_))
        );
        if shipped || self.config.catalogs_for(locale).next().is_some() {
            return None;
        }
        Some(format!(
            "No messages for locale '{}', falling back to '{}'",
            locale, self.config.fallback_locale
        ))
    }

    /// Build the formatter for the resolved configuration
    pub fn ago(&self) -> Result<Ago, String> {
        Ago::from_config(&self.config).map_err(|e| e.to_string())
    }
}

/// Get the config file path, respecting AGO_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("AGO_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/ago/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("ago").join("config.yaml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.yaml")
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
