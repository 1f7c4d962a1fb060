//! Error types for Ago
//!
//! This module provides the error taxonomy for all Ago operations.
//! Caller mistakes (zero counts, unknown units) are kept apart from failures
//! raised by the collaborators (instant parsing, catalogs, configuration).

use thiserror::Error;


/// Main error type for Ago operations
#[derive(Error, Debug)]
pub enum AgoError {
    /// A diff message was requested for a count of zero
    #[error("The count must not be zero.")]
    ZeroCount,

    /// The unit is not one of year, month, day, hour, minute or second
    #[error("The unit '{unit}' is not supported.")]
    UnsupportedUnit { unit: String },

    /// Instant or precision parsing errors
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A strict translator could not find a message in its catalogs
    #[error("Missing message '{key}' in domain '{domain}' for locale '{locale}'")]
    MissingMessage {
        domain: String,
        key: String,
        locale: String,
    },

    /// Catalog errors (unreadable file, malformed YAML)
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for Ago operations
pub type Result<T> = std::result::Result<T, AgoError>;

impl AgoError {
    /// Creates a new unsupported unit error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    ///
    /// let err = AgoError::unsupported_unit("week");
    /// assert!(matches!(err, AgoError::UnsupportedUnit { .. }));
    /// assert_eq!(err.to_string(), "The unit 'week' is not supported.");
    /// ```
    pub fn unsupported_unit<S: Into<String>>(unit: S) -> Self {
        Self::UnsupportedUnit { unit: unit.into() }
    }

    /// Creates a new parse error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    ///
    /// let err = AgoError::parse("invalid date");
    /// assert!(matches!(err, AgoError::Parse { .. }));
    /// ```
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new parse error with a source error.
    pub fn parse_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new missing message error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    ///
    /// let err = AgoError::missing_message("time", "diff.empty", "en");
    /// assert!(err.to_string().contains("diff.empty"));
    /// ```
    pub fn missing_message<S: Into<String>>(domain: S, key: S, locale: S) -> Self {
        Self::MissingMessage {
            domain: domain.into(),
            key: key.into(),
            locale: locale.into(),
        }
    }

    /// Creates a new catalog error.
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new catalog error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = AgoError::catalog_with_source("failed to read catalog", io_err);
    /// assert!(matches!(err, AgoError::Catalog { .. }));
    /// ```
    pub fn catalog_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Catalog {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libago::error::AgoError;
    ///
    /// let err = AgoError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, AgoError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}

impl From<config::ConfigError> for AgoError {
    fn from(err: config::ConfigError) -> Self {
        AgoError::config_with_source("Failed to build configuration", None, err)
    }
}
