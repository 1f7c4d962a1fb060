//! Ago - Localized Time Difference Library
//!
//! Ago turns the difference between two instants into a short translated
//! message such as "2 days ago" or "in 3 months".
//!
//! # Quick Start
//!
//! ```
//! use libago::Ago;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ago = Ago::new()?;
//!
//!     // Earlier `from`: the message reads as the past
//!     println!("{}", ago.diff("2024-01-01", "2024-01-03")?);
//!
//!     // Relative to now
//!     println!("{}", ago.ago("-3 hours")?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Simple API**: High-level [`Ago`] struct for common operations
//! - **Calendar aware**: Differences decomposed into years, months, days,
//!   hours, minutes and seconds
//! - **Precision**: Report one unit or any set of units
//! - **Two message formats**: Interval choice messages and ICU plural blocks
//! - **Catalogs**: Shipped English and French messages, extendable from YAML
//!
//! # Main Types
//!
//! - [`Ago`] - Main entry point for formatting
//! - [`AgoBuilder`] - Builder for advanced configuration
//! - [`DiffFormatter`] - Formatter generic over its [`Translator`]
//! - [`CalendarDiff`] - Calendar decomposition of a difference
//! - [`TimeUnit`] - Reportable units
//!
//! # Architecture
//!
//! - **High-level API** ([`Ago`]) - Recommended for most users
//! - **Low-level modules** - Available for advanced use cases (hidden from docs)

#![warn(clippy::all)]

/// Returns the libago crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = libago::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod ago;
pub use ago::{Ago, AgoBuilder, build_translator};

// Re-export commonly used types for convenience
pub use config::Config;
pub use diff::{CalendarDiff, CalendarDiffer, ChronoDiffer, Direction};
pub use error::{AgoError, Result};
pub use format::DiffFormatter;
pub use instant::InstantInput;
pub use translator::{Params, Translator, TranslatorKind};
pub use unit::TimeUnit;

// Low-level implementation modules (hidden from docs but still public)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod diff;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod format;
#[doc(hidden)]
pub mod instant;
pub mod translator;
#[doc(hidden)]
pub mod unit;
