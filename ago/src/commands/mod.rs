/// Diff command handlers
pub mod diff;

/// Empty message command handlers
pub mod empty;

/// Single message command handlers
pub mod message;

/// Unit table command handlers
pub mod units;

/// Version command handlers
pub mod version;
