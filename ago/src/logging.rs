//! Logging initialization
//!
//! Library and CLI events go through `tracing`. Logs are written to stderr so
//! they never mix with command output. `RUST_LOG` takes precedence over the
//! `-v` flags.

use crate::context::VerbosityLevel;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Build the filter for a verbosity level, unless RUST_LOG is set
pub fn build_filter(verbosity: VerbosityLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(verbosity: VerbosityLevel) {
    INIT_ONCE.call_once(|| {
        // Another subscriber may already be installed (tests)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(build_filter(verbosity))
            .with_writer(std::io::stderr)
            .with_target(verbosity >= VerbosityLevel::VeryVerbose)
            .try_init();
    });
}
