//! Log subscriber setup for the command-line runner
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries.

use tracing_subscriber::EnvFilter;

use crate::io::configuration::LOG_ENV_VAR;
use crate::io::error::{Result, TowerError};

/// Filter applied when the environment does not provide one
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Build the filter from `TOWERGRID_LOG`, falling back to the default directive
pub fn build_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)))
}

/// Install the global formatting subscriber
///
/// # Errors
///
/// Returns `Logging` if a global subscriber is already installed
pub fn init_logging(quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(quiet))
        .with_target(false)
        .try_init()
        .map_err(|e| TowerError::Logging {
            reason: e.to_string(),
        })
}
