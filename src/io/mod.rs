/// Command-line argument parsing and the headless runner
pub mod cli;
/// Simulation constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Log subscriber initialisation for binaries
pub mod logging;
/// PNG export of per-cell cache state
pub mod overlay;
/// Tick progress display
pub mod progress;
