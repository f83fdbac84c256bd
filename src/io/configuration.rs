//! Simulation constants and runtime configuration defaults

// Grid bounds
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: i32 = 48;
/// Default grid height in floors
pub const DEFAULT_GRID_HEIGHT: i32 = 24;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: i32 = 10_000;

// Connectivity
/// Milliseconds between scheduled connectivity passes
pub const DEFAULT_TRANSPORT_FREQUENCY_MS: u64 = 500;
/// Cells at or below this transit distance count as fully served
pub const TRANSIT_DISTANCE_THRESHOLD: f32 = 5.0;

// Noise diffusion
/// Milliseconds between noise passes
pub const DEFAULT_NOISE_FREQUENCY_MS: u64 = 2_000;
/// Chebyshev radius noise spreads over
pub const NOISE_RADIUS: usize = 2;
/// Attenuation per cell of distance
pub const NOISE_FALLOFF: f32 = 0.5;

// Event delivery
/// Events retained for lagging subscribers
pub const EVENT_LOG_CAPACITY: usize = 1_024;

// Headless runner
/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;
/// Default number of simulated ticks
pub const DEFAULT_TICKS: usize = 600;
/// Default simulated tick length in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;
/// Default probability of a random mutation per tick
pub const DEFAULT_CHURN: f64 = 0.1;
/// Default share of floors the generator fills
pub const DEFAULT_FLOORS_FILLED: f64 = 0.75;

// Output settings
/// Pixels per cell in exported overlays
pub const OVERLAY_SCALE: u32 = 8;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "TOWERGRID_LOG";
