//! Command-line interface for headless tower simulation runs

use crate::io::configuration::{
    DEFAULT_CHURN, DEFAULT_FLOORS_FILLED, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED,
    DEFAULT_TICK_MS, DEFAULT_TICKS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::overlay::export_all_overlays;
use crate::io::progress::TickProgress;
use crate::simulation::generator::{ChurnAction, LayoutSummary, TowerGenerator};
use crate::simulation::tower::{SimulationConfig, Tower};
use crate::spatial::point::GridSize;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Parser, Debug, Clone)]
#[command(name = "towergrid")]
#[command(
    author,
    version,
    about = "Simulate a randomly built tower and report transit connectivity"
)]
/// Command-line arguments for the simulation runner
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: i32,

    /// Grid height in floors
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: i32,

    /// Share of floors the generator fills with rooms
    #[arg(short, long, default_value_t = DEFAULT_FLOORS_FILLED)]
    pub floors_filled: f64,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_TICKS)]
    pub ticks: usize,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Probability of a random mutation each tick
    #[arg(short, long, default_value_t = DEFAULT_CHURN)]
    pub churn: f64,

    /// Directory to write PNG overlays into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Simulated time per tick
    pub const fn tick_length(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Simulation configuration for these arguments
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            grid_size: GridSize::new(self.width, self.height),
            ..SimulationConfig::default()
        }
    }

    /// Reject arguments the runner cannot honour
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a churn rate or fill share outside
    /// `0.0..=1.0`, a zero tick length, or invalid grid bounds
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.churn) {
            return Err(invalid_parameter(
                "churn",
                &self.churn,
                &"must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.floors_filled) {
            return Err(invalid_parameter(
                "floors_filled",
                &self.floors_filled,
                &"must be between 0 and 1",
            ));
        }
        if self.tick_ms == 0 {
            return Err(invalid_parameter(
                "tick_ms",
                &self.tick_ms,
                &"ticks need a positive length",
            ));
        }
        self.simulation_config().validate()
    }
}

/// Outcome of a headless run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Layout produced before the first tick
    pub layout: LayoutSummary,
    /// Ticks simulated
    pub ticks: u64,
    /// Connectivity passes run
    pub transport_runs: usize,
    /// Mutations applied by churn
    pub mutations: usize,
    /// Rooms on the grid at the end
    pub rooms: usize,
    /// Rooms connected to transport at the end
    pub connected_rooms: usize,
    /// Overlay files written
    pub overlays: Vec<PathBuf>,
}

/// Drives one simulation from parsed arguments
pub struct TowerRunner {
    cli: Cli,
}

impl TowerRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate a layout, simulate every tick and export overlays
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, layout generation or overlay
    /// export fails
    pub fn run(&self) -> Result<RunSummary> {
        self.cli.validate()?;
        let start_time = Instant::now();

        let mut tower = Tower::new(&self.cli.simulation_config())?;
        let mut generator = TowerGenerator::new(self.cli.seed);
        let layout = generator.populate(tower.grid_mut(), self.cli.floors_filled)?;
        info!(
            rooms = layout.rooms,
            transports = layout.transports,
            floors = layout.floors,
            seed = self.cli.seed,
            "generated layout"
        );

        let progress = TickProgress::new(self.cli.ticks, self.cli.should_show_progress());
        let mut summary = RunSummary {
            layout,
            ..RunSummary::default()
        };

        for _ in 0..self.cli.ticks {
            if generator.roll(self.cli.churn)
                && let Some(action) = generator.churn(tower.grid_mut())?
            {
                summary.mutations += 1;
                log_churn(action);
            }

            if tower.tick(self.cli.tick_length()).transport.is_some() {
                summary.transport_runs += 1;
            }

            let (connected, total) = room_counts(&tower);
            progress.tick(connected, total);
        }
        progress.finish();

        let report = tower.recompute();
        summary.ticks = tower.ticks();
        summary.connected_rooms = report.connected_rooms;
        summary.rooms = report.connected_rooms + report.disconnected_rooms;

        if let Some(directory) = &self.cli.output {
            summary.overlays = export_all_overlays(tower.grid().position_cache(), directory)?;
            info!(
                count = summary.overlays.len(),
                directory = %directory.display(),
                "exported overlays"
            );
        }

        info!(
            ticks = summary.ticks,
            transport_runs = summary.transport_runs,
            mutations = summary.mutations,
            connected_rooms = summary.connected_rooms,
            rooms = summary.rooms,
            connected_cells = report.connected_cells,
            elapsed_secs = start_time.elapsed().as_secs_f64(),
            "simulation finished"
        );

        Ok(summary)
    }
}

fn room_counts(tower: &Tower) -> (usize, usize) {
    tower
        .grid()
        .rooms()
        .fold((0, 0), |(connected, total), (_, room)| {
            (
                connected + usize::from(room.is_connected_to_transport()),
                total + 1,
            )
        })
}

fn log_churn(action: ChurnAction) {
    match action {
        ChurnAction::Added(id) => debug!(%id, "churn added room"),
        ChurnAction::Moved(id) => debug!(%id, "churn moved room"),
        ChurnAction::Removed(id) => debug!(%id, "churn removed room"),
    }
}
