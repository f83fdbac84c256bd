//! Per-game owner of the grid and its recurring passes

use std::time::Duration;
use tracing::trace;

use crate::algorithm::action::ActionTimer;
use crate::algorithm::transport::{TransportCalculator, TransportReport};
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_NOISE_FREQUENCY_MS,
    DEFAULT_TRANSPORT_FREQUENCY_MS, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::point::GridSize;
use crate::world::game_grid::GameGrid;

/// Runtime parameters for a tower simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Grid bounds
    pub grid_size: GridSize,
    /// Interval between scheduled connectivity passes
    pub transport_frequency: Duration,
    /// Interval between noise passes
    pub noise_frequency: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT),
            transport_frequency: Duration::from_millis(DEFAULT_TRANSPORT_FREQUENCY_MS),
            noise_frequency: Duration::from_millis(DEFAULT_NOISE_FREQUENCY_MS),
        }
    }
}

impl SimulationConfig {
    /// Check parameters before a tower is built from them
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a dimension is out of range or either
    /// pass frequency is zero
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_DIMENSION).contains(&self.grid_size.width) {
            return Err(invalid_parameter(
                "width",
                &self.grid_size.width,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if !(1..=MAX_GRID_DIMENSION).contains(&self.grid_size.height) {
            return Err(invalid_parameter(
                "height",
                &self.grid_size.height,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.transport_frequency.is_zero() {
            return Err(invalid_parameter(
                "transport_frequency",
                &"0ms",
                &"connectivity passes need a positive interval",
            ));
        }
        if self.noise_frequency.is_zero() {
            return Err(invalid_parameter(
                "noise_frequency",
                &"0ms",
                &"noise passes need a positive interval",
            ));
        }
        Ok(())
    }
}

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Connectivity pass run this tick, if any
    pub transport: Option<TransportReport>,
    /// Whether noise levels were recomputed
    pub noise_updated: bool,
}

/// A game grid together with the passes that keep its derived state fresh
///
/// Mutations go through [`grid_mut`](Self::grid_mut); the cache reflects them
/// immediately while connectivity catches up on the next [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct Tower {
    grid: GameGrid,
    transport: TransportCalculator,
    noise_timer: ActionTimer,
    ticks: u64,
}

impl Tower {
    /// Build an empty tower
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut grid = GameGrid::new(config.grid_size)?;
        let transport = TransportCalculator::new(&mut grid, config.transport_frequency);

        Ok(Self {
            grid,
            transport,
            noise_timer: ActionTimer::new(config.noise_frequency),
            ticks: 0,
        })
    }

    /// Read access to the grid
    pub const fn grid(&self) -> &GameGrid {
        &self.grid
    }

    /// Mutable access to place, move and remove objects
    pub const fn grid_mut(&mut self) -> &mut GameGrid {
        &mut self.grid
    }

    /// The connectivity solver
    pub const fn transport(&self) -> &TransportCalculator {
        &self.transport
    }

    /// Ticks simulated so far
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Halt connectivity recomputation and stop listening for changes
    pub fn pause_transport(&mut self) {
        self.transport.pause(&mut self.grid);
    }

    /// Resume connectivity recomputation
    pub fn unpause_transport(&mut self) {
        self.transport.unpause(&mut self.grid);
    }

    /// Run every pass immediately, regardless of schedule
    pub fn recompute(&mut self) -> TransportReport {
        self.grid.update_noise_levels();
        self.transport.run(&mut self.grid)
    }

    /// Advance simulated time by one tick
    pub fn tick(&mut self, delta: Duration) -> TickSummary {
        self.ticks += 1;

        let transport = self.transport.update(&mut self.grid, delta);
        let noise_updated = self.noise_timer.advance(delta);
        if noise_updated {
            self.grid.update_noise_levels();
        }

        trace!(tick = self.ticks, ran_transport = transport.is_some(), noise_updated, "tick");
        TickSummary {
            transport,
            noise_updated,
        }
    }
}
