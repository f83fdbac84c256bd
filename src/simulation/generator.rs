//! Seeded random tower layouts and mutation churn for headless runs

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::point::{GridPoint, GridSize};
use crate::world::game_grid::GameGrid;
use crate::world::object::{
    GridObject, GridObjectId, ObjectKind, PlacementState, RoomCategory, TransportKind,
};

/// Columns between transport shafts
const SHAFT_SPACING: i32 = 16;
/// Chance of leaving a gap before the next room
const GAP_PROBABILITY: f64 = 0.2;

/// Objects created by [`TowerGenerator::populate`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Rooms placed, lobby included
    pub rooms: usize,
    /// Elevators and stairs placed
    pub transports: usize,
    /// Floors that received rooms
    pub floors: i32,
}

/// A single random mutation applied by [`TowerGenerator::churn`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnAction {
    /// A new room was placed
    Added(GridObjectId),
    /// A room shifted one cell sideways
    Moved(GridObjectId),
    /// A room was demolished
    Removed(GridObjectId),
}

/// Deterministic layout and churn source
pub struct TowerGenerator {
    rng: StdRng,
}

impl TowerGenerator {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fill the lower `floors_filled` share of the grid
    ///
    /// Floor zero becomes a full-width lobby. Transport shafts rise from the
    /// lobby through every filled floor, and each upper floor is packed with
    /// rooms of two to five cells separated by occasional gaps.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `floors_filled` lies in `0.0..=1.0`
    pub fn populate(&mut self, grid: &mut GameGrid, floors_filled: f64) -> Result<LayoutSummary> {
        if !(0.0..=1.0).contains(&floors_filled) {
            return Err(invalid_parameter(
                "floors_filled",
                &floors_filled,
                &"must be between 0 and 1",
            ));
        }

        let size = grid.size();
        let floors = ((f64::from(size.height) * floors_filled).round() as i32).clamp(1, size.height);
        let mut summary = LayoutSummary {
            floors,
            ..LayoutSummary::default()
        };

        grid.add_object(placed(
            ObjectKind::Room(RoomCategory::Lobby),
            GridPoint::ORIGIN,
            GridSize::new(size.width, 1),
        ));
        summary.rooms += 1;

        let shafts = self.shaft_columns(size.width);
        for (index, &x) in shafts.iter().enumerate() {
            let kind = if index == 0 || self.rng.random_bool(0.5) {
                TransportKind::Elevator
            } else {
                TransportKind::Stair
            };
            grid.add_object(placed(
                ObjectKind::Transport(kind),
                GridPoint::new(x, 0),
                GridSize::new(1, floors),
            ));
            summary.transports += 1;
        }

        for y in 1..floors {
            let mut x = 0;
            while x < size.width {
                if shafts.contains(&x) || self.rng.random_bool(GAP_PROBABILITY) {
                    x += 1;
                    continue;
                }

                let next_shaft = shafts
                    .iter()
                    .copied()
                    .filter(|&shaft| shaft > x)
                    .min()
                    .unwrap_or(size.width);
                let end = (x + self.rng.random_range(2..=5)).min(next_shaft);

                grid.add_object(placed(
                    ObjectKind::Room(self.random_category()),
                    GridPoint::new(x, y),
                    GridSize::new(end - x, 1),
                ));
                summary.rooms += 1;
                x = end;
            }
        }

        debug!(?summary, "generated tower layout");
        Ok(summary)
    }

    /// Apply one random add, move or removal to the grid's rooms
    ///
    /// Lobbies are never moved or removed. Returns `None` when the chosen
    /// mutation had no eligible room.
    ///
    /// # Errors
    ///
    /// Propagates grid errors, which only occur for handles that vanished
    pub fn churn(&mut self, grid: &mut GameGrid) -> Result<Option<ChurnAction>> {
        let candidates: Vec<GridObjectId> = grid
            .rooms()
            .filter(|(_, room)| room.kind() != ObjectKind::Room(RoomCategory::Lobby))
            .map(|(id, _)| id)
            .collect();

        match self.rng.random_range(0..3) {
            0 => {
                let size = grid.size();
                let width = self.rng.random_range(1..=4);
                let position = GridPoint::new(
                    self.rng.random_range(0..size.width),
                    self.rng.random_range(1..=size.height.max(1)),
                );
                let id = grid.add_object(placed(
                    ObjectKind::Room(self.random_category()),
                    position,
                    GridSize::new(width, 1),
                ));
                Ok(Some(ChurnAction::Added(id)))
            }
            1 => {
                let Some(id) = self.pick(&candidates) else {
                    return Ok(None);
                };
                let step = if self.rng.random_bool(0.5) { -1 } else { 1 };
                let position = grid
                    .object(id)
                    .map_or(GridPoint::ORIGIN, |room| room.position().step_x(step));
                grid.move_object(id, position)?;
                Ok(Some(ChurnAction::Moved(id)))
            }
            _ => {
                let Some(id) = self.pick(&candidates) else {
                    return Ok(None);
                };
                grid.remove_object(id)?;
                Ok(Some(ChurnAction::Removed(id)))
            }
        }
    }

    /// Draw a churn decision with the given probability
    ///
    /// Probabilities outside `0.0..=1.0` are clamped.
    pub fn roll(&mut self, probability: f64) -> bool {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.rng.random_bool(probability)
    }

    fn pick(&mut self, candidates: &[GridObjectId]) -> Option<GridObjectId> {
        if candidates.is_empty() {
            return None;
        }
        candidates
            .get(self.rng.random_range(0..candidates.len()))
            .copied()
    }

    fn shaft_columns(&mut self, width: i32) -> Vec<i32> {
        let count = (width / SHAFT_SPACING).max(1);
        let spacing = width / count;
        (0..count)
            .map(|index| {
                let jitter = self.rng.random_range(0..spacing.max(1));
                (index * spacing + jitter).clamp(0, width - 1)
            })
            .collect()
    }

    fn random_category(&mut self) -> RoomCategory {
        match self.rng.random_range(0..3) {
            0 => RoomCategory::Residential,
            1 => RoomCategory::Office,
            _ => RoomCategory::Commercial,
        }
    }
}

fn placed(kind: ObjectKind, position: GridPoint, size: GridSize) -> GridObject {
    GridObject::new(kind, position, size).with_placement_state(PlacementState::Placed)
}
