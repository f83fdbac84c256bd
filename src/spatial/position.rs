//! Per-cell occupancy record with derived noise and transit metrics

use crate::spatial::point::GridPoint;
use crate::world::object::GridObjectId;
use std::collections::BTreeSet;

/// One cell of the tower grid
///
/// Holds non-owning handles of every object covering the cell plus values
/// derived by the noise and connectivity passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridPosition {
    point: GridPoint,
    objects: BTreeSet<GridObjectId>,
    max_noise: f32,
    noise_level: f32,
    /// Set by the connectivity pass when transport reaches this cell
    pub connected_to_transit: bool,
    /// Horizontal distance in cells to the nearest connected cell on this floor
    pub distance_from_transit: f32,
    /// `distance_from_transit` scaled against the grid maximum
    pub normalized_distance_from_transit: f32,
}

impl GridPosition {
    /// Create an empty cell at a coordinate
    pub const fn new(point: GridPoint) -> Self {
        Self {
            point,
            objects: BTreeSet::new(),
            max_noise: 0.0,
            noise_level: 0.0,
            connected_to_transit: false,
            distance_from_transit: 0.0,
            normalized_distance_from_transit: 0.0,
        }
    }

    /// Coordinate of this cell
    pub const fn point(&self) -> GridPoint {
        self.point
    }

    /// Handles of every occupant
    pub const fn objects(&self) -> &BTreeSet<GridObjectId> {
        &self.objects
    }

    /// Check if a specific object covers this cell
    pub fn contains(&self, id: GridObjectId) -> bool {
        self.objects.contains(&id)
    }

    /// Number of occupants
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when nothing covers this cell
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Loudest occupant as of the last noise pass
    pub const fn max_noise(&self) -> f32 {
        self.max_noise
    }

    /// Diffused noise as of the last noise pass
    pub const fn noise_level(&self) -> f32 {
        self.noise_level
    }

    pub(crate) fn add(&mut self, id: GridObjectId) -> bool {
        self.objects.insert(id)
    }

    pub(crate) fn remove(&mut self, id: GridObjectId) -> bool {
        self.objects.remove(&id)
    }

    /// First noise pass: loudest occupant, zero when empty
    pub(crate) fn find_max_noise<F>(&mut self, noise_of: F) -> f32
    where
        F: Fn(GridObjectId) -> f32,
    {
        self.max_noise = self
            .objects
            .iter()
            .map(|&id| noise_of(id))
            .fold(0.0, f32::max);
        self.max_noise
    }

    pub(crate) const fn set_noise_level(&mut self, noise_level: f32) {
        self.noise_level = noise_level;
    }
}
