//! Cell occupancy index for the tower grid
//!
//! The cache keeps, for every cell, the exact set of placed objects covering
//! it. It is driven by the [`GameGrid`](crate::world::GameGrid) through the
//! `on_*` handlers and answers point and rectangle queries in time
//! proportional to the queried area. Cells are addressed `0..=size` on both
//! axes, so the array is one cell larger than the grid bounds.

use ndarray::Array2;
use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::io::configuration::TRANSIT_DISTANCE_THRESHOLD;
use crate::spatial::noise::diffused_noise;
use crate::spatial::point::{Footprint, GridPoint, GridSize};
use crate::spatial::position::GridPosition;
use crate::world::object::{GridObject, GridObjectId};

/// Two-dimensional array of [`GridPosition`] indexed `[x, y]`
#[derive(Debug, Clone, Default)]
pub struct GridPositionCache {
    positions: Array2<GridPosition>,
    grid_size: Option<GridSize>,
}

impl GridPositionCache {
    /// Create a cache with no cells; call [`resize`](Self::resize) before use
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache already sized to `grid_size`
    pub fn with_size(grid_size: GridSize) -> Self {
        let mut cache = Self::new();
        cache.resize(grid_size, false);
        cache
    }

    /// Bounds the cache was last resized to
    pub const fn grid_size(&self) -> Option<GridSize> {
        self.grid_size
    }

    /// Array dimensions as (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        self.positions.dim()
    }

    /// Resize the cell array to new grid bounds
    ///
    /// Same-size requests are ignored. With `copy_existing` the overlapping
    /// region of the previous array is moved over unchanged; every other cell
    /// starts empty. The new array replaces the old one in one assignment.
    pub fn resize(&mut self, new_size: GridSize, copy_existing: bool) {
        if self.grid_size == Some(new_size) {
            trace!(size = %new_size, "grid size unchanged, skipping resize");
            return;
        }

        let columns = usize::try_from(new_size.width.saturating_add(1)).unwrap_or(0);
        let rows = usize::try_from(new_size.height.saturating_add(1)).unwrap_or(0);

        let mut previous = copy_existing.then(|| std::mem::take(&mut self.positions));
        let positions = Array2::from_shape_fn((columns, rows), |(x, y)| {
            previous
                .as_mut()
                .and_then(|old| old.get_mut([x, y]))
                .map_or_else(
                    || GridPosition::new(GridPoint::new(x as i32, y as i32)),
                    std::mem::take,
                )
        });

        debug!(
            from = ?self.grid_size,
            to = %new_size,
            copy_existing,
            "resized grid position cache"
        );

        self.positions = positions;
        self.grid_size = Some(new_size);
    }

    /// Index a newly placed object
    ///
    /// Objects that are not in the `Placed` state are previews and are ignored.
    pub fn on_object_placed(&mut self, id: GridObjectId, object: &GridObject) {
        if !object.is_placed() {
            return;
        }

        let added = self.add_to_cells(id, object.footprint());
        trace!(%id, footprint = %object.footprint(), added, "indexed placed object");
    }

    /// Re-index an object whose position or size changed
    ///
    /// All previous cells are cleared before the current footprint is added,
    /// so cells shared by both rectangles end up holding the object exactly once.
    pub fn on_object_bounds_changed(
        &mut self,
        id: GridObjectId,
        object: &GridObject,
        previous_position: GridPoint,
        previous_size: GridSize,
    ) {
        if !object.is_placed() {
            return;
        }

        let previous = Footprint::new(previous_position, previous_size);
        let removed = self.remove_from_cells(id, previous);
        let added = self.add_to_cells(id, object.footprint());
        trace!(%id, from = %previous, to = %object.footprint(), removed, added, "re-indexed moved object");
    }

    /// Drop an object from every cell of its footprint
    pub fn on_object_removed(&mut self, id: GridObjectId, object: &GridObject) {
        let removed = self.remove_from_cells(id, object.footprint());
        trace!(%id, footprint = %object.footprint(), removed, "unindexed removed object");
    }

    fn add_to_cells(&mut self, id: GridObjectId, footprint: Footprint) -> usize {
        let (columns, rows) = self.dimensions();
        let (xs, ys) = footprint.clipped_ranges(columns, rows);

        let mut added = 0;
        for x in xs {
            for y in ys.clone() {
                if let Some(position) = self.positions.get_mut([x, y]) {
                    added += usize::from(position.add(id));
                }
            }
        }
        added
    }

    fn remove_from_cells(&mut self, id: GridObjectId, footprint: Footprint) -> usize {
        let (columns, rows) = self.dimensions();
        let (xs, ys) = footprint.clipped_ranges(columns, rows);

        let mut removed = 0;
        for x in xs {
            for y in ys.clone() {
                if let Some(position) = self.positions.get_mut([x, y]) {
                    removed += usize::from(position.remove(id));
                }
            }
        }
        removed
    }

    /// Every object covering `[position, position + size)` minus `ignore`
    ///
    /// Cells outside the grid contribute nothing; the result is empty rather
    /// than absent when nothing is found.
    pub fn objects_at(
        &self,
        position: GridPoint,
        size: GridSize,
        ignore: &[GridObjectId],
    ) -> BTreeSet<GridObjectId> {
        let (columns, rows) = self.dimensions();
        let (xs, ys) = Footprint::new(position, size).clipped_ranges(columns, rows);

        let mut objects = BTreeSet::new();
        for x in xs {
            for y in ys.clone() {
                if let Some(cell) = self.positions.get([x, y]) {
                    objects.extend(cell.objects().iter().copied());
                }
            }
        }

        for id in ignore {
            objects.remove(id);
        }

        objects
    }

    /// Every object covering a single cell
    pub fn objects_at_point(&self, point: GridPoint) -> BTreeSet<GridObjectId> {
        self.objects_at(point, GridSize::SINGLE_CELL, &[])
    }

    /// Bounds-checked cell lookup
    pub fn position(&self, point: GridPoint) -> Option<&GridPosition> {
        self.position_at(point.x, point.y)
    }

    /// Bounds-checked cell lookup by raw coordinates
    pub fn position_at(&self, x: i32, y: i32) -> Option<&GridPosition> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.positions.get([x, y])
    }

    fn position_mut(&mut self, point: GridPoint) -> Option<&mut GridPosition> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        self.positions.get_mut([x, y])
    }

    /// Iterate every cell in storage order
    pub fn positions(&self) -> impl Iterator<Item = &GridPosition> {
        self.positions.iter()
    }

    /// Iterate the cells of one floor from left to right
    pub fn floor(&self, y: i32) -> impl Iterator<Item = &GridPosition> {
        let row = usize::try_from(y).ok();
        let columns = if row.is_some_and(|index| index < self.dimensions().1) {
            self.dimensions().0
        } else {
            0
        };
        (0..columns).filter_map(move |x| row.and_then(|index| self.positions.get([x, index])))
    }

    /// Recompute the noise of every cell
    ///
    /// Pass one stores each cell's loudest occupant, pass two diffuses those
    /// maxima into neighbouring cells. Pass two reads a snapshot of pass-one
    /// results, never values written earlier in the same pass.
    pub fn update_noise_levels<F>(&mut self, noise_of: F)
    where
        F: Fn(GridObjectId) -> f32,
    {
        for position in &mut self.positions {
            position.find_max_noise(&noise_of);
        }

        let max_levels = self.positions.map(GridPosition::max_noise);

        for ((x, y), position) in self.positions.indexed_iter_mut() {
            position.set_noise_level(diffused_noise(&max_levels, x, y));
        }

        trace!(cells = max_levels.len(), "updated noise levels");
    }

    /// Scale transit distances against the largest finite distance
    ///
    /// Cells within `TRANSIT_DISTANCE_THRESHOLD` of transit count as fully
    /// served and normalise to zero. Unreachable cells normalise to one, so a
    /// grid with no transit at all reads as unserved everywhere.
    pub fn normalize_transit_distances(&mut self) {
        let finite = || {
            self.positions
                .iter()
                .map(|position| position.distance_from_transit)
                .filter(|distance| distance.is_finite())
        };
        let min_distance = finite().fold(f32::INFINITY, f32::min);
        let max_distance = finite().fold(0.0, f32::max);

        for position in &mut self.positions {
            let distance = position.distance_from_transit;
            position.normalized_distance_from_transit = if distance > TRANSIT_DISTANCE_THRESHOLD {
                if distance.is_finite() && max_distance > 0.0 {
                    distance / max_distance
                } else {
                    1.0
                }
            } else {
                0.0
            };
        }

        trace!(min_distance, max_distance, "normalized transit distances");
    }

    /// Clear the connectivity flag of every cell
    pub fn clear_transit_connections(&mut self) {
        for position in &mut self.positions {
            position.connected_to_transit = false;
        }
    }

    /// Mark a cell as reached by transport
    ///
    /// Returns the cell, or `None` when the point is outside the grid.
    pub fn connect_to_transit(&mut self, point: GridPoint) -> Option<&GridPosition> {
        let position = self.position_mut(point)?;
        position.connected_to_transit = true;
        Some(&*position)
    }

    /// Store the raw transit distance of a cell, ignoring out-of-grid points
    pub fn set_transit_distance(&mut self, point: GridPoint, distance: f32) {
        if let Some(position) = self.position_mut(point) {
            position.distance_from_transit = distance;
        }
    }

    /// Number of cells currently flagged as connected
    pub fn connected_cell_count(&self) -> usize {
        self.positions
            .iter()
            .filter(|position| position.connected_to_transit)
            .count()
    }
}
