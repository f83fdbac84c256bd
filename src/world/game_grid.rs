//! Owner of placed objects and their occupancy cache
//!
//! Every mutation updates the [`GridPositionCache`] synchronously and then
//! appends a [`GridEvent`] to the log, in that order.

use std::collections::BTreeMap;
use tracing::debug;

use crate::io::configuration::{EVENT_LOG_CAPACITY, MAX_GRID_DIMENSION};
use crate::io::error::{Result, TowerError};
use crate::spatial::cache::GridPositionCache;
use crate::spatial::point::{GridPoint, GridSize};
use crate::world::events::{GridEvent, GridEventLog};
use crate::world::object::{GridObject, GridObjectId, ObjectKind, PlacementState};

/// The tower grid: objects, bounds, occupancy cache and event log
#[derive(Debug, Clone)]
pub struct GameGrid {
    size: GridSize,
    objects: BTreeMap<GridObjectId, GridObject>,
    next_id: u32,
    position_cache: GridPositionCache,
    events: GridEventLog,
}

impl GameGrid {
    /// Create an empty grid with the given bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridSize` if either dimension is below one or above
    /// `MAX_GRID_DIMENSION`
    pub fn new(size: GridSize) -> Result<Self> {
        validate_size(size)?;

        Ok(Self {
            size,
            objects: BTreeMap::new(),
            next_id: 0,
            position_cache: GridPositionCache::with_size(size),
            events: GridEventLog::new(EVENT_LOG_CAPACITY),
        })
    }

    /// Current bounds
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Read access to the occupancy cache
    pub const fn position_cache(&self) -> &GridPositionCache {
        &self.position_cache
    }

    /// Mutable access for the recompute passes
    pub const fn position_cache_mut(&mut self) -> &mut GridPositionCache {
        &mut self.position_cache
    }

    /// Read access to the event log
    pub const fn events(&self) -> &GridEventLog {
        &self.events
    }

    /// Mutable access for subscribing and draining
    pub const fn events_mut(&mut self) -> &mut GridEventLog {
        &mut self.events
    }

    /// Change the grid bounds
    ///
    /// With `copy_existing` the cache keeps its overlapping cells. Placed
    /// objects are re-indexed afterwards either way, so objects that were
    /// clipped by the old bounds fill the cells that just became available.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridSize` for unusable bounds
    pub fn resize(&mut self, size: GridSize, copy_existing: bool) -> Result<()> {
        validate_size(size)?;
        if size == self.size {
            return Ok(());
        }

        self.size = size;
        self.position_cache.resize(size, copy_existing);
        for (&id, object) in &self.objects {
            self.position_cache.on_object_placed(id, object);
        }

        debug!(%size, copy_existing, objects = self.objects.len(), "resized game grid");
        self.events.push(GridEvent::Resized {
            size,
            copy_existing,
        });
        Ok(())
    }

    /// Add an object and return its handle
    ///
    /// Objects added in the `Placed` state are indexed immediately; previews
    /// stay out of the cache until [`place_object`](Self::place_object).
    pub fn add_object(&mut self, object: GridObject) -> GridObjectId {
        let id = GridObjectId::new(self.next_id);
        self.next_id += 1;

        self.position_cache.on_object_placed(id, &object);
        debug!(%id, kind = ?object.kind(), footprint = %object.footprint(), state = ?object.placement_state(), "added object");

        self.objects.insert(id, object);
        self.events.push(GridEvent::ObjectPlaced { id });
        id
    }

    /// Commit a preview object to the grid
    ///
    /// Placing an already placed object is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `UnknownObject` if the handle does not resolve
    pub fn place_object(&mut self, id: GridObjectId) -> Result<()> {
        self.set_placement_state(id, PlacementState::Placed)
    }

    /// Update the placement state of an object
    ///
    /// # Errors
    ///
    /// Returns `UnknownObject` if the handle does not resolve, or
    /// `AlreadyPlaced` when moving a placed object back to a preview state
    pub fn set_placement_state(&mut self, id: GridObjectId, state: PlacementState) -> Result<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(TowerError::UnknownObject { id })?;

        match (object.placement_state(), state) {
            (PlacementState::Placed, PlacementState::Placed) => Ok(()),
            (PlacementState::Placed, _) => Err(TowerError::AlreadyPlaced { id }),
            (_, PlacementState::Placed) => {
                object.set_placement_state(state);
                self.position_cache.on_object_placed(id, object);
                debug!(%id, footprint = %object.footprint(), "placed object");
                self.events.push(GridEvent::ObjectPlaced { id });
                Ok(())
            }
            (_, preview) => {
                object.set_placement_state(preview);
                Ok(())
            }
        }
    }

    /// Move and/or resize an object
    ///
    /// # Errors
    ///
    /// Returns `UnknownObject` if the handle does not resolve
    pub fn set_object_bounds(
        &mut self,
        id: GridObjectId,
        position: GridPoint,
        size: GridSize,
    ) -> Result<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(TowerError::UnknownObject { id })?;

        let previous_position = object.position();
        let previous_size = object.size();
        if previous_position == position && previous_size == size {
            return Ok(());
        }

        object.set_bounds(position, size);
        self.position_cache
            .on_object_bounds_changed(id, object, previous_position, previous_size);

        debug!(%id, from = %previous_position, to = %position, %size, "moved object");
        self.events.push(GridEvent::ObjectBoundsChanged {
            id,
            previous_position,
            previous_size,
        });
        Ok(())
    }

    /// Move an object without changing its size
    ///
    /// # Errors
    ///
    /// Returns `UnknownObject` if the handle does not resolve
    pub fn move_object(&mut self, id: GridObjectId, position: GridPoint) -> Result<()> {
        let size = self.object(id).ok_or(TowerError::UnknownObject { id })?.size();
        self.set_object_bounds(id, position, size)
    }

    /// Take an object off the grid
    ///
    /// # Errors
    ///
    /// Returns `UnknownObject` if the handle does not resolve
    pub fn remove_object(&mut self, id: GridObjectId) -> Result<GridObject> {
        let object = self
            .objects
            .remove(&id)
            .ok_or(TowerError::UnknownObject { id })?;

        self.position_cache.on_object_removed(id, &object);

        debug!(%id, footprint = %object.footprint(), "removed object");
        self.events.push(GridEvent::ObjectRemoved {
            id,
            position: object.position(),
            size: object.size(),
        });
        Ok(object)
    }

    /// Look up an object by handle
    pub fn object(&self, id: GridObjectId) -> Option<&GridObject> {
        self.objects.get(&id)
    }

    /// Number of objects on the grid, previews included
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Every object in handle order, previews included
    pub fn objects(&self) -> impl Iterator<Item = (GridObjectId, &GridObject)> {
        self.objects.iter().map(|(&id, object)| (id, object))
    }

    /// Objects whose kind satisfies `filter`
    pub fn objects_of_kind<F>(&self, filter: F) -> impl Iterator<Item = (GridObjectId, &GridObject)>
    where
        F: Fn(ObjectKind) -> bool,
    {
        self.objects().filter(move |(_, object)| filter(object.kind()))
    }

    /// Every room
    pub fn rooms(&self) -> impl Iterator<Item = (GridObjectId, &GridObject)> {
        self.objects_of_kind(ObjectKind::is_room)
    }

    /// Every elevator and stair
    pub fn transports(&self) -> impl Iterator<Item = (GridObjectId, &GridObject)> {
        self.objects_of_kind(ObjectKind::is_transport)
    }

    /// Record the result of a connectivity pass on a room
    pub(crate) fn set_room_connected(&mut self, id: GridObjectId, connected: bool) {
        if let Some(object) = self.objects.get_mut(&id) {
            object.set_connected_to_transport(connected && object.kind().is_room());
        }
    }

    /// Recompute cell noise from the objects' emitted levels
    pub fn update_noise_levels(&mut self) {
        let objects = &self.objects;
        self.position_cache.update_noise_levels(|id| {
            objects.get(&id).map_or(0.0, GridObject::noise_level)
        });
    }
}

fn validate_size(size: GridSize) -> Result<()> {
    if size.width < 1 || size.height < 1 {
        return Err(TowerError::InvalidGridSize {
            size,
            reason: "width and height must be at least 1".to_string(),
        });
    }
    if size.width > MAX_GRID_DIMENSION || size.height > MAX_GRID_DIMENSION {
        return Err(TowerError::InvalidGridSize {
            size,
            reason: format!("dimensions may not exceed {MAX_GRID_DIMENSION}"),
        });
    }
    Ok(())
}
