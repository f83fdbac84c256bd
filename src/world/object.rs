//! Placeable grid objects and their classification

use crate::spatial::point::{Footprint, GridPoint, GridSize};
use std::fmt;

/// Handle issued by the [`GameGrid`](crate::world::GameGrid) for each object
///
/// Handles are never reused, so a handle held past removal simply stops
/// resolving. Occupant sets and ignore lists compare handles, not object values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridObjectId(u32);

impl GridObjectId {
    /// Wrap a raw handle value
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Dense index suitable for bitsets and slabs
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GridObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Placement lifecycle of an object
///
/// `Valid` and `Invalid` describe a preview that is still being dragged around;
/// only `Placed` objects are indexed by the position cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlacementState {
    /// Not yet on the grid
    #[default]
    Unplaced,
    /// Preview at a legal location
    Valid,
    /// Preview at an illegal location
    Invalid,
    /// Committed to the grid
    Placed,
}

/// Vertical transport variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// Elevator shaft
    Elevator,
    /// Stairwell
    Stair,
}

/// Room categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomCategory {
    /// Ground floor entrance, always connected to transport
    Lobby,
    /// Apartments and condos
    Residential,
    /// Office space
    Office,
    /// Shops and restaurants
    Commercial,
}

impl RoomCategory {
    /// Check if rooms of this category count as connected on their own
    pub const fn is_lobby(self) -> bool {
        matches!(self, Self::Lobby)
    }
}

/// Classification used in place of runtime type checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A room that can be connected to transport
    Room(RoomCategory),
    /// An elevator or stair that connects floors
    Transport(TransportKind),
    /// Anything else (decorations, utilities)
    Other,
}

impl ObjectKind {
    /// Check if this kind is a room
    pub const fn is_room(self) -> bool {
        matches!(self, Self::Room(_))
    }

    /// Check if this kind is vertical transport
    pub const fn is_transport(self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Noise emitted by a freshly constructed object of this kind
    pub const fn default_noise_level(self) -> f32 {
        match self {
            Self::Room(RoomCategory::Lobby) => 0.3,
            Self::Room(RoomCategory::Residential) => 0.1,
            Self::Room(RoomCategory::Office) => 0.2,
            Self::Room(RoomCategory::Commercial) => 0.5,
            Self::Transport(TransportKind::Elevator) => 0.4,
            Self::Transport(TransportKind::Stair) => 0.15,
            Self::Other => 0.0,
        }
    }
}

/// A rectangular object living on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridObject {
    kind: ObjectKind,
    position: GridPoint,
    size: GridSize,
    placement_state: PlacementState,
    noise_level: f32,
    connected_to_transport: bool,
}

impl GridObject {
    /// Create an unplaced object with the default noise for its kind
    pub const fn new(kind: ObjectKind, position: GridPoint, size: GridSize) -> Self {
        Self {
            kind,
            position,
            size,
            placement_state: PlacementState::Unplaced,
            noise_level: kind.default_noise_level(),
            connected_to_transport: false,
        }
    }

    /// Override the emitted noise, clamped to `0.0..=1.0`
    #[must_use]
    pub const fn with_noise_level(mut self, noise_level: f32) -> Self {
        self.noise_level = noise_level.clamp(0.0, 1.0);
        self
    }

    /// Set the initial placement state
    #[must_use]
    pub const fn with_placement_state(mut self, state: PlacementState) -> Self {
        self.placement_state = state;
        self
    }

    /// Classification of this object
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Lowest covered cell
    pub const fn position(&self) -> GridPoint {
        self.position
    }

    /// Covered extent
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Covered rectangle
    pub const fn footprint(&self) -> Footprint {
        Footprint::new(self.position, self.size)
    }

    /// Every cell this object touches
    pub fn grid_points_touched(&self) -> impl Iterator<Item = GridPoint> + use<> {
        self.footprint().points()
    }

    /// Current placement state
    pub const fn placement_state(&self) -> PlacementState {
        self.placement_state
    }

    /// Check if the object is committed to the grid
    pub const fn is_placed(&self) -> bool {
        matches!(self.placement_state, PlacementState::Placed)
    }

    /// Noise emitted into the cells this object covers
    pub const fn noise_level(&self) -> f32 {
        self.noise_level
    }

    /// Result of the last connectivity pass (always false for non-rooms)
    pub const fn is_connected_to_transport(&self) -> bool {
        self.connected_to_transport
    }

    pub(crate) const fn set_bounds(&mut self, position: GridPoint, size: GridSize) {
        self.position = position;
        self.size = size;
    }

    pub(crate) const fn set_placement_state(&mut self, state: PlacementState) {
        self.placement_state = state;
    }

    pub(crate) const fn set_connected_to_transport(&mut self, connected: bool) {
        self.connected_to_transport = connected;
    }
}
