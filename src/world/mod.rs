//! Objects placed on the grid and the grid that owns them

/// Change log delivered to subscribers
pub mod events;
/// Object registry that keeps the position cache in sync
pub mod game_grid;
/// Grid object kinds, handles and placement state
pub mod object;

pub use game_grid::GameGrid;
pub use object::{GridObject, GridObjectId, ObjectKind, PlacementState};
