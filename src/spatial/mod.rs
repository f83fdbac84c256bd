//! Spatial data structures for the tower grid
//!
//! This module contains:
//! - Integer coordinates, sizes and footprints
//! - Per-cell occupancy and derived values
//! - The position cache indexing objects by cell
//! - Noise diffusion between neighbouring cells

/// Per-cell index of placed objects
pub mod cache;
/// Noise attenuation and diffusion
pub mod noise;
/// Grid coordinates and rectangles
pub mod point;
/// Single grid cell state
pub mod position;

pub use cache::GridPositionCache;
pub use point::{Footprint, GridPoint, GridSize};
pub use position::GridPosition;
