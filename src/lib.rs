//! Spatial occupancy index and transit connectivity engine for tower-building games
//!
//! Every grid cell records which placed objects cover it. A connectivity pass
//! walks outward from elevators and stairs along each floor to decide which
//! cells and rooms can reach vertical transport, and a noise pass spreads each
//! occupant's noise to nearby cells.

#![forbid(unsafe_code)]

/// Connectivity solving, transit distances and pass scheduling
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Simulation ownership, tick loop and random layouts
pub mod simulation;
/// Grid coordinates and the per-cell position cache
pub mod spatial;
/// Grid objects, the game grid and its change log
pub mod world;

pub use io::error::{Result, TowerError};
pub use simulation::tower::{SimulationConfig, Tower};
