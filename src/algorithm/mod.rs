/// Interval timer for recurring passes
pub mod action;
/// Bitset over object handles
pub mod bitset;
/// Horizontal distance from transit-connected cells
pub mod transit_distance;
/// Transit connectivity solver
pub mod transport;
