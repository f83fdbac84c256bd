//! Horizontal distance from every cell to the nearest transit-connected cell
//!
//! Tenants walk along their floor to reach an elevator or stair, so distance
//! is measured within a floor only. Floors with no connected cell are
//! unreachable and get `f32::INFINITY`.

use crate::spatial::cache::GridPositionCache;
use crate::spatial::point::GridPoint;

/// Distances along one floor given its connectivity flags
///
/// Two sweeps: left to right carrying the distance since the last connected
/// cell, then right to left taking the minimum.
pub fn floor_distances(connected: &[bool]) -> Vec<f32> {
    let mut distances = vec![f32::INFINITY; connected.len()];

    let mut last = f32::INFINITY;
    for (distance, &is_connected) in distances.iter_mut().zip(connected) {
        last = if is_connected { 0.0 } else { last + 1.0 };
        *distance = last;
    }

    last = f32::INFINITY;
    for (distance, &is_connected) in distances.iter_mut().zip(connected).rev() {
        last = if is_connected { 0.0 } else { last + 1.0 };
        *distance = distance.min(last);
    }

    distances
}

/// Store `distance_from_transit` for every cell of the cache
///
/// Reads the connectivity flags left by the last connectivity pass.
pub fn update_transit_distances(cache: &mut GridPositionCache) {
    let (_, rows) = cache.dimensions();

    for y in 0..rows as i32 {
        let connected: Vec<bool> = cache
            .floor(y)
            .map(|position| position.connected_to_transit)
            .collect();

        for (x, distance) in floor_distances(&connected).into_iter().enumerate() {
            cache.set_transit_distance(GridPoint::new(x as i32, y), distance);
        }
    }
}
