//! Noise diffusion kernel
//!
//! The second noise pass reads a snapshot of first-pass maxima and never the
//! values it is producing, so a cell's result does not depend on iteration
//! order.

use crate::io::configuration::{NOISE_FALLOFF, NOISE_RADIUS};
use ndarray::Array2;

/// Attenuation applied to noise travelling `distance` cells
pub fn attenuation(distance: usize) -> f32 {
    NOISE_FALLOFF.powi(distance as i32)
}

/// Diffused noise at `[x, y]` from first-pass maxima
///
/// The result is the loudest of the cell's own maximum and every neighbour
/// within `NOISE_RADIUS` (Chebyshev distance) attenuated by distance.
/// Out-of-range coordinates read as silent.
pub fn diffused_noise(max_levels: &Array2<f32>, x: usize, y: usize) -> f32 {
    let own = max_levels.get([x, y]).copied().unwrap_or(0.0);

    let mut level = own;
    for nx in x.saturating_sub(NOISE_RADIUS)..=x + NOISE_RADIUS {
        for ny in y.saturating_sub(NOISE_RADIUS)..=y + NOISE_RADIUS {
            if nx == x && ny == y {
                continue;
            }

            if let Some(&neighbour) = max_levels.get([nx, ny])
                && neighbour > level
            {
                let distance = nx.abs_diff(x).max(ny.abs_diff(y));
                level = level.max(neighbour * attenuation(distance));
            }
        }
    }

    level
}
