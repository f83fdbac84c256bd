//! PNG overlays of per-cell cache state
//!
//! Each cell becomes an `OVERLAY_SCALE`-pixel square. Floor zero is drawn at
//! the bottom of the image.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::io::configuration::OVERLAY_SCALE;
use crate::io::error::{Result, TowerError};
use crate::spatial::cache::GridPositionCache;
use crate::spatial::position::GridPosition;

/// Which per-cell value to draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayLayer {
    /// Occupied cells, shaded by occupant count
    Occupancy,
    /// Transit-connected cells
    Connectivity,
    /// Diffused noise level
    Noise,
    /// Normalized distance from transit
    TransitDistance,
}

impl OverlayLayer {
    /// Every layer, in export order
    pub const ALL: [Self; 4] = [
        Self::Occupancy,
        Self::Connectivity,
        Self::Noise,
        Self::TransitDistance,
    ];

    /// File stem used when exporting this layer
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Occupancy => "occupancy",
            Self::Connectivity => "connectivity",
            Self::Noise => "noise",
            Self::TransitDistance => "transit_distance",
        }
    }

    /// Colour of one cell in this layer
    pub fn color(self, position: &GridPosition) -> Rgba<u8> {
        const EMPTY: Rgba<u8> = Rgba([24, 24, 32, 255]);

        match self {
            Self::Occupancy => match position.len() {
                0 => EMPTY,
                1 => Rgba([120, 144, 156, 255]),
                _ => Rgba([236, 239, 241, 255]),
            },
            Self::Connectivity => match (position.connected_to_transit, position.is_empty()) {
                (true, _) => Rgba([76, 175, 80, 255]),
                (false, false) => Rgba([229, 57, 53, 255]),
                (false, true) => EMPTY,
            },
            Self::Noise => {
                let intensity = (position.noise_level().clamp(0.0, 1.0) * 255.0) as u8;
                Rgba([intensity, intensity / 3, 0, 255])
            }
            Self::TransitDistance => {
                let distance = position.normalized_distance_from_transit.clamp(0.0, 1.0);
                let intensity = (distance * 255.0) as u8;
                Rgba([intensity, 0, 255 - intensity, 255])
            }
        }
    }
}

/// Render one layer of the cache into an image
///
/// # Errors
///
/// Returns `EmptyGrid` if the cache has no cells
pub fn render_overlay(cache: &GridPositionCache, layer: OverlayLayer) -> Result<RgbaImage> {
    let (columns, rows) = cache.dimensions();
    if columns == 0 || rows == 0 {
        return Err(TowerError::EmptyGrid {
            operation: "render overlay",
        });
    }

    let width = columns as u32 * OVERLAY_SCALE;
    let height = rows as u32 * OVERLAY_SCALE;
    let mut img = RgbaImage::new(width, height);

    for position in cache.positions() {
        let point = position.point();
        let color = layer.color(position);
        let left = point.x as u32 * OVERLAY_SCALE;
        let top = (rows as u32 - 1 - point.y as u32) * OVERLAY_SCALE;

        for dx in 0..OVERLAY_SCALE {
            for dy in 0..OVERLAY_SCALE {
                img.put_pixel(left + dx, top + dy, color);
            }
        }
    }

    Ok(img)
}

/// Render one layer and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The cache has no cells
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_overlay(cache: &GridPositionCache, layer: OverlayLayer, path: &Path) -> Result<()> {
    let img = render_overlay(cache, layer)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TowerError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| TowerError::OverlayExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Export every layer into `directory` as `<layer>.png`
///
/// # Errors
///
/// Returns the first export failure
pub fn export_all_overlays(cache: &GridPositionCache, directory: &Path) -> Result<Vec<PathBuf>> {
    OverlayLayer::ALL
        .iter()
        .map(|layer| {
            let path = directory.join(format!("{}.png", layer.file_stem()));
            export_overlay(cache, *layer, &path).map(|()| path)
        })
        .collect()
}
