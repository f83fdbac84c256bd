//! Integer grid coordinates, extents and rectangular footprints
//!
//! `y` addresses the floor and `x` the column within a floor. Footprints are
//! half-open rectangles `[origin, origin + size)` so that a 1x1 object at
//! `(5, 5)` covers exactly the cell `(5, 5)`.

use std::fmt;
use std::ops::{Add, AddAssign, Range, Sub};

/// Integer cell coordinate on the tower grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Column
    pub x: i32,
    /// Floor
    pub y: i32,
}

impl GridPoint {
    /// The grid origin `(0, 0)`
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a point from its column and floor
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point horizontally by `dx` cells
    #[must_use]
    pub const fn step_x(self, dx: i32) -> Self {
        Self::new(self.x + dx, self.y)
    }
}

impl Add for GridPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for GridPoint {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for GridPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height in cells, used for grid bounds and object extents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Extent along x
    pub width: i32,
    /// Extent along y
    pub height: i32,
}

impl GridSize {
    /// Extent of a single cell
    pub const SINGLE_CELL: Self = Self::new(1, 1);

    /// Create an extent
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when the extent covers no cells
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of covered cells, zero for degenerate extents
    pub const fn area(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Rectangle of cells covered by an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    /// Lowest covered cell (inclusive)
    pub origin: GridPoint,
    /// Covered extent
    pub size: GridSize,
}

impl Footprint {
    /// Create a footprint from its origin and extent
    pub const fn new(origin: GridPoint, size: GridSize) -> Self {
        Self { origin, size }
    }

    /// Check if a cell lies inside the footprint
    pub const fn contains(&self, point: GridPoint) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x.saturating_add(self.size.width)
            && point.y >= self.origin.y
            && point.y < self.origin.y.saturating_add(self.size.height)
    }

    /// Iterate every covered cell, row by row
    ///
    /// Extents reaching past `i32::MAX` stop at the last representable cell.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + use<> {
        let xs = self.origin.x..self.origin.x.saturating_add(self.size.width);
        let ys = self.origin.y..self.origin.y.saturating_add(self.size.height);
        ys.flat_map(move |y| xs.clone().map(move |x| GridPoint::new(x, y)))
    }

    /// Iterate the covered cells that fall inside an array of `columns` x `rows`
    pub fn clipped_points(
        &self,
        columns: usize,
        rows: usize,
    ) -> impl Iterator<Item = GridPoint> + use<> {
        let (xs, ys) = self.clipped_ranges(columns, rows);
        ys.flat_map(move |y| xs.clone().map(move |x| GridPoint::new(x as i32, y as i32)))
    }

    /// Index ranges of the cells that fall inside an array of `columns` x `rows`
    ///
    /// Both ranges are empty when the footprint lies entirely outside.
    pub fn clipped_ranges(&self, columns: usize, rows: usize) -> (Range<usize>, Range<usize>) {
        let clip = |start: i32, extent: i32, limit: usize| {
            let lower = usize::try_from(start.max(0)).unwrap_or(0);
            let upper = usize::try_from(start.saturating_add(extent).max(0))
                .unwrap_or(0)
                .min(limit);
            lower..upper.max(lower)
        };

        (
            clip(self.origin.x, self.size.width, columns),
            clip(self.origin.y, self.size.height, rows),
        )
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.size, self.origin)
    }
}
