//! Ship geometry: footprints and the buffer halo around them.
//!
//! Every shape here is an explicit, finite `Vec<Coord>` computed eagerly.

use alloc::vec::Vec;

use crate::engine::common::Coord;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight ship described by its top-left anchor, orientation and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    anchor: Coord,
    orientation: Orientation,
    size: usize,
}

impl Ship {
    /// `size` must be at least 1.
    pub const fn new(anchor: Coord, orientation: Orientation, size: usize) -> Self {
        Self {
            anchor,
            orientation,
            size,
        }
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Last cell of the ship, or `None` if it would lie past `usize::MAX` or
    /// the ship has no cells.
    pub fn end(&self) -> Option<Coord> {
        let extent = self.size.checked_sub(1)?;
        match self.orientation {
            Orientation::Horizontal => {
                Some(Coord::new(self.anchor.x.checked_add(extent)?, self.anchor.y))
            }
            Orientation::Vertical => {
                Some(Coord::new(self.anchor.x, self.anchor.y.checked_add(extent)?))
            }
        }
    }

    /// Whether the whole ship lies inside a `grid`×`grid` grid.
    pub fn fits(&self, grid: usize) -> bool {
        self.end().is_some_and(|end| end.x < grid && end.y < grid)
    }

    /// Cells covered by the ship, from anchor to end.
    pub fn cells(&self) -> Vec<Coord> {
        self.end()
            .map_or_else(Vec::new, |end| segment(self.anchor, end))
    }

    /// Buffer cells around the ship, clipped to the grid.
    pub fn halo(&self, grid: usize) -> Vec<Coord> {
        self.end()
            .map_or_else(Vec::new, |end| halo(self.anchor, end, grid))
    }
}

/// Cells of the axis-aligned segment from `p0` to `p1` inclusive.
///
/// `p0` and `p1` must share a row or a column. The walk runs from `p0`
/// towards `p1` whichever way round they are.
pub fn segment(p0: Coord, p1: Coord) -> Vec<Coord> {
    debug_assert!(p0.x == p1.x || p0.y == p1.y, "segment must be axis aligned");
    if p0.x == p1.x {
        let ys: Vec<usize> = if p0.y <= p1.y {
            (p0.y..=p1.y).collect()
        } else {
            (p1.y..=p0.y).rev().collect()
        };
        ys.into_iter().map(|y| Coord::new(p0.x, y)).collect()
    } else {
        let xs: Vec<usize> = if p0.x <= p1.x {
            (p0.x..=p1.x).collect()
        } else {
            (p1.x..=p0.x).rev().collect()
        };
        xs.into_iter().map(|x| Coord::new(x, p0.y)).collect()
    }
}

/// Halo of the segment between `p0` and `p1` on a `grid`×`grid` grid.
///
/// Covers the row segment above and below the ship plus the column segment
/// left and right of it. Corner cells are not included, so two ships may
/// touch diagonally but never along an edge.
pub fn halo(p0: Coord, p1: Coord, grid: usize) -> Vec<Coord> {
    let lo = Coord::new(p0.x.min(p1.x), p0.y.min(p1.y));
    let hi = Coord::new(p0.x.max(p1.x), p0.y.max(p1.y));
    let mut out = Vec::new();
    if grid == 0 {
        return out;
    }
    // walk only the part of each side that lies on the grid
    if lo.x < grid {
        let rows = [lo.y.checked_sub(1), hi.y.checked_add(1)];
        for y in rows.into_iter().flatten().filter(|&y| y < grid) {
            out.extend(segment(Coord::new(lo.x, y), Coord::new(hi.x.min(grid - 1), y)));
        }
    }
    if lo.y < grid {
        let cols = [lo.x.checked_sub(1), hi.x.checked_add(1)];
        for x in cols.into_iter().flatten().filter(|&x| x < grid) {
            out.extend(segment(Coord::new(x, lo.y), Coord::new(x, hi.y.min(grid - 1))));
        }
    }
    out
}
