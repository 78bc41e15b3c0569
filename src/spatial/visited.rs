//! Bit-packed visited flags for region traversal

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::point::Point;

/// Per-cell visited flags for region traversal
///
/// One bit per grid cell, laid out with the same `x + y * width` indexing
/// as the matrix it shadows. Out-of-range points are never marked.
#[derive(Clone, Debug)]
pub struct VisitMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl VisitMask {
    /// Create a mask with every cell unvisited
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Width of the shadowed grid
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the shadowed grid
    pub const fn height(&self) -> usize {
        self.height
    }

    const fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x + y * self.width)
    }

    /// Mark a cell as visited
    ///
    /// Returns `true` only when the cell was in range and not yet marked
    pub fn mark(&mut self, point: Point) -> bool {
        let Some(index) = self.index(point) else {
            return false;
        };
        if self.bits.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test whether a cell has been visited
    pub fn is_marked(&self, point: Point) -> bool {
        self.index(point)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Reset every cell to unvisited
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Count visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cell is visited
    pub fn is_clear(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for VisitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitMask({}x{}, {} visited)",
            self.width,
            self.height,
            self.count()
        )
    }
}
