//! Colored puzzle cell stored in level matrices

use std::fmt;

use crate::spatial::matrix::MatrixItem;
use crate::spatial::point::Point;

/// Index into a level palette
pub type ColorId = u8;

/// Single colored tile
///
/// Equality compares colors only, so two cells of the same color belong to
/// the same region regardless of where they are stored.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    color: ColorId,
    position: Point,
}

impl Cell {
    /// Create an unplaced cell of a color
    pub const fn new(color: ColorId) -> Self {
        Self {
            color,
            position: Point::new(0, 0),
        }
    }

    /// Palette index of this cell
    pub const fn color(&self) -> ColorId {
        self.color
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for Cell {}

impl MatrixItem for Cell {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.color, self.position)
    }
}
