//! Integer grid coordinates and the four orthogonal directions

use std::fmt;

/// Signed grid coordinate
///
/// Signed so that neighbors of edge cells can be expressed; such points
/// simply fall outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Horizontal position, growing to the right
    pub x: i32,
    /// Vertical position, growing upward
    pub y: i32,
}

impl Point {
    /// Create a point from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point moved by the given offset
    ///
    /// Saturates at the `i32` limits; such points lie outside any grid.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Adjacent point in a direction
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let [dx, dy] = direction.delta();
        self.offset(dx, dy)
    }

    /// The four orthogonal neighbors in plus-shape order (left, up, right, down)
    pub const fn plus(self) -> [Self; 4] {
        [
            self.step(Direction::Left),
            self.step(Direction::Up),
            self.step(Direction::Right),
            self.step(Direction::Down),
        ]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal step direction with `y` pointing up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative `x`
    Left,
    /// Positive `y`
    Up,
    /// Positive `x`
    Right,
    /// Negative `y`
    Down,
}

impl Direction {
    /// All directions in plus-shape order
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// Coordinate delta `[dx, dy]` of one step
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::Left => [-1, 0],
            Self::Up => [0, 1],
            Self::Right => [1, 0],
            Self::Down => [0, -1],
        }
    }

    /// Lowercase name used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        }
    }
}
