//! Fixed-size 2D element storage with bounds-checked access
//!
//! Cells live in one contiguous row-major buffer, so the flat index of
//! `(x, y)` is `x + y * width`. The origin is the bottom-left cell, `x` grows
//! to the right and `y` grows upward. Reads outside the grid yield `None`;
//! writes outside the grid are rejected with an error.

use ndarray::Array2;
use std::collections::HashSet;

use crate::algorithm::region::RegionSearch;
use crate::io::configuration::MAX_MATRIX_DIMENSION;
use crate::io::error::{MatrixError, Result};
use crate::spatial::point::Point;

/// Element that can be stored in a [`Matrix`]
///
/// Region search groups neighboring elements with `PartialEq`, so the
/// equality should express "same region" rather than full identity.
pub trait MatrixItem: PartialEq {
    /// Coordinate stamped by the last [`Matrix::set`]
    fn position(&self) -> Point;

    /// Record the coordinate the element was stored at
    fn set_position(&mut self, position: Point);
}

/// 2D grid of optional elements
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    /// Slots indexed by `[y, x]`
    items: Array2<Option<T>>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// Create an empty 0x0 matrix
    pub fn new() -> Self {
        Self {
            items: Array2::from_shape_simple_fn((0, 0), || None),
        }
    }

    /// Create a matrix with every slot empty
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_MATRIX_DIMENSION`
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self> {
        let mut matrix = Self::new();
        matrix.resize(width, height)?;
        Ok(matrix)
    }

    /// Reallocate storage for `width * height` slots
    ///
    /// Previous contents are discarded, including cells that would still fit.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_MATRIX_DIMENSION`
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if width > MAX_MATRIX_DIMENSION || height > MAX_MATRIX_DIMENSION {
            return Err(MatrixError::InvalidDimensions {
                width,
                height,
                reason: format!("dimensions are limited to {MAX_MATRIX_DIMENSION}"),
            });
        }

        self.items = Array2::from_shape_simple_fn((height, width), || None);
        log::debug!("Resized matrix to {width}x{height}");
        Ok(())
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.items.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.items.nrows()
    }

    /// Total slot count (`width * height`)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if the matrix has no slots at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count slots holding an element
    pub fn occupied(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }

    // Converts a signed coordinate into (column, row) when in range
    fn cell(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some((col, row))
    }

    /// Test if a coordinate lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some()
    }

    /// Flat buffer index `x + y * width`, or `None` outside the grid
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.cell(x, y).map(|(col, row)| col + row * self.width())
    }

    /// Element at a coordinate
    ///
    /// Returns `None` both for empty slots and for coordinates outside the
    /// grid; out-of-range reads are never an error.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        let (col, row) = self.cell(x, y)?;
        self.items.get([row, col]).and_then(Option::as_ref)
    }

    /// Element at a point
    pub fn get_at(&self, point: Point) -> Option<&T> {
        self.get(point.x, point.y)
    }

    /// Mutable element at a coordinate
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        let (col, row) = self.cell(x, y)?;
        self.items.get_mut([row, col]).and_then(Option::as_mut)
    }

    /// Remove and return the element at a coordinate, leaving the slot empty
    pub fn take(&mut self, x: i32, y: i32) -> Option<T> {
        let (col, row) = self.cell(x, y)?;
        self.items.get_mut([row, col]).and_then(Option::take)
    }

    /// Occupied cells with their coordinates, in flat index order
    pub fn cells(&self) -> impl Iterator<Item = (Point, &T)> {
        self.items.indexed_iter().filter_map(|((row, col), slot)| {
            slot.as_ref().map(|item| (Point::new(col as i32, row as i32), item))
        })
    }

    /// Orthogonal neighbors in the order left, up, right, down
    ///
    /// Neighbors outside the grid or in empty slots are `None`.
    pub fn plus_neighbors(&self, x: i32, y: i32) -> [Option<&T>; 4] {
        self.plus_neighbors_at(Point::new(x, y))
    }

    /// Plus shape around a point, see [`Matrix::plus_neighbors`]
    pub fn plus_neighbors_at(&self, point: Point) -> [Option<&T>; 4] {
        point.plus().map(|neighbor| self.get_at(neighbor))
    }
}

impl<T: MatrixItem> Matrix<T> {
    /// Store an element, stamping it with its coordinate
    ///
    /// Any element previously in the slot is dropped.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid; the
    /// matrix is left unchanged
    pub fn set(&mut self, x: i32, y: i32, mut item: T) -> Result<()> {
        let point = Point::new(x, y);
        let (width, height) = (self.width(), self.height());

        let slot = self
            .cell(x, y)
            .and_then(|(col, row)| self.items.get_mut([row, col]));

        let Some(slot) = slot else {
            log::warn!("Rejected write to {point} outside {width}x{height} matrix");
            return Err(MatrixError::OutOfBounds {
                point,
                width,
                height,
            });
        };

        item.set_position(point);
        *slot = Some(item);
        Ok(())
    }

    /// Store an element at a point
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the point lies outside the grid
    pub fn set_at(&mut self, point: Point, item: T) -> Result<()> {
        self.set(point.x, point.y, item)
    }

    /// Coordinates of the 4-connected region of equal elements around a cell
    ///
    /// The start cell is always part of the result when it holds an element.
    /// An empty or out-of-range start yields an empty set.
    pub fn similar_region(&self, x: i32, y: i32) -> HashSet<Point> {
        self.similar_region_at(Point::new(x, y))
    }

    /// Region around a point, see [`Matrix::similar_region`]
    pub fn similar_region_at(&self, start: Point) -> HashSet<Point> {
        RegionSearch::for_matrix(self).search(self, start)
    }
}
