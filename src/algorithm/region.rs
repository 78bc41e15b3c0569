//! Flood-fill search for 4-connected regions of equal elements
//!
//! Traversal is depth-first with an explicit stack, so region size is bounded
//! by heap memory rather than call depth. Visited cells are tracked in a
//! [`VisitMask`] owned by the searcher and cleared after every search.

use std::collections::HashSet;

use crate::spatial::matrix::{Matrix, MatrixItem};
use crate::spatial::point::Point;
use crate::spatial::visited::VisitMask;

/// Reusable region searcher
///
/// Keeps its mask and stack allocations between searches. The mask is
/// resized automatically when used on a matrix of different dimensions.
#[derive(Debug, Clone)]
pub struct RegionSearch {
    considered: VisitMask,
    stack: Vec<Point>,
}

impl RegionSearch {
    /// Create a searcher for grids of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            considered: VisitMask::new(width, height),
            stack: Vec::new(),
        }
    }

    /// Create a searcher sized for a matrix
    pub fn for_matrix<T>(matrix: &Matrix<T>) -> Self {
        Self::new(matrix.width(), matrix.height())
    }

    /// Test whether a cell is currently marked as visited
    ///
    /// Always `false` between searches.
    pub fn is_considered(&self, point: Point) -> bool {
        self.considered.is_marked(point)
    }

    /// Test that no cell carries a visited mark
    pub fn is_clear(&self) -> bool {
        self.considered.is_clear()
    }

    /// Collect the region of elements equal to the one at `start`
    ///
    /// Neighbors join when they equal the element they were reached from.
    /// Empty slots never join. Returns an empty set when `start` is empty or
    /// outside the matrix.
    pub fn search<T: MatrixItem>(&mut self, matrix: &Matrix<T>, start: Point) -> HashSet<Point> {
        if self.considered.width() != matrix.width() || self.considered.height() != matrix.height()
        {
            self.considered = VisitMask::new(matrix.width(), matrix.height());
        }

        let region = self.collect(matrix, start);

        self.considered.clear();
        self.stack.clear();

        log::debug!("Region at {start} holds {} cells", region.len());
        region
    }

    // Leaves visited marks in place so callers can partition a whole grid
    fn collect<T: MatrixItem>(&mut self, matrix: &Matrix<T>, start: Point) -> HashSet<Point> {
        let mut region = HashSet::new();

        if matrix.get_at(start).is_none() || !self.considered.mark(start) {
            return region;
        }
        self.stack.push(start);

        while let Some(point) = self.stack.pop() {
            region.insert(point);
            let Some(current) = matrix.get_at(point) else {
                continue;
            };

            for neighbor in point.plus() {
                if self.considered.is_marked(neighbor) {
                    continue;
                }
                if matrix.get_at(neighbor).is_some_and(|item| item == current) {
                    self.considered.mark(neighbor);
                    self.stack.push(neighbor);
                }
            }
        }

        region
    }
}

/// Partition every occupied cell into its maximal region
///
/// Regions are ordered by the flat index of their first cell, so the result
/// is deterministic for a given matrix.
pub fn connected_regions<T: MatrixItem>(matrix: &Matrix<T>) -> Vec<HashSet<Point>> {
    let mut search = RegionSearch::for_matrix(matrix);
    let mut regions = Vec::new();

    for (point, _) in matrix.cells() {
        if search.considered.is_marked(point) {
            continue;
        }
        regions.push(search.collect(matrix, point));
    }

    log::debug!(
        "Partitioned {} occupied cells into {} regions",
        matrix.occupied(),
        regions.len()
    );
    regions
}
