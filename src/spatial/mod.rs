//! Spatial data structures for puzzle grids
//!
//! This module contains spatial-related functionality including:
//! - Coordinates and orthogonal directions
//! - The flat-backed matrix container
//! - Visited masks for traversal
//! - The colored cell element

/// Colored cell element used by levels
pub mod cell;
/// Matrix container and element trait
pub mod matrix;
/// Coordinates and plus-shape directions
pub mod point;
/// Bit-packed visited flags
pub mod visited;

pub use matrix::{Matrix, MatrixItem};
pub use point::{Direction, Point};
