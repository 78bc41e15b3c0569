//! Flat-backed 2D grid with flood-fill region search for color-fill puzzles
//!
//! A [`Matrix`] stores one optional element per cell, finds the 4-connected
//! region of equal elements around a cell, and returns the plus shape of
//! orthogonal neighbors. Levels can be loaded from text or PNG files and
//! exported with a region highlighted.

#![forbid(unsafe_code)]

/// Region search and random level generation
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid container, coordinates and cell types
pub mod spatial;

pub use io::error::{MatrixError, Result};
pub use spatial::{Matrix, MatrixItem, Point};
