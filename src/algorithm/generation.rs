//! Seeded random level matrices

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::MAX_COLOR_COUNT;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::{Cell, ColorId};
use crate::spatial::matrix::Matrix;

/// Fill a matrix with uniformly random colors
///
/// Cells are drawn row by row from the bottom, so the same seed always
/// produces the same grid.
///
/// # Errors
///
/// Returns an error if:
/// - `color_count` is zero or exceeds `MAX_COLOR_COUNT`
/// - Either dimension exceeds `MAX_MATRIX_DIMENSION`
pub fn random_matrix(
    width: usize,
    height: usize,
    color_count: usize,
    seed: u64,
) -> Result<Matrix<Cell>> {
    if color_count == 0 || color_count > MAX_COLOR_COUNT {
        return Err(invalid_parameter(
            "color_count",
            &color_count,
            &format!("must be between 1 and {MAX_COLOR_COUNT}"),
        ));
    }

    let mut matrix = Matrix::with_dimensions(width, height)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for y in 0..height {
        for x in 0..width {
            let color = rng.random_range(0..color_count) as ColorId;
            matrix.set(x as i32, y as i32, Cell::new(color))?;
        }
    }

    log::debug!("Generated {width}x{height} matrix with {color_count} colors (seed {seed})");
    Ok(matrix)
}
