//! Level loading from text grids and PNG images
//!
//! Both formats list rows top to bottom, while the matrix origin is the
//! bottom-left cell, so the first row read becomes the highest `y`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::algorithm::generation::random_matrix;
use crate::io::configuration::{DEFAULT_PALETTE, EMPTY_SYMBOL, MAX_COLOR_COUNT, PNG_EXTENSION};
use crate::io::error::{MatrixError, Result, invalid_level};
use crate::spatial::cell::{Cell, ColorId};
use crate::spatial::matrix::Matrix;
use crate::spatial::point::Point;

/// Populated puzzle grid with its palette
#[derive(Debug, Clone)]
pub struct Level {
    /// Cells keyed by coordinate
    pub matrix: Matrix<Cell>,
    /// RGBA color for each color id
    pub palette: Vec<[u8; 4]>,
}

fn default_palette(color_count: usize) -> Vec<[u8; 4]> {
    DEFAULT_PALETTE
        .iter()
        .cycle()
        .take(color_count)
        .copied()
        .collect()
}

impl Level {
    /// Parse a text level
    ///
    /// Each non-blank line is a row; `.` marks an empty slot and every other
    /// character is a color symbol. Ids follow first appearance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source contains no rows
    /// - Rows differ in length or contain whitespace
    /// - More than `MAX_COLOR_COUNT` distinct symbols appear
    /// - The grid exceeds `MAX_MATRIX_DIMENSION`
    pub fn from_text(source: &str) -> Result<Self> {
        let rows: Vec<(usize, &str)> = source
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let Some(&(_, first_row)) = rows.first() else {
            return Err(MatrixError::InvalidSourceData {
                reason: "Level contains no rows".to_string(),
            });
        };

        let width = first_row.chars().count();
        let height = rows.len();
        let mut matrix = Matrix::with_dimensions(width, height)?;
        let mut symbols: Vec<char> = Vec::new();

        for (row_index, &(line, row)) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != width {
                return Err(invalid_level(
                    line,
                    &format!("expected {width} cells, found {length}"),
                ));
            }

            let y = (height - 1 - row_index) as i32;
            for (x, symbol) in row.chars().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                if symbol.is_whitespace() {
                    return Err(invalid_level(line, &"whitespace inside a row"));
                }

                let color = if let Some(id) = symbols.iter().position(|&known| known == symbol) {
                    id
                } else {
                    if symbols.len() >= MAX_COLOR_COUNT {
                        return Err(invalid_level(
                            line,
                            &format!("more than {MAX_COLOR_COUNT} distinct symbols"),
                        ));
                    }
                    symbols.push(symbol);
                    symbols.len() - 1
                };

                matrix.set(x as i32, y, Cell::new(color as ColorId))?;
            }
        }

        log::debug!(
            "Parsed {width}x{height} text level with {} colors",
            symbols.len()
        );

        Ok(Self {
            matrix,
            palette: default_palette(symbols.len()),
        })
    }

    /// Load a PNG level, one pixel per cell
    ///
    /// Fully transparent pixels are empty slots. Every other distinct RGBA
    /// value becomes a palette entry in order of first appearance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The PNG file cannot be loaded
    /// - The image holds more than `MAX_COLOR_COUNT` distinct colors
    /// - The image exceeds `MAX_MATRIX_DIMENSION`
    pub fn from_png(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .map_err(|e| MatrixError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();

        let mut matrix = Matrix::with_dimensions(width as usize, height as usize)?;
        let mut palette: Vec<[u8; 4]> = Vec::new();

        for (px, py, pixel) in img.enumerate_pixels() {
            let rgba = pixel.0;
            if rgba[3] == 0 {
                continue;
            }

            let color = if let Some(id) = palette.iter().position(|&known| known == rgba) {
                id
            } else {
                if palette.len() >= MAX_COLOR_COUNT {
                    return Err(MatrixError::InvalidSourceData {
                        reason: format!(
                            "Image '{}' has more than {MAX_COLOR_COUNT} colors",
                            path.display()
                        ),
                    });
                }
                palette.push(rgba);
                palette.len() - 1
            };

            let y = height - 1 - py;
            matrix.set(px as i32, y as i32, Cell::new(color as ColorId))?;
        }

        log::debug!(
            "Loaded {width}x{height} level from '{}' with {} colors",
            path.display(),
            palette.len()
        );

        Ok(Self { matrix, palette })
    }

    /// Load a level, choosing the format by file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> Result<Self> {
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION));

        if is_png {
            return Self::from_png(path);
        }

        let source = fs::read_to_string(path).map_err(|e| MatrixError::FileSystem {
            path: path.to_path_buf(),
            operation: "read level",
            source: e,
        })?;
        Self::from_text(&source)
    }

    /// Generate a random level using the default palette
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are rejected by `random_matrix`
    pub fn random(width: usize, height: usize, color_count: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            matrix: random_matrix(width, height, color_count, seed)?,
            palette: default_palette(color_count),
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.matrix.height()
    }

    /// RGBA color of the cell at a point, `None` for empty or outside cells
    pub fn color_of(&self, point: Point) -> Option<[u8; 4]> {
        self.matrix
            .get_at(point)
            .and_then(|cell| self.palette.get(usize::from(cell.color())).copied())
    }

    /// Distinct color ids present in the level
    pub fn colors_in_use(&self) -> HashSet<ColorId> {
        self.matrix.cells().map(|(_, cell)| cell.color()).collect()
    }
}
