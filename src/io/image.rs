//! PNG export of a level with a highlighted region

use image::{Rgba, RgbaImage};
use std::collections::HashSet;
use std::path::Path;

use crate::io::configuration::{EMPTY_COLOR, HIGHLIGHT_COLOR};
use crate::io::error::{MatrixError, Result};
use crate::io::level::Level;
use crate::spatial::point::Point;

/// Export a level as a PNG with region cells painted in the highlight color
///
/// One pixel per cell; the image is flipped vertically so the matrix origin
/// ends up in the bottom-left corner. Empty slots are transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The level has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_region_as_png(
    level: &Level,
    region: &HashSet<Point>,
    output_path: &Path,
) -> Result<()> {
    if level.matrix.is_empty() {
        return Err(MatrixError::InvalidSourceData {
            reason: "Level has no cells to export".to_string(),
        });
    }

    let width = level.width() as u32;
    let height = level.height() as u32;
    let mut img = RgbaImage::new(width, height);

    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let point = Point::new(px as i32, (height - 1 - py) as i32);
        let color = if region.contains(&point) {
            HIGHLIGHT_COLOR
        } else {
            level.color_of(point).unwrap_or(EMPTY_COLOR)
        };
        *pixel = Rgba(color);
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MatrixError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MatrixError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!(
        "Exported {width}x{height} level with {} highlighted cells to '{}'",
        region.len(),
        output_path.display()
    );
    Ok(())
}
