//! Command-line interface for inspecting regions and plus shapes of a level

use crate::algorithm::region::connected_regions;
use crate::io::configuration::{
    DEFAULT_COLOR_COUNT, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_SUFFIX,
    PNG_EXTENSION, RANDOM_LEVEL_STEM,
};
use crate::io::error::{MatrixError, Result};
use crate::io::image::export_region_as_png;
use crate::io::level::Level;
use crate::spatial::cell::{Cell, ColorId};
use crate::spatial::point::{Direction, Point};
use clap::Parser;
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fillgrid")]
#[command(
    author,
    version,
    about = "Inspect flood-fill regions and plus shapes of a color-fill level"
)]
/// Command-line arguments for the level inspector
pub struct Cli {
    /// Text or PNG level file; a random level is generated when omitted
    #[arg(value_name = "LEVEL")]
    pub target: Option<PathBuf>,

    /// Column of the inspected cell
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub x: i32,

    /// Row of the inspected cell, counted from the bottom
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub y: i32,

    /// Width of a generated level
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height of a generated level
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of colors in a generated level
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Random seed for reproducible generated levels
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Export the level with the region highlighted to this PNG path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export next to the level as <level>_region.png
    #[arg(short, long)]
    pub export: bool,

    /// Also count every region in the level
    #[arg(short, long)]
    pub regions: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Inspected coordinate
    pub const fn start(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Where the highlighted image should be written, if anywhere
    ///
    /// An explicit `--output` wins over `--export`.
    pub fn export_path(&self) -> Option<PathBuf> {
        if let Some(output) = &self.output {
            return Some(output.clone());
        }
        self.export.then(|| match &self.target {
            Some(target) => Self::get_output_path(target),
            None => PathBuf::from(format!("{RANDOM_LEVEL_STEM}{OUTPUT_SUFFIX}.{PNG_EXTENSION}")),
        })
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            PNG_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Result of inspecting one cell
#[derive(Debug, Clone)]
pub struct Report {
    /// Level dimensions (width, height)
    pub dimensions: (usize, usize),
    /// Inspected coordinate
    pub start: Point,
    /// Region containing the inspected cell
    pub region: HashSet<Point>,
    /// Color ids of the plus shape (left, up, right, down)
    pub neighbors: [Option<ColorId>; 4],
    /// Number of regions in the whole level, when requested
    pub region_count: Option<usize>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "level: {}x{}", self.dimensions.0, self.dimensions.1)?;
        writeln!(f, "region at {}: {} cells", self.start, self.region.len())?;

        write!(f, "neighbors:")?;
        for (direction, neighbor) in Direction::ALL.iter().zip(&self.neighbors) {
            match neighbor {
                Some(color) => write!(f, " {}={color}", direction.name())?,
                None => write!(f, " {}=-", direction.name())?,
            }
        }

        if let Some(count) = self.region_count {
            write!(f, "\nregions: {count}")?;
        }
        Ok(())
    }
}

/// Drives one inspection according to CLI arguments
pub struct Inspector {
    cli: Cli,
}

impl Inspector {
    /// Create an inspector with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the target level, or generate one when no target is given
    ///
    /// # Errors
    ///
    /// Returns an error if the level cannot be loaded or generated
    pub fn load_level(&self) -> Result<Level> {
        match &self.cli.target {
            Some(target) => Level::from_path(target),
            None => Level::random(
                self.cli.width,
                self.cli.height,
                self.cli.colors,
                self.cli.seed,
            ),
        }
    }

    /// Inspect a loaded level without side effects
    pub fn inspect(&self, level: &Level) -> Report {
        let start = self.cli.start();
        let region = level.matrix.similar_region_at(start);
        let neighbors = level
            .matrix
            .plus_neighbors_at(start)
            .map(|neighbor| neighbor.map(Cell::color));
        let region_count = self
            .cli
            .regions
            .then(|| connected_regions(&level.matrix).len());

        Report {
            dimensions: (level.width(), level.height()),
            start,
            region,
            neighbors,
            region_count,
        }
    }

    /// Load, inspect, optionally export, and write the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if loading, exporting or writing the report fails
    pub fn run(&self, out: &mut impl Write) -> Result<Report> {
        let level = self.load_level()?;
        let report = self.inspect(&level);

        if let Some(path) = self.cli.export_path() {
            export_region_as_png(&level, &report.region, &path)?;
        }

        writeln!(out, "{report}").map_err(|e| MatrixError::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write report",
            source: e,
        })?;

        Ok(report)
    }
}
