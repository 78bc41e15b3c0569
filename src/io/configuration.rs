//! Grid limits, level format symbols and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_MATRIX_DIMENSION: usize = 10_000;

/// Number of distinct color ids a level can hold (ids are `u8`)
pub const MAX_COLOR_COUNT: usize = 256;

// Level text format
/// Symbol marking an empty slot in text levels
pub const EMPTY_SYMBOL: char = '.';
/// File extension that selects the PNG level loader
pub const PNG_EXTENSION: &str = "png";

/// Palette assigned to text and random levels, cycled when exhausted
pub const DEFAULT_PALETTE: [[u8; 4]; 8] = [
    [230, 57, 70, 255],
    [42, 157, 143, 255],
    [69, 123, 157, 255],
    [244, 162, 97, 255],
    [233, 196, 106, 255],
    [131, 56, 236, 255],
    [38, 70, 83, 255],
    [241, 250, 238, 255],
];

/// Color painted over region cells in exported images
pub const HIGHLIGHT_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Color of empty slots in exported images
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];

// Default values for configurable parameters
/// Fixed seed for reproducible random levels
pub const DEFAULT_SEED: u64 = 42;
/// Default random level width
pub const DEFAULT_WIDTH: usize = 12;
/// Default random level height
pub const DEFAULT_HEIGHT: usize = 12;
/// Default number of colors in a random level
pub const DEFAULT_COLOR_COUNT: usize = 4;

// Output settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_region";
/// File stem used for exports of generated levels
pub const RANDOM_LEVEL_STEM: &str = "random";
