//! Level input, image output, configuration and error handling

/// Command-line arguments and the inspection driver
pub mod cli;
/// Grid limits, palette and runtime defaults
pub mod configuration;
/// Error types shared by the crate
pub mod error;
/// PNG export with region highlighting
pub mod image;
/// Text and PNG level loading
pub mod level;
/// Stderr backend for the `log` facade
pub mod logging;
