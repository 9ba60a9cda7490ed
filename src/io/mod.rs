//! Options, presets, rendering, command-line interface and error handling

/// Command-line argument parsing and batch rendering
pub mod cli;
/// Hashing constants and option defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Raster rendering and PNG output
pub mod image;
/// Generation options and validation
pub mod options;
/// Batch progress display
pub mod progress;
/// Named option presets
pub mod style;
