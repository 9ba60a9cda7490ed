//! Deterministic identicons derived from text keys
//!
//! A key is hashed with SHA-512, folded to the number of bytes the grid needs
//! and re-seeded until the fraction of filled tiles falls inside the fill
//! bounds. The raw bits are mirrored into a square grid and paired with
//! colors taken from the same digest, so equal keys always give equal images.

#![forbid(unsafe_code)]

/// Hash folding, seed search and the generation pipeline
pub mod algorithm;
/// Color specifications and palette resolution
pub mod color;
/// Options, presets, rendering, command-line interface and error handling
pub mod io;
/// Mathematical utilities for color ordering
pub mod math;
/// Grid expansion, symmetry and pixel geometry
pub mod spatial;

pub use algorithm::generator::{Identicon, generate, generate_with_style, must_generate};
pub use color::ColorSpec;
pub use io::error::{Result, TilehashError};
pub use io::options::Options;
pub use io::style::Style;
pub use spatial::SymmetryMode;
