//! Spatial data structures for identicon layout
//!
//! This module contains spatial-related functionality including:
//! - Symmetry modes and their index arithmetic
//! - Expansion of raw bits into square grids
//! - Pixel geometry of the rendered canvas

/// Canvas size and tile placement in pixels
pub mod geometry;
/// Square boolean grids expanded from raw bits
pub mod grid;
/// Mirror policies for grid expansion
pub mod symmetry;

pub use geometry::Geometry;
pub use grid::Grid;
pub use symmetry::SymmetryMode;
