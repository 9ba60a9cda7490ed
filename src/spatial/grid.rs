//! Square boolean grids expanded from raw bits
//!
//! The raw sample only holds the cells a symmetry mode cannot reconstruct.
//! [`map_bits`] reads each output cell from its source position so every
//! mode shares one expansion loop.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::error::{Result, TilehashError, invalid_parameter};
use crate::spatial::symmetry::SymmetryMode;

/// Square grid of filled and empty tiles, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    /// Tiles per side
    pub fn dimension(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether the tile at `(row, col)` is filled; out-of-range cells read as empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).copied().unwrap_or(false)
    }

    /// Number of filled tiles
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Underlying cell matrix
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Coordinates of all filled tiles in row-major order
    pub fn filled_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), &cell)| cell.then_some((row, col)))
    }

    /// Check that the grid matches its own reflections under `mode`
    pub fn is_symmetric(&self, mode: SymmetryMode) -> bool {
        let last = self.dimension().saturating_sub(1);
        self.cells.indexed_iter().all(|((row, col), &cell)| {
            let column_ok = !mode.mirrors_columns() || self.is_filled(row, last - col) == cell;
            let row_ok = !mode.mirrors_rows() || self.is_filled(last - row, col) == cell;
            column_ok && row_ok
        })
    }
}

/// Expand raw bits into a `dimension` x `dimension` grid
///
/// # Errors
///
/// Returns an error if:
/// - `dimension` is zero
/// - the number of bits differs from `mode.required_bits(dimension)`
pub fn map_bits(bits: &BitSlice<u8, Msb0>, dimension: usize, mode: SymmetryMode) -> Result<Grid> {
    if dimension == 0 {
        return Err(invalid_parameter(
            "dimension",
            &dimension,
            &"grid needs at least one tile per side",
        ));
    }

    let expected = mode.required_bits(dimension);
    if bits.len() != expected {
        return Err(TilehashError::BitLengthMismatch {
            expected,
            actual: bits.len(),
        });
    }

    let cells = Array2::from_shape_fn((dimension, dimension), |(row, col)| {
        bits.get(mode.source_index(dimension, row, col))
            .as_deref()
            == Some(&true)
    });

    Ok(Grid { cells })
}
