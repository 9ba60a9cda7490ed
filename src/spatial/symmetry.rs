//! Mirror policies and the index arithmetic behind them
//!
//! Each mode stores only the cells it cannot reconstruct by reflection. For a
//! grid of dimension `D` let `mid = ceil(D / 2)`; an odd `D` keeps a single
//! unmirrored center row or column.

use std::fmt;

/// How a partial bit sequence is reflected into a full square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SymmetryMode {
    /// Every cell is stored
    None,
    /// Left half mirrored onto the right half
    #[default]
    Vertical,
    /// Top half mirrored onto the bottom half
    Horizontal,
    /// Top-left quadrant mirrored both ways
    Both,
}

impl SymmetryMode {
    /// Pick the mode matching the two option flags
    pub const fn from_flags(vertical: bool, horizontal: bool) -> Self {
        match (vertical, horizontal) {
            (true, true) => Self::Both,
            (true, false) => Self::Vertical,
            (false, true) => Self::Horizontal,
            (false, false) => Self::None,
        }
    }

    /// Whether columns are reflected about the vertical axis
    pub const fn mirrors_columns(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    /// Whether rows are reflected about the horizontal axis
    pub const fn mirrors_rows(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Number of raw bits needed for a grid of the given dimension
    pub const fn required_bits(self, dimension: usize) -> usize {
        let mid = dimension.div_ceil(2);
        match self {
            Self::None => dimension * dimension,
            Self::Vertical | Self::Horizontal => dimension * mid,
            Self::Both => mid * mid,
        }
    }

    /// Position in the raw bit sequence that supplies cell `(row, col)`
    ///
    /// `row` and `col` must be below `dimension`.
    pub const fn source_index(self, dimension: usize, row: usize, col: usize) -> usize {
        let mid = dimension.div_ceil(2);
        match self {
            Self::None => row * dimension + col,
            Self::Vertical => row * mid + source_column(dimension, col),
            Self::Horizontal => source_row(dimension, row) * dimension + col,
            Self::Both => source_row(dimension, row) * mid + source_column(dimension, col),
        }
    }
}

/// Stored column for `col` when the right half mirrors the left
const fn source_column(dimension: usize, col: usize) -> usize {
    let mid = dimension.div_ceil(2);
    if col < mid {
        return col;
    }

    let mut dist_middle = mid as isize - col as isize;
    if dimension % 2 != 0 {
        dist_middle -= 1;
    }
    mid - 1 - dist_middle.unsigned_abs()
}

/// Stored row for `row` when the bottom half mirrors the top
const fn source_row(dimension: usize, row: usize) -> usize {
    if row < dimension.div_ceil(2) {
        row
    } else {
        dimension - 1 - row
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}
