//! Generation options and their validation

use crate::algorithm::search::FillRange;
use crate::color::ColorSpec;
use crate::io::configuration::{
    DEFAULT_IMAGE_PADDING, DEFAULT_MAX_FILL, DEFAULT_MIN_FILL, DEFAULT_TILE_PADDING,
    DEFAULT_TILE_SIZE, DEFAULT_TILES,
};
use crate::io::error::{Result, TilehashError};
use crate::spatial::{Geometry, SymmetryMode};

static TRANSPARENT_BACKGROUND: ColorSpec = ColorSpec::TRANSPARENT;

/// Parameters controlling grid size, colors, layout and fill bounds
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Tiles per side
    pub tiles: u32,
    /// Side length of each tile in pixels
    pub tile_size: u32,
    /// Color of filled tiles
    pub tile_color: ColorSpec,
    /// Canvas color; transparent when absent
    pub background_color: Option<ColorSpec>,
    /// Padding on every side of each tile, may be negative
    pub tile_padding: i32,
    /// Padding around the whole grid, may be negative
    pub image_padding: i32,
    /// Exclusive lower fill bound; non-positive means default
    pub min_fill: f64,
    /// Exclusive upper fill bound; non-positive means default
    pub max_fill: f64,
    /// Mirror the left half onto the right
    pub vertical_symmetry: bool,
    /// Mirror the top half onto the bottom
    pub horizontal_symmetry: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tiles: DEFAULT_TILES,
            tile_size: DEFAULT_TILE_SIZE,
            tile_color: ColorSpec::Palette(0),
            background_color: None,
            tile_padding: DEFAULT_TILE_PADDING,
            image_padding: DEFAULT_IMAGE_PADDING,
            min_fill: DEFAULT_MIN_FILL,
            max_fill: DEFAULT_MAX_FILL,
            vertical_symmetry: true,
            horizontal_symmetry: false,
        }
    }
}

impl Options {
    /// Symmetry mode implied by the two mirror flags
    pub const fn symmetry(&self) -> SymmetryMode {
        SymmetryMode::from_flags(self.vertical_symmetry, self.horizontal_symmetry)
    }

    /// Set both mirror flags from a symmetry mode
    pub const fn set_symmetry(&mut self, mode: SymmetryMode) {
        self.vertical_symmetry = mode.mirrors_columns();
        self.horizontal_symmetry = mode.mirrors_rows();
    }

    /// Fill bounds with non-positive values replaced by defaults
    pub fn fill_range(&self) -> FillRange {
        FillRange::new(self.min_fill, self.max_fill).normalized()
    }

    /// Pixel layout described by these options
    pub const fn geometry(&self) -> Geometry {
        Geometry {
            tiles: self.tiles,
            tile_size: self.tile_size,
            tile_padding: self.tile_padding,
            image_padding: self.image_padding,
        }
    }

    /// Background color, defaulting to fully transparent
    pub fn background(&self) -> &ColorSpec {
        self.background_color
            .as_ref()
            .unwrap_or(&TRANSPARENT_BACKGROUND)
    }

    /// Whether either color refers to the hash-derived palette
    pub fn needs_palette(&self) -> bool {
        self.tile_color.uses_palette() || self.background().uses_palette()
    }

    /// Check options that must hold before any hashing happens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the tile count is zero
    /// - the tile size is zero
    /// - the paddings leave no positive canvas
    pub fn validate(&self) -> Result<()> {
        if self.tiles < 1 {
            return Err(TilehashError::InvalidTileCount { value: self.tiles });
        }
        if self.tile_size < 1 {
            return Err(TilehashError::InvalidTileSize {
                value: self.tile_size,
            });
        }
        self.geometry().canvas_side()?;
        Ok(())
    }
}
