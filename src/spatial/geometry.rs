use crate::io::configuration::MAX_CANVAS_SIDE;
use crate::io::error::{Result, invalid_parameter};

/// Pixel layout of a rendered identicon
///
/// Each tile occupies a cell of `tile_size + 2 * tile_padding` pixels and the
/// whole grid is surrounded by `image_padding`. Paddings may be negative, in
/// which case neighbouring tiles overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Tiles per side
    pub tiles: u32,
    /// Side length of a painted tile
    pub tile_size: u32,
    /// Padding on every side of each tile
    pub tile_padding: i32,
    /// Padding around the whole grid
    pub image_padding: i32,
}

impl Geometry {
    /// Distance between the origins of adjacent tiles
    pub const fn tile_pitch(&self) -> i64 {
        self.tile_size as i64 + 2 * self.tile_padding as i64
    }

    /// Side length of the square canvas, possibly non-positive for degenerate paddings
    ///
    /// `None` when the tile count and sizes overflow `i64`.
    pub fn canvas_size(&self) -> Option<i64> {
        self.tile_pitch()
            .checked_mul(i64::from(self.tiles))?
            .checked_add(2 * i64::from(self.image_padding))
    }

    /// Canvas side length as an image dimension
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas side overflows, is not positive or
    /// exceeds [`MAX_CANVAS_SIDE`]
    pub fn canvas_side(&self) -> Result<u32> {
        let Some(size) = self.canvas_size() else {
            return Err(invalid_parameter(
                "canvas_size",
                &"overflow",
                &"tile count and sizes overflow the canvas arithmetic",
            ));
        };

        match u32::try_from(size) {
            Ok(side) if (1..=MAX_CANVAS_SIDE).contains(&side) => Ok(side),
            _ => Err(invalid_parameter(
                "canvas_size",
                &size,
                &format!("paddings and sizes must give a canvas of 1 to {MAX_CANVAS_SIDE} pixels"),
            )),
        }
    }

    /// Top-left pixel `(x, y)` of the painted square for tile `(row, col)`
    pub const fn tile_origin(&self, row: usize, col: usize) -> (i64, i64) {
        let offset = self.tile_padding as i64 + self.image_padding as i64;
        (
            col as i64 * self.tile_pitch() + offset,
            row as i64 * self.tile_pitch() + offset,
        )
    }
}
