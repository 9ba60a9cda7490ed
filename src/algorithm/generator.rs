use image::Rgba;

use crate::algorithm::search::search;
use crate::color::resolve;
use crate::io::error::Result;
use crate::io::options::Options;
use crate::io::style::Style;
use crate::spatial::grid::map_bits;
use crate::spatial::{Geometry, Grid};

/// Grid and resolved colors for one key, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    grid: Grid,
    background: Rgba<u8>,
    foreground: Rgba<u8>,
    geometry: Geometry,
    canvas_side: u32,
}

impl Identicon {
    /// Filled and empty tiles
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Canvas color
    pub const fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// Tile color
    pub const fn foreground(&self) -> Rgba<u8> {
        self.foreground
    }

    /// Pixel layout the identicon was generated for
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Side length of the square canvas in pixels
    pub const fn canvas_side(&self) -> u32 {
        self.canvas_side
    }
}

/// Derive the identicon for `key`
///
/// Options are validated before any hashing. The palette is only derived
/// when the tile or background color refers to it.
///
/// # Errors
///
/// Returns an error if:
/// - the tile count or tile size is zero, or the paddings leave no canvas
/// - the grid needs more bits than the digest can supply
/// - no seed byte yields a fill ratio inside the bounds
/// - either color fails to resolve
pub fn generate(key: &str, options: &Options) -> Result<Identicon> {
    options.validate()?;

    let geometry = options.geometry();
    let canvas_side = geometry.canvas_side()?;
    let dimension = options.tiles as usize;
    let mode = options.symmetry();

    let sample = search(
        key,
        mode.required_bits(dimension),
        options.fill_range(),
        options.needs_palette(),
    )?;
    let grid = map_bits(sample.bits(), dimension, mode)?;

    let background = resolve(options.background(), sample.palette())?;
    let foreground = resolve(&options.tile_color, sample.palette())?;

    log::debug!(
        "generated {dimension}x{dimension} {mode} identicon from seed {} ({} tiles filled)",
        sample.seed(),
        grid.filled_count()
    );

    Ok(Identicon {
        grid,
        background,
        foreground,
        geometry,
        canvas_side,
    })
}

/// Derive the identicon for `key` using a named preset
///
/// # Errors
///
/// Returns an error under the same conditions as [`generate`]
pub fn generate_with_style(key: &str, style: Style) -> Result<Identicon> {
    generate(key, &style.options())
}

/// Derive the identicon for `key`, for callers whose options are known to be valid
///
/// # Panics
///
/// Panics if [`generate`] returns an error
// Callers opt into aborting on invalid input
#[allow(clippy::panic)]
pub fn must_generate(key: &str, options: &Options) -> Identicon {
    match generate(key, options) {
        Ok(identicon) => identicon,
        Err(error) => panic!("failed to generate identicon: {error}"),
    }
}
