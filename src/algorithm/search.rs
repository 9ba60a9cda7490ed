//! Rejection sampling over a single seed byte
//!
//! Reading pixels straight from a digest occasionally yields a nearly empty
//! or nearly saturated glyph. The search appends a seed byte to the key and
//! walks it from 0 to 255 until the extracted bits land strictly inside the
//! fill window, which keeps the result a deterministic function of the key.

use bitvec::prelude::*;

use crate::algorithm::fold::fold;
use crate::color::palette::Palette;
use crate::io::configuration::{
    DEFAULT_MAX_FILL, DEFAULT_MIN_FILL, KEY_SEPARATOR, PALETTE_BYTES, SEED_SEARCH_SPACE,
};
use crate::io::error::{Result, TilehashError, invalid_parameter};

/// Open interval of acceptable fill ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRange {
    /// Exclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
}

impl Default for FillRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_FILL, DEFAULT_MAX_FILL)
    }
}

impl FillRange {
    /// Create a fill range from raw bounds
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Replace non-positive bounds with their defaults
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            min: if self.min > 0.0 { self.min } else { DEFAULT_MIN_FILL },
            max: if self.max > 0.0 { self.max } else { DEFAULT_MAX_FILL },
        }
    }

    /// Test whether a ratio lies strictly between the bounds
    pub fn contains(&self, ratio: f64) -> bool {
        self.min < ratio && ratio < self.max
    }
}

/// Bits and optional palette taken from the first accepted seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSample {
    bits: BitVec<u8, Msb0>,
    palette: Option<Palette>,
    seed: u8,
}

impl RawSample {
    /// Raw pixel bits in extraction order
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Palette derived alongside the bits, if one was requested
    pub const fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Seed byte that produced this sample
    pub const fn seed(&self) -> u8 {
        self.seed
    }

    /// Fraction of set bits
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }
}

/// Find the first seed whose bits satisfy the fill range
///
/// Needs `ceil(bit_length / 8)` folded bytes, plus six more when a palette is
/// requested; the palette bytes come first and the pixel bits follow,
/// most significant bit first.
///
/// # Errors
///
/// Returns an error if:
/// - `bit_length` is zero
/// - the required byte count exceeds the digest size
/// - none of the 256 seeds yields an acceptable fill ratio
pub fn search(
    key: &str,
    bit_length: usize,
    fill: FillRange,
    with_palette: bool,
) -> Result<RawSample> {
    if bit_length == 0 {
        return Err(invalid_parameter(
            "bit_length",
            &bit_length,
            &"at least one pixel bit is required",
        ));
    }

    let mut needed_bytes = bit_length.div_ceil(8);
    if with_palette {
        needed_bytes += PALETTE_BYTES;
    }

    let mut input = Vec::with_capacity(key.len() + 1);
    input.extend_from_slice(key.as_bytes());
    input.push(KEY_SEPARATOR);

    for seed in 0..=u8::MAX {
        // The separator slot carries the seed
        if let Some(slot) = input.last_mut() {
            *slot = seed;
        }

        let folded = fold(&input, needed_bytes)?;

        let (palette, pixel_bytes) = match folded.split_first_chunk::<PALETTE_BYTES>() {
            Some((color_bytes, rest)) if with_palette => {
                (Some(Palette::from_bytes(color_bytes)), rest)
            }
            _ => (None, folded.as_slice()),
        };

        let bits: BitVec<u8, Msb0> = pixel_bytes
            .view_bits::<Msb0>()
            .iter()
            .by_vals()
            .take(bit_length)
            .collect();

        let fill_ratio = bits.count_ones() as f64 / bit_length as f64;
        if fill.contains(fill_ratio) {
            log::debug!("seed {seed} accepted with fill ratio {fill_ratio:.3}");
            return Ok(RawSample {
                bits,
                palette,
                seed,
            });
        }

        log::trace!("seed {seed} rejected with fill ratio {fill_ratio:.3}");
    }

    Err(TilehashError::Unhashable {
        attempts: SEED_SEARCH_SPACE,
    })
}
