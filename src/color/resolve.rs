use image::Rgba;

use crate::color::palette::Palette;
use crate::color::spec::ColorSpec;
use crate::io::configuration::OPAQUE;
use crate::io::error::{Result, TilehashError};

/// Resolve a color specification to a concrete RGBA value
///
/// # Errors
///
/// Returns an error if:
/// - a palette index is not 0 or 1, or no palette was derived
/// - a hex string has fewer than six characters or non-hex digits among them
/// - a byte color has fewer than three channels
pub fn resolve(spec: &ColorSpec, palette: Option<&Palette>) -> Result<Rgba<u8>> {
    match spec {
        ColorSpec::Palette(index) => {
            palette
                .and_then(|colors| colors.get(*index))
                .ok_or(TilehashError::ColorIndexOutOfRange {
                    index: *index,
                    available: palette.map_or(0, |_| Palette::LEN),
                })
        }
        ColorSpec::Hex(value) => parse_hex(value),
        ColorSpec::Rgba(color) => Ok(*color),
        ColorSpec::Bytes(bytes) => match bytes.as_slice() {
            &[r, g, b, a, ..] => Ok(Rgba([r, g, b, a])),
            &[r, g, b] => Ok(Rgba([r, g, b, OPAQUE])),
            short => Err(TilehashError::InvalidColorBytes { len: short.len() }),
        },
    }
}

fn parse_hex(value: &str) -> Result<Rgba<u8>> {
    let invalid = || TilehashError::InvalidHexColor {
        value: value.to_string(),
    };

    let digits = value.get(..6).ok_or_else(invalid)?;
    let mut rgb = [0u8; 3];
    match hex::decode_to_slice(digits, &mut rgb) {
        Ok(()) => {
            let [r, g, b] = rgb;
            Ok(Rgba([r, g, b, OPAQUE]))
        }
        Err(_decode_error) => Err(invalid()),
    }
}
