use image::Rgba;

use crate::io::configuration::{OPAQUE, PALETTE_BYTES};
use crate::math::brightness::darker_first;

/// Two hash-derived colors, darker first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba<u8>; 2],
}

impl Palette {
    /// Number of colors in every palette
    pub const LEN: usize = 2;

    /// Build a palette from two opaque colors, ordering them by perceived brightness
    pub fn new(first: Rgba<u8>, second: Rgba<u8>) -> Self {
        Self {
            colors: darker_first(first, second),
        }
    }

    /// Read two RGB triples from the head of a folded digest
    pub fn from_bytes(bytes: &[u8; PALETTE_BYTES]) -> Self {
        let [r0, g0, b0, r1, g1, b1] = *bytes;
        Self::new(Rgba([r0, g0, b0, OPAQUE]), Rgba([r1, g1, b1, OPAQUE]))
    }

    /// Color at `index`, or `None` outside `0..2`
    pub fn get(&self, index: usize) -> Option<Rgba<u8>> {
        self.colors.get(index).copied()
    }

    /// The darker of the two colors
    pub const fn darker(&self) -> Rgba<u8> {
        let [darker, _] = self.colors;
        darker
    }

    /// The lighter of the two colors
    pub const fn lighter(&self) -> Rgba<u8> {
        let [_, lighter] = self.colors;
        lighter
    }
}
