use image::Rgba;

use crate::io::configuration::{
    BRIGHTNESS_WEIGHT_BLUE, BRIGHTNESS_WEIGHT_GREEN, BRIGHTNESS_WEIGHT_RED,
};

/// Perceived brightness of a color, ignoring alpha
///
/// Weighted Euclidean norm of the RGB channels, `sqrt(0.241 R² + 0.691 G² + 0.068 B²)`.
/// Green dominates, so a pure green reads brighter than a pure red of equal value.
// Fused multiply-add would change rounding, and palette order must not depend on it
#[allow(clippy::suboptimal_flops)]
pub fn perceived_brightness(color: Rgba<u8>) -> f64 {
    let [r, g, b, _] = color.0;
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));

    (BRIGHTNESS_WEIGHT_RED * r * r + BRIGHTNESS_WEIGHT_GREEN * g * g + BRIGHTNESS_WEIGHT_BLUE * b * b)
        .sqrt()
}

/// Order two colors so the darker one comes first
///
/// Colors of equal brightness keep their original order.
pub fn darker_first(first: Rgba<u8>, second: Rgba<u8>) -> [Rgba<u8>; 2] {
    if perceived_brightness(first) > perceived_brightness(second) {
        [second, first]
    } else {
        [first, second]
    }
}
