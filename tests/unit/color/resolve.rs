//! Tests for resolving color specifications to RGBA

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tilehash::TilehashError;
    use tilehash::color::{ColorSpec, Palette, resolve};

    fn palette() -> Palette {
        Palette::new(Rgba([10, 20, 30, 255]), Rgba([200, 210, 220, 255]))
    }

    // Tests palette indices select darker and lighter colors
    // Verified by reversing palette order
    #[test]
    fn test_resolve_palette_index() {
        let palette = palette();
        assert_eq!(
            resolve(&ColorSpec::Palette(0), Some(&palette)).unwrap(),
            Rgba([10, 20, 30, 255])
        );
        assert_eq!(
            resolve(&ColorSpec::Palette(1), Some(&palette)).unwrap(),
            Rgba([200, 210, 220, 255])
        );
    }

    // Tests out-of-range palette index is rejected
    // Verified by removing the bounds check
    #[test]
    fn test_resolve_palette_index_out_of_range() {
        let result = resolve(&ColorSpec::Palette(2), Some(&palette()));
        assert!(matches!(
            result,
            Err(TilehashError::ColorIndexOutOfRange {
                index: 2,
                available: 2
            })
        ));
    }

    // Tests palette index without a palette is rejected
    // Verified by defaulting to black when no palette exists
    #[test]
    fn test_resolve_palette_missing() {
        let result = resolve(&ColorSpec::Palette(0), None);
        assert!(matches!(
            result,
            Err(TilehashError::ColorIndexOutOfRange {
                index: 0,
                available: 0
            })
        ));
    }

    // Tests hex digits decode with opaque alpha and extra characters ignored
    // Verified by decoding the trailing characters as alpha
    #[test]
    fn test_resolve_hex() {
        assert_eq!(
            resolve(&ColorSpec::Hex("F0F0F0".to_string()), None).unwrap(),
            Rgba([240, 240, 240, 255])
        );
        assert_eq!(
            resolve(&ColorSpec::Hex("ff8000zz".to_string()), None).unwrap(),
            Rgba([255, 128, 0, 255])
        );
    }

    // Tests short hex strings are rejected
    // Verified by padding short strings with zeros
    #[test]
    fn test_resolve_hex_too_short() {
        let result = resolve(&ColorSpec::Hex("FF00".to_string()), None);
        assert!(matches!(result, Err(TilehashError::InvalidHexColor { .. })));
    }

    // Tests non-hex characters within the first six are rejected
    // Verified by skipping invalid digits
    #[test]
    fn test_resolve_hex_invalid_digits() {
        let result = resolve(&ColorSpec::Hex("GG0000".to_string()), None);
        assert!(matches!(result, Err(TilehashError::InvalidHexColor { .. })));
    }

    // Tests explicit RGBA colors pass through unchanged
    // Verified by forcing alpha to opaque
    #[test]
    fn test_resolve_rgba() {
        let color = Rgba([1, 2, 3, 4]);
        assert_eq!(resolve(&ColorSpec::Rgba(color), None).unwrap(), color);
    }

    // Tests byte colors with and without alpha
    // Verified by ignoring the fourth byte
    #[test]
    fn test_resolve_bytes() {
        assert_eq!(
            resolve(&ColorSpec::Bytes(vec![1, 2, 3]), None).unwrap(),
            Rgba([1, 2, 3, 255])
        );
        assert_eq!(
            resolve(&ColorSpec::Bytes(vec![1, 2, 3, 4, 5]), None).unwrap(),
            Rgba([1, 2, 3, 4])
        );
    }

    // Tests byte colors need at least three channels
    // Verified by padding missing channels with zero
    #[test]
    fn test_resolve_bytes_too_short() {
        let result = resolve(&ColorSpec::Bytes(vec![1, 2]), None);
        assert!(matches!(
            result,
            Err(TilehashError::InvalidColorBytes { len: 2 })
        ));
    }
}
