//! Tests for expanding raw bits into symmetric grids

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use tilehash::spatial::grid::map_bits;
    use tilehash::{SymmetryMode, TilehashError};

    const MODES: [SymmetryMode; 4] = [
        SymmetryMode::None,
        SymmetryMode::Vertical,
        SymmetryMode::Horizontal,
        SymmetryMode::Both,
    ];

    fn pattern(len: usize) -> BitVec<u8, Msb0> {
        (0..len).map(|i| (i * 7 + i / 3) % 3 == 0).collect()
    }

    // Tests row-major placement without symmetry
    // Verified by transposing the grid
    #[test]
    fn test_map_bits_no_symmetry() {
        let bits = bitvec![u8, Msb0; 1, 0, 0, 1, 1, 0, 0, 0, 0];
        let grid = map_bits(&bits, 3, SymmetryMode::None).unwrap();

        assert_eq!(grid.dimension(), 3);
        assert!(grid.is_filled(0, 0));
        assert!(grid.is_filled(1, 0));
        assert!(grid.is_filled(1, 1));
        assert!(!grid.is_filled(0, 1));
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(
            grid.filled_positions().collect::<Vec<_>>(),
            vec![(0, 0), (1, 0), (1, 1)]
        );
    }

    // Tests vertical symmetry on an odd grid keeps the center column
    // Verified by dropping the odd-dimension adjustment
    #[test]
    fn test_map_bits_vertical_odd() {
        let bits = bitvec![u8, Msb0; 1, 0, 1, 0, 1, 0, 0, 0, 1];
        let grid = map_bits(&bits, 5, SymmetryMode::Vertical);
        assert!(matches!(grid, Err(TilehashError::BitLengthMismatch { expected: 15, actual: 9 })));

        let grid = map_bits(&bits, 3, SymmetryMode::Vertical);
        assert!(matches!(grid, Err(TilehashError::BitLengthMismatch { expected: 6, actual: 9 })));

        let bits = bitvec![u8, Msb0; 1, 0, 0, 1, 0, 1];
        let grid = map_bits(&bits, 3, SymmetryMode::Vertical).unwrap();
        let rows: Vec<Vec<bool>> = (0..3)
            .map(|row| (0..3).map(|col| grid.is_filled(row, col)).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec![true, false, true],
                vec![false, true, false],
                vec![false, true, false],
            ]
        );
    }

    // Tests every mode yields a grid symmetric under that mode
    // Verified by mirroring rows onto themselves
    #[test]
    fn test_map_bits_symmetry_invariant() {
        for mode in MODES {
            for dimension in 1..=9 {
                let bits = pattern(mode.required_bits(dimension));
                let grid = map_bits(&bits, dimension, mode).unwrap();
                assert!(grid.is_symmetric(mode), "{mode} at {dimension}");
            }
        }
    }

    // Tests stored bits appear unchanged in the stored region
    // Verified by reading stored columns from the mirrored half
    #[test]
    fn test_map_bits_stored_region() {
        let dimension = 6;
        let mid = dimension / 2;
        let bits = pattern(mid * mid);
        let grid = map_bits(&bits, dimension, SymmetryMode::Both).unwrap();

        for row in 0..mid {
            for col in 0..mid {
                assert_eq!(grid.is_filled(row, col), bits[row * mid + col]);
            }
        }
    }

    // Tests asymmetric grids are detected
    // Verified by always reporting symmetric
    #[test]
    fn test_is_symmetric_detects_asymmetry() {
        let bits = bitvec![u8, Msb0; 1, 0, 0, 0];
        let grid = map_bits(&bits, 2, SymmetryMode::None).unwrap();
        assert!(grid.is_symmetric(SymmetryMode::None));
        assert!(!grid.is_symmetric(SymmetryMode::Vertical));
        assert!(!grid.is_symmetric(SymmetryMode::Horizontal));
    }

    // Tests zero dimension is rejected
    // Verified by returning an empty grid
    #[test]
    fn test_map_bits_zero_dimension() {
        let bits: BitVec<u8, Msb0> = BitVec::new();
        assert!(matches!(
            map_bits(&bits, 0, SymmetryMode::None),
            Err(TilehashError::InvalidParameter { .. })
        ));
    }

    // Tests out-of-range cells read as empty
    // Verified by panicking on out-of-range access
    #[test]
    fn test_is_filled_out_of_range() {
        let bits = bitvec![u8, Msb0; 1];
        let grid = map_bits(&bits, 1, SymmetryMode::Both).unwrap();
        assert!(grid.is_filled(0, 0));
        assert!(!grid.is_filled(1, 0));
        assert_eq!(grid.cells().len(), 1);
    }
}
