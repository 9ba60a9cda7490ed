//! Hashing constants and option defaults

/// Native SHA-512 output size in bytes
pub const DIGEST_BYTES: usize = 64;

/// Number of seed bytes tried before a key is declared unhashable
pub const SEED_SEARCH_SPACE: usize = 256;

/// Byte appended after the key, overwritten by the seed on each attempt
pub const KEY_SEPARATOR: u8 = b' ';

/// Bytes consumed by the two palette colors (two RGB triples)
pub const PALETTE_BYTES: usize = 6;

/// Alpha channel value for fully opaque colors
pub const OPAQUE: u8 = 255;

// Perceived brightness weights for the red, green and blue channels
/// Red channel brightness weight
pub const BRIGHTNESS_WEIGHT_RED: f64 = 0.241;
/// Green channel brightness weight
pub const BRIGHTNESS_WEIGHT_GREEN: f64 = 0.691;
/// Blue channel brightness weight
pub const BRIGHTNESS_WEIGHT_BLUE: f64 = 0.068;

// Default values for configurable parameters
/// Exclusive lower bound on the fraction of set bits
pub const DEFAULT_MIN_FILL: f64 = 0.3;
/// Exclusive upper bound on the fraction of set bits
pub const DEFAULT_MAX_FILL: f64 = 0.9;
/// Tiles per side
pub const DEFAULT_TILES: u32 = 5;
/// Tile side length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 1;
/// Padding around each tile in pixels
pub const DEFAULT_TILE_PADDING: i32 = 0;
/// Padding around the whole image in pixels
pub const DEFAULT_IMAGE_PADDING: i32 = 0;

/// Light gray background shared by several presets
pub const LIGHT_GRAY_HEX: &str = "F0F0F0";

// Output settings
/// Largest canvas side in pixels, keeps a rendered image under 1 GiB
pub const MAX_CANVAS_SIDE: u32 = 16_384;
/// Extension of files written by the command-line tool
pub const OUTPUT_EXTENSION: &str = "png";
/// Longest key prefix kept in output file names
pub const MAX_FILE_STEM_CHARS: usize = 32;
/// Bytes of folded digest appended to output file names
pub const FILE_TAG_BYTES: usize = 4;
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
