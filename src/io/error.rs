//! Error types for identicon generation, color resolution and image output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all identicon operations
#[derive(Debug)]
pub enum TilehashError {
    /// Style preset name is not recognized
    InvalidStyle {
        /// Name that failed to match a preset
        name: String,
    },

    /// Tile count must be at least one
    InvalidTileCount {
        /// Provided tile count
        value: u32,
    },

    /// Tile size must be at least one pixel
    InvalidTileSize {
        /// Provided tile size
        value: u32,
    },

    /// Requested more folded bytes than the digest provides
    ///
    /// Only reachable when the options imply a raw bit sequence longer
    /// than the digest can cover.
    LengthExceeded {
        /// Number of bytes requested
        requested: usize,
        /// Native digest size in bytes
        max: usize,
    },

    /// No seed byte produced a sample within the fill-ratio window
    Unhashable {
        /// Number of seeds tried
        attempts: usize,
    },

    /// Palette index is outside the derived palette, or no palette exists
    ColorIndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of colors available (0 when no palette was derived)
        available: usize,
    },

    /// Hex color is shorter than six characters or holds non-hex digits
    InvalidHexColor {
        /// The rejected string
        value: String,
    },

    /// Byte color has fewer than three channels
    InvalidColorBytes {
        /// Number of bytes provided
        len: usize,
    },

    /// Raw bit sequence does not match the length the symmetry mode needs
    BitLengthMismatch {
        /// Bits required for the grid dimension and symmetry mode
        expected: usize,
        /// Bits actually supplied
        actual: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered identicon to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to encode a rendered identicon in memory
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilehashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStyle { name } => write!(f, "Invalid style parameter '{name}'"),
            Self::InvalidTileCount { value } => {
                write!(f, "Tile count must be greater than 0 (got {value})")
            }
            Self::InvalidTileSize { value } => {
                write!(f, "Tile size must be greater than 0 (got {value})")
            }
            Self::LengthExceeded { requested, max } => {
                write!(
                    f,
                    "Digest can only provide {max} bytes of data ({requested} requested)"
                )
            }
            Self::Unhashable { attempts } => {
                write!(
                    f,
                    "Key unhashable in single-byte search space ({attempts} seeds tried)"
                )
            }
            Self::ColorIndexOutOfRange { index, available } => {
                write!(
                    f,
                    "Color index {index} is out of range ({available} palette colors available)"
                )
            }
            Self::InvalidHexColor { value } => {
                write!(
                    f,
                    "Invalid hex color '{value}': expected at least 6 hex digits"
                )
            }
            Self::InvalidColorBytes { len } => {
                write!(f, "Color bytes must have at least 3 elements (got {len})")
            }
            Self::BitLengthMismatch { expected, actual } => {
                write!(f, "Grid needs {expected} raw bits but {actual} were supplied")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::ImageEncode { source } => write!(f, "Failed to encode image: {source}"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilehashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } | Self::ImageEncode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for identicon results
pub type Result<T> = std::result::Result<T, TilehashError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilehashError {
    TilehashError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
