//! Mathematical utilities for color ordering

/// Perceived brightness of RGB colors
pub mod brightness;
