//! Color specifications and their resolution against the derived palette

/// Darker-first color pairs derived from the digest
pub mod palette;
/// Resolution of color specifications to RGBA
pub mod resolve;
/// Tagged color specifications and their text syntax
pub mod spec;

pub use palette::Palette;
pub use resolve::resolve;
pub use spec::ColorSpec;
