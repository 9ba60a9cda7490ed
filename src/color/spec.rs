use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::io::error::{TilehashError, invalid_parameter};

/// A color as written in options, resolved against the derived palette later
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// Index into the hash-derived palette (0 = darker, 1 = lighter)
    Palette(usize),
    /// `RRGGBB` hex digits; anything after the sixth character is ignored
    Hex(String),
    /// Explicit color, used unchanged
    Rgba(Rgba<u8>),
    /// `[r, g, b]` or `[r, g, b, a]`; alpha defaults to opaque
    Bytes(Vec<u8>),
}

impl ColorSpec {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::Rgba(Rgba([0, 0, 0, 0]));

    /// Whether resolving this color needs the hash-derived palette
    pub const fn uses_palette(&self) -> bool {
        matches!(self, Self::Palette(_))
    }
}

impl From<Rgba<u8>> for ColorSpec {
    fn from(color: Rgba<u8>) -> Self {
        Self::Rgba(color)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(index) => write!(f, "{index}"),
            Self::Hex(digits) => write!(f, "#{digits}"),
            Self::Rgba(Rgba([r, g, b, a])) => write!(f, "{r},{g},{b},{a}"),
            Self::Bytes(bytes) => {
                let parts: Vec<String> = bytes.iter().map(u8::to_string).collect();
                write!(f, "{}", parts.join(","))
            }
        }
    }
}

/// Parses the command-line color syntax
///
/// - `transparent`
/// - one or two decimal digits: palette index
/// - `r,g,b` or `r,g,b,a`: byte channels
/// - anything else, with an optional leading `#`: hex digits, checked on resolve
///
/// A leading `#` always selects hex, so `#00` is a hex value and `00` an index.
impl FromStr for ColorSpec {
    type Err = TilehashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        if !value.is_empty() && value.len() <= 2 && value.bytes().all(|b| b.is_ascii_digit()) {
            return value
                .parse()
                .map(Self::Palette)
                .map_err(|error| invalid_parameter("color", &value, &error));
        }

        if value.contains(',') {
            return value
                .split(',')
                .map(|channel| channel.trim().parse::<u8>())
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Bytes)
                .map_err(|error| invalid_parameter("color", &value, &error));
        }

        Ok(Self::Hex(value.trim_start_matches('#').to_string()))
    }
}
