//! Named presets over the default options

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::color::ColorSpec;
use crate::io::configuration::LIGHT_GRAY_HEX;
use crate::io::error::TilehashError;
use crate::io::options::Options;

/// Preset combinations of tile count, sizes, paddings, colors and symmetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Five tiles, one pixel each, darker palette color on transparent
    #[default]
    Default,
    /// Five 70-pixel tiles on light gray, tiles overlapping by one pixel
    Github,
    /// Eight tiles on the lighter palette color
    Gravatar,
    /// Six black 12-pixel tiles on light gray
    Mono,
    /// Padded 16-pixel tiles on light gray
    Mosaic,
    /// Three asymmetric tiles, lighter color on darker
    Mini,
    /// White padded tiles on the darker palette color
    Window,
}

impl Style {
    /// Every preset, in documentation order
    pub const ALL: [Self; 7] = [
        Self::Default,
        Self::Github,
        Self::Gravatar,
        Self::Mono,
        Self::Mosaic,
        Self::Mini,
        Self::Window,
    ];

    /// Lowercase preset name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Github => "github",
            Self::Gravatar => "gravatar",
            Self::Mono => "mono",
            Self::Mosaic => "mosaic",
            Self::Mini => "mini",
            Self::Window => "window",
        }
    }

    /// Default options with this preset applied
    pub fn options(self) -> Options {
        let mut options = Options::default();
        self.apply(&mut options);
        options
    }

    /// Overwrite the fields this preset fixes
    pub fn apply(self, options: &mut Options) {
        let light_gray = || Some(ColorSpec::Hex(LIGHT_GRAY_HEX.to_string()));

        match self {
            Self::Default => {}
            Self::Github => {
                options.tile_size = 70;
                options.background_color = light_gray();
                options.tile_padding = -1;
                options.image_padding = 35;
                options.tiles = 5;
                options.vertical_symmetry = true;
                options.horizontal_symmetry = false;
            }
            Self::Gravatar => {
                options.background_color = Some(ColorSpec::Palette(1));
                options.tiles = 8;
                options.vertical_symmetry = true;
                options.horizontal_symmetry = false;
            }
            Self::Mono => {
                options.background_color = light_gray();
                options.tile_color = ColorSpec::Hex("000000".to_string());
                options.tiles = 6;
                options.tile_size = 12;
                options.tile_padding = -1;
                options.image_padding = 6;
                options.vertical_symmetry = true;
                options.horizontal_symmetry = false;
            }
            Self::Mosaic => {
                options.image_padding = 2;
                options.tile_padding = 1;
                options.tile_size = 16;
                options.background_color = light_gray();
                options.vertical_symmetry = true;
                options.horizontal_symmetry = false;
            }
            Self::Mini => {
                options.tile_size = 10;
                options.tile_padding = 1;
                options.tiles = 3;
                options.background_color = Some(ColorSpec::Palette(0));
                options.tile_color = ColorSpec::Palette(1);
                options.vertical_symmetry = false;
                options.horizontal_symmetry = false;
            }
            Self::Window => {
                options.tile_color = ColorSpec::Rgba(Rgba([255, 255, 255, 255]));
                options.background_color = Some(ColorSpec::Palette(0));
                options.image_padding = 2;
                options.tile_padding = 1;
                options.tile_size = 16;
                options.vertical_symmetry = true;
                options.horizontal_symmetry = false;
            }
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = TilehashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| TilehashError::InvalidStyle {
                name: value.to_string(),
            })
    }
}
