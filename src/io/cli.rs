//! Command-line interface for rendering one identicon PNG per key

use crate::algorithm::fold::fold;
use crate::algorithm::generator::generate;
use crate::color::ColorSpec;
use crate::io::configuration::{FILE_TAG_BYTES, MAX_FILE_STEM_CHARS, OUTPUT_EXTENSION};
use crate::io::error::Result;
use crate::io::image::save_png;
use crate::io::options::Options;
use crate::io::progress::ProgressManager;
use crate::io::style::Style;
use crate::spatial::SymmetryMode;
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilehash")]
#[command(
    author,
    version,
    about = "Render deterministic identicons from text keys"
)]
/// Command-line arguments for the identicon renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Keys to render, one PNG each
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Named preset the other options are applied over
    #[arg(short, long, default_value = "default")]
    pub style: String,

    /// Directory the PNG files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Tiles per side
    #[arg(short, long)]
    pub tiles: Option<u32>,

    /// Tile side length in pixels
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Tile color: palette index, RRGGBB, r,g,b[,a] or "transparent"
    #[arg(long)]
    pub tile_color: Option<String>,

    /// Background color, same syntax as the tile color
    #[arg(long)]
    pub background: Option<String>,

    /// Padding around each tile in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub tile_padding: Option<i32>,

    /// Padding around the image in pixels
    #[arg(long, allow_hyphen_values = true)]
    pub image_padding: Option<i32>,

    /// Exclusive lower bound on the fraction of filled tiles
    #[arg(long)]
    pub min_fill: Option<f64>,

    /// Exclusive upper bound on the fraction of filled tiles
    #[arg(long)]
    pub max_fill: Option<f64>,

    /// Mirror policy applied to the grid
    #[arg(long, value_enum)]
    pub symmetry: Option<SymmetryMode>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render keys even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flag
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Options from the selected style with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the style name is not a known preset
    /// - a color argument cannot be parsed
    /// - the resulting options fail validation
    pub fn options(&self) -> Result<Options> {
        let style: Style = self.style.parse()?;
        let mut options = style.options();

        if let Some(tiles) = self.tiles {
            options.tiles = tiles;
        }
        if let Some(tile_size) = self.tile_size {
            options.tile_size = tile_size;
        }
        if let Some(color) = &self.tile_color {
            options.tile_color = color.parse::<ColorSpec>()?;
        }
        if let Some(color) = &self.background {
            options.background_color = Some(color.parse::<ColorSpec>()?);
        }
        if let Some(padding) = self.tile_padding {
            options.tile_padding = padding;
        }
        if let Some(padding) = self.image_padding {
            options.image_padding = padding;
        }
        if let Some(min_fill) = self.min_fill {
            options.min_fill = min_fill;
        }
        if let Some(max_fill) = self.max_fill {
            options.max_fill = max_fill;
        }
        if let Some(mode) = self.symmetry {
            options.set_symmetry(mode);
        }

        options.validate()?;
        Ok(options)
    }
}

/// Orchestrates rendering of every key with progress tracking
pub struct KeyProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl KeyProcessor {
    /// Create a new key processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render all keys according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if option validation, generation or file output fails
    pub fn process(&mut self) -> Result<()> {
        let options = self.cli.options()?;
        log::info!(
            "rendering {} key(s) with style '{}' into '{}'",
            self.cli.keys.len(),
            self.cli.style,
            self.cli.output_dir.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.keys.len());
        }

        for key in &self.cli.keys {
            render_key(&self.cli, self.progress_manager.as_mut(), key, &options)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }
}

fn render_key(
    cli: &Cli,
    progress_manager: Option<&mut ProgressManager>,
    key: &str,
    options: &Options,
) -> Result<()> {
    let output_path = cli.output_dir.join(output_file_name(key)?);

    if cli.skip_existing() && output_path.exists() {
        log::warn!("skipping '{}' (output exists)", output_path.display());
        if let Some(pm) = progress_manager {
            pm.skip_key();
        }
        return Ok(());
    }

    let identicon = generate(key, options)?;
    save_png(&identicon, &output_path)?;
    log::info!("wrote '{}'", output_path.display());

    if let Some(pm) = progress_manager {
        pm.complete_key(&display_name(&output_path));
    }

    Ok(())
}

/// File name for a key's PNG
///
/// Keeps a readable prefix of the key and appends a short digest tag so keys
/// that sanitize to the same prefix still get distinct files.
///
/// # Errors
///
/// Returns an error if the digest tag cannot be folded
pub fn output_file_name(key: &str) -> Result<String> {
    let mut stem: String = key
        .chars()
        .take(MAX_FILE_STEM_CHARS)
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        stem.push('_');
    }

    let tag = hex::encode(fold(key.as_bytes(), FILE_TAG_BYTES)?);
    Ok(format!("{stem}-{tag}.{OUTPUT_EXTENSION}"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
