//! Raster rendering and PNG output for generated identicons

use std::io::Cursor;
use std::ops::Range;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::algorithm::generator::Identicon;
use crate::io::error::{Result, TilehashError};

/// Paint the background and every filled tile onto a fresh canvas
///
/// Tiles that reach past the canvas edge, as happens with negative
/// paddings, are clipped.
pub fn render(identicon: &Identicon) -> RgbaImage {
    let side = identicon.canvas_side();
    let mut img = RgbaImage::from_pixel(side, side, identicon.background());

    let geometry = identicon.geometry();
    let size = i64::from(geometry.tile_size);
    for (row, col) in identicon.grid().filled_positions() {
        let (x0, y0) = geometry.tile_origin(row, col);
        paint_square(&mut img, (x0, y0), size, identicon.foreground());
    }

    img
}

fn clipped(start: i64, len: i64, limit: u32) -> Range<u32> {
    let limit = i64::from(limit);
    let begin = start.clamp(0, limit);
    let end = (start + len).clamp(begin, limit);
    (begin as u32)..(end as u32)
}

fn paint_square(img: &mut RgbaImage, origin: (i64, i64), size: i64, color: Rgba<u8>) {
    let columns = clipped(origin.0, size, img.width());
    let rows = clipped(origin.1, size, img.height());

    for y in rows {
        for x in columns.clone() {
            img.put_pixel(x, y, color);
        }
    }
}

/// Render the identicon and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(identicon: &Identicon, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TilehashError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render(identicon)
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| TilehashError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Render the identicon and encode it as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_png(identicon: &Identicon) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    render(identicon)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| TilehashError::ImageEncode { source })?;
    Ok(bytes)
}
