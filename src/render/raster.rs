//! Raster rendering to an aliased pixel surface and PNG encoding
//!
//! The surface is sized for print quality: higher resolution for smaller
//! grids, capped so the total pixel count stays bounded for large ones.
//! Edges render crisp with no anti-aliasing; a pixel is black exactly when
//! its center falls inside a glyph rectangle, which keeps small glyphs
//! legible. Rendering is idempotent: the same grid always yields
//! pixel-identical output.

use crate::grid::{HexagramGrid, pattern};
use crate::io::configuration::{RASTER_BASE_SIDE, RASTER_MAX_SCALE, RASTER_SCALE_REFERENCE};
use crate::io::error::{HexagramError, Result};
use crate::render::layout::{LineRect, RASTER_METRICS};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Side length in pixels of the raster surface for a grid of side `grid_size`
///
/// `floor(base × clamp(reference/N, 1, max_scale))`: per-glyph pixel density
/// stays roughly constant while total pixel count remains bounded.
pub fn canvas_side(grid_size: usize) -> u32 {
    let scale = (RASTER_SCALE_REFERENCE / grid_size as f64).clamp(1.0, RASTER_MAX_SCALE);
    (RASTER_BASE_SIDE * scale).floor() as u32
}

/// Draw the grid onto a freshly allocated white surface
pub fn render(grid: &HexagramGrid) -> RgbImage {
    let side = canvas_side(grid.size());
    let mut surface = RgbImage::from_pixel(side, side, WHITE);
    let cell_size = f64::from(side) / grid.size() as f64;

    for (row, col, cell) in grid.cells() {
        if let Some(index) = cell {
            let lines = pattern::lines(index);
            let origin_x = col as f64 * cell_size;
            let origin_y = row as f64 * cell_size;
            for rect in RASTER_METRICS.glyph_rects(origin_x, origin_y, cell_size, &lines) {
                fill_rounded_rect(&mut surface, &rect);
            }
        }
    }

    surface
}

/// Encode a rendered surface as PNG bytes
///
/// # Errors
///
/// Returns [`HexagramError::ImageEncode`] if the PNG encoder fails.
pub fn encode_png(surface: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    surface
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| HexagramError::ImageEncode { source })?;
    Ok(bytes)
}

fn fill_rounded_rect(surface: &mut RgbImage, rect: &LineRect) {
    let x_start = rect.x.floor().max(0.0) as u32;
    let y_start = rect.y.floor().max(0.0) as u32;
    let x_end = ((rect.x + rect.width).ceil() as u32).min(surface.width());
    let y_end = ((rect.y + rect.height).ceil() as u32).min(surface.height());

    for pixel_y in y_start..y_end {
        for pixel_x in x_start..x_end {
            let center_x = f64::from(pixel_x) + 0.5;
            let center_y = f64::from(pixel_y) + 0.5;
            if contains(rect, center_x, center_y) {
                surface.put_pixel(pixel_x, pixel_y, BLACK);
            }
        }
    }
}

// Point-in-rounded-rect test against the pixel center, no edge blending
fn contains(rect: &LineRect, x: f64, y: f64) -> bool {
    if x < rect.x || x > rect.x + rect.width || y < rect.y || y > rect.y + rect.height {
        return false;
    }

    let radius = rect.radius;
    if radius <= 0.0 {
        return true;
    }

    let inner_left = rect.x + radius;
    let inner_right = rect.x + rect.width - radius;
    let inner_top = rect.y + radius;
    let inner_bottom = rect.y + rect.height - radius;

    let dx = (inner_left - x).max(x - inner_right).max(0.0);
    let dy = (inner_top - y).max(y - inner_bottom).max(0.0);

    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::{canvas_side, contains};
    use crate::render::layout::LineRect;

    #[test]
    fn test_canvas_side_is_capped_over_the_valid_grid_range() {
        // reference/N never drops below the cap for N in [16, 256]
        assert_eq!(canvas_side(16), 3200);
        assert_eq!(canvas_side(64), 3200);
        assert_eq!(canvas_side(256), 3200);
        // Past the reference size the scale floors at 1
        assert_eq!(canvas_side(2048), 800);
    }

    #[test]
    fn test_corner_pixels_fall_outside_rounded_rect() {
        let rect = LineRect {
            x: 0.0,
            y: 0.0,
            width: 40.0,
            height: 8.0,
            radius: 4.0,
        };
        assert!(!contains(&rect, 0.2, 0.2));
        assert!(contains(&rect, 4.0, 4.0));
        assert!(contains(&rect, 20.0, 1.0));
        assert!(!contains(&rect, 39.9, 7.9));
    }
}
