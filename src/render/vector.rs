//! Vector rendering to a self-contained SVG document
//!
//! The canvas wants a sane minimum absolute size rather than the raster
//! path's multiplicative cap. The document is one white background rectangle
//! followed by one or two black rounded rectangles per rendered line slot,
//! the same shape grammar as the raster path.

use crate::grid::{HexagramGrid, pattern};
use crate::io::configuration::{VECTOR_CELL_POINTS, VECTOR_MIN_SIDE};
use crate::render::layout::VECTOR_METRICS;
use std::fmt::Write;

/// SVG namespace of the emitted document root
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Side length of the SVG canvas for a grid of side `grid_size`
pub fn canvas_side(grid_size: usize) -> u32 {
    (grid_size as u32 * VECTOR_CELL_POINTS).max(VECTOR_MIN_SIDE)
}

/// Render the grid as an SVG document string
pub fn render(grid: &HexagramGrid) -> String {
    let side = canvas_side(grid.size());
    let cell_size = f64::from(side) / grid.size() as f64;

    // Rough capacity: one line per rectangle plus the envelope
    let mut document = String::with_capacity(128 + 96 * 2 * grid.glyph_count() * 6);
    let _ = writeln!(
        document,
        "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {side} {side}\">"
    );
    let _ = writeln!(
        document,
        "  <rect x=\"0\" y=\"0\" width=\"{side}\" height=\"{side}\" fill=\"#ffffff\"/>"
    );

    for (row, col, cell) in grid.cells() {
        if let Some(index) = cell {
            let lines = pattern::lines(index);
            let origin_x = col as f64 * cell_size;
            let origin_y = row as f64 * cell_size;
            for rect in VECTOR_METRICS.glyph_rects(origin_x, origin_y, cell_size, &lines) {
                let _ = writeln!(
                    document,
                    "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" fill=\"#000000\"/>",
                    rect.x, rect.y, rect.width, rect.height, rect.radius
                );
            }
        }
    }

    document.push_str("</svg>\n");
    document
}
