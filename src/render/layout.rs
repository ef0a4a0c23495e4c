//! Glyph geometry shared by the raster and vector renderers
//!
//! A glyph is six horizontal line slots stacked from the top of the cell's
//! interior margin. Each slot holds one rounded rectangle for a solid line or
//! two for a broken line. The renderers supply their own constants record;
//! the slot arithmetic lives here exactly once.

use crate::grid::LineKind;
use crate::grid::pattern::LINES_PER_HEXAGRAM;

/// Proportionality constants for one renderer's glyph geometry
#[derive(Debug, Clone, Copy)]
pub struct GlyphMetrics {
    /// Interior margin on all sides, as a fraction of cell size
    pub margin_ratio: f64,
    /// Cell size divided by this gives the vertical slot pitch
    pub slot_divisor: f64,
    /// Gap between the two segments of a broken line, as a fraction of cell size
    pub gap_ratio: f64,
    /// Cell size divided by this gives the stroke height, floored at 1
    pub stroke_divisor: f64,
    /// Line width as a fraction of cell size
    pub line_width_ratio: f64,
    /// Whether the stroke height is floored to whole pixels
    pub floor_stroke: bool,
}

/// Constants tuned for the raster surface
pub const RASTER_METRICS: GlyphMetrics = GlyphMetrics {
    margin_ratio: 0.075,
    slot_divisor: 10.0,
    gap_ratio: 0.12,
    stroke_divisor: 20.0,
    line_width_ratio: 0.85,
    floor_stroke: true,
};

/// Constants tuned for the vector canvas
pub const VECTOR_METRICS: GlyphMetrics = GlyphMetrics {
    margin_ratio: 0.075,
    slot_divisor: 8.0,
    gap_ratio: 0.15,
    stroke_divisor: 32.0,
    line_width_ratio: 0.85,
    floor_stroke: false,
};

/// One rounded rectangle of a rendered line slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Corner radius
    pub radius: f64,
}

impl GlyphMetrics {
    /// Stroke height for a cell of the given size
    pub fn stroke_height(&self, cell_size: f64) -> f64 {
        let raw = cell_size / self.stroke_divisor;
        let raw = if self.floor_stroke { raw.floor() } else { raw };
        raw.max(1.0)
    }

    /// Rectangles for one glyph at cell origin `(origin_x, origin_y)`
    ///
    /// Yields one rectangle per solid line and two per broken line, top line
    /// first, each with corner radius a quarter of the stroke height.
    pub fn glyph_rects(
        &self,
        origin_x: f64,
        origin_y: f64,
        cell_size: f64,
        pattern: &[LineKind; LINES_PER_HEXAGRAM],
    ) -> Vec<LineRect> {
        let margin = cell_size * self.margin_ratio;
        let slot_pitch = cell_size / self.slot_divisor;
        let stroke = self.stroke_height(cell_size);
        let line_width = cell_size * self.line_width_ratio;
        let gap = cell_size * self.gap_ratio;
        let radius = stroke / 4.0;
        let line_x = origin_x + (cell_size - line_width) / 2.0;

        let mut rects = Vec::with_capacity(2 * LINES_PER_HEXAGRAM);
        for (slot, kind) in pattern.iter().enumerate() {
            let slot_top = origin_y + margin + slot_pitch * slot as f64;
            let y = slot_top + (slot_pitch - stroke) / 2.0;
            match kind {
                LineKind::Solid => rects.push(LineRect {
                    x: line_x,
                    y,
                    width: line_width,
                    height: stroke,
                    radius,
                }),
                LineKind::Broken => {
                    let segment = (line_width - gap) / 2.0;
                    rects.push(LineRect {
                        x: line_x,
                        y,
                        width: segment,
                        height: stroke,
                        radius,
                    });
                    rects.push(LineRect {
                        x: line_x + segment + gap,
                        y,
                        width: segment,
                        height: stroke,
                        radius,
                    });
                }
            }
        }

        rects
    }
}

#[cfg(test)]
mod tests {
    use super::{RASTER_METRICS, VECTOR_METRICS};
    use crate::grid::LineKind;

    #[test]
    fn test_solid_and_broken_rect_counts() {
        let all_solid = RASTER_METRICS.glyph_rects(0.0, 0.0, 200.0, &[LineKind::Solid; 6]);
        assert_eq!(all_solid.len(), 6);

        let all_broken = RASTER_METRICS.glyph_rects(0.0, 0.0, 200.0, &[LineKind::Broken; 6]);
        assert_eq!(all_broken.len(), 12);
    }

    #[test]
    fn test_broken_segments_leave_the_configured_gap() {
        let rects = VECTOR_METRICS.glyph_rects(0.0, 0.0, 100.0, &[LineKind::Broken; 6]);
        let (Some(first), Some(second)) = (rects.first(), rects.get(1)) else {
            unreachable!("broken line yields two rectangles");
        };
        let gap = second.x - (first.x + first.width);
        assert!((gap - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_stroke_height_floors_at_one() {
        assert_eq!(RASTER_METRICS.stroke_height(10.0), 1.0);
        assert_eq!(RASTER_METRICS.stroke_height(205.0), 10.0);
        assert!((VECTOR_METRICS.stroke_height(100.0) - 3.125).abs() < 1e-9);
    }

    #[test]
    fn test_rects_stay_inside_cell() {
        for metrics in [RASTER_METRICS, VECTOR_METRICS] {
            let rects = metrics.glyph_rects(50.0, 50.0, 100.0, &[LineKind::Broken; 6]);
            for rect in rects {
                assert!(rect.x >= 50.0 && rect.x + rect.width <= 150.0);
                assert!(rect.y >= 50.0 && rect.y + rect.height <= 150.0);
            }
        }
    }
}
