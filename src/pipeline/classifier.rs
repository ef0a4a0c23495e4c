//! Cell classification from intensity and contrast
//!
//! Near-white or visually flat cells are suppressed to blanks; that
//! suppression is what gives the output its sparse, structure-preserving look
//! instead of a dense gray wash. Surviving cells map through a contrast
//! emphasis and a perceptual gamma curve to a hexagram index.

use crate::grid::{Cell, HexagramGrid};
use crate::io::configuration::{
    BASE_TONE_SHARE, BLANK_LUMINANCE_FLOOR, CONTRAST_EMPHASIS, CONTRAST_SATURATION,
    FLAT_CONTRAST_CUTOFF, TONE_GAMMA,
};
use ndarray::{Array2, Zip};

/// Classify one cell from its grayscale intensity and contrast score
///
/// Cells at or above the luminance floor, or below the flat-contrast cutoff,
/// become blank regardless of the other value. Otherwise the intensity is
/// pushed darker in proportion to local contrast (edges matter more than flat
/// brightness), normalized, and remapped through a 0.8 gamma that expands
/// mid-tone separation before quantizing to the 64 glyphs.
pub fn classify_cell(gray: u8, contrast: f64) -> Cell {
    if gray >= BLANK_LUMINANCE_FLOOR || contrast < FLAT_CONTRAST_CUTOFF {
        return None;
    }

    let contrast_weight = (contrast / CONTRAST_SATURATION).min(1.0);
    let adjusted = f64::from(gray) * CONTRAST_EMPHASIS.mul_add(contrast_weight, BASE_TONE_SHARE);
    let normalized = (adjusted / 255.0).min(1.0);
    let index = (normalized.powf(TONE_GAMMA) * 63.0).floor().clamp(0.0, 63.0);

    Some(index as u8)
}

/// Classify a full grid; output dimensions always equal input dimensions
pub fn classify_grid(gray: &Array2<u8>, contrast: &Array2<f64>) -> HexagramGrid {
    let cells = Zip::from(gray)
        .and(contrast)
        .map_collect(|&gray_value, &contrast_score| classify_cell(gray_value, contrast_score));

    HexagramGrid::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::classify_cell;

    #[test]
    fn test_near_white_is_blank_regardless_of_contrast() {
        assert_eq!(classify_cell(240, 200.0), None);
        assert_eq!(classify_cell(255, 200.0), None);
    }

    #[test]
    fn test_flat_cells_are_blank_regardless_of_intensity() {
        assert_eq!(classify_cell(0, 14.9), None);
        assert_eq!(classify_cell(128, 0.0), None);
    }

    #[test]
    fn test_black_cell_maps_to_lowest_glyph() {
        assert_eq!(classify_cell(0, 100.0), Some(0));
    }

    #[test]
    fn test_index_stays_in_range_across_domain() {
        for gray in 0..=u8::MAX {
            for contrast in [15.0, 30.0, 50.0, 500.0] {
                if let Some(index) = classify_cell(gray, contrast) {
                    assert!(index <= 63, "gray {gray} contrast {contrast} gave {index}");
                }
            }
        }
    }

    #[test]
    fn test_contrast_emphasis_darkens() {
        // Saturated contrast keeps the full tone; weak contrast scales it down
        let weak = classify_cell(200, 15.0);
        let strong = classify_cell(200, 50.0);
        match (weak, strong) {
            (Some(weak_index), Some(strong_index)) => assert!(weak_index < strong_index),
            _ => unreachable!("both cells survive suppression"),
        }
    }
}
