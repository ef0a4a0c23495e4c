//! Local contrast scoring over the grayscale grid
//!
//! Contrast is the mean absolute difference between a cell and its grid
//! neighbors. The measure preserves local structural edges that raw
//! brightness alone would wash out, and it drives both blank suppression and
//! glyph emphasis in the classifier.

use ndarray::Array2;

/// Score every cell against its up-to-8 in-bounds neighbors
///
/// Edge and corner cells divide by their actual neighbor count. A cell with
/// no neighbors at all (the degenerate 1×1 grid) scores 0.
pub fn contrast_grid(gray: &Array2<u8>) -> Array2<f64> {
    let (rows, cols) = gray.dim();
    let mut scores = Array2::zeros((rows, cols));

    for row in 0..rows {
        for col in 0..cols {
            let center = gray.get((row, col)).copied().unwrap_or(0);
            if let Some(score) = scores.get_mut((row, col)) {
                *score = neighborhood_contrast(gray, center, row, col);
            }
        }
    }

    scores
}

fn neighborhood_contrast(gray: &Array2<u8>, center: u8, row: usize, col: usize) -> f64 {
    let mut total = 0.0;
    let mut neighbors = 0u32;

    for row_delta in -1i64..=1 {
        for col_delta in -1i64..=1 {
            if row_delta == 0 && col_delta == 0 {
                continue;
            }
            let neighbor_row = row as i64 + row_delta;
            let neighbor_col = col as i64 + col_delta;
            if neighbor_row < 0 || neighbor_col < 0 {
                continue;
            }
            if let Some(&neighbor) = gray.get((neighbor_row as usize, neighbor_col as usize)) {
                total += f64::from(center.abs_diff(neighbor));
                neighbors += 1;
            }
        }
    }

    if neighbors == 0 {
        0.0
    } else {
        total / f64::from(neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::contrast_grid;
    use ndarray::Array2;

    #[test]
    fn test_uniform_grid_has_zero_contrast() {
        let gray = Array2::from_elem((4, 4), 128u8);
        let contrast = contrast_grid(&gray);
        assert!(contrast.iter().all(|&score| score == 0.0));
    }

    #[test]
    fn test_isolated_cell_scores_zero() {
        let gray = Array2::from_elem((1, 1), 200u8);
        let contrast = contrast_grid(&gray);
        assert_eq!(contrast.get((0, 0)).copied(), Some(0.0));
    }

    #[test]
    fn test_corner_divides_by_actual_neighbor_count() {
        // 2x2 grid: corner has exactly 3 neighbors
        let gray = Array2::from_shape_vec((2, 2), vec![0u8, 255, 255, 255]);
        let Ok(gray) = gray else {
            unreachable!("shape matches data length");
        };
        let contrast = contrast_grid(&gray);
        assert_eq!(contrast.get((0, 0)).copied(), Some(255.0));
    }
}
