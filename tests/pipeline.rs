//! Validates the classification pipeline against its stated properties:
//! blank suppression, index bounds, dimension preservation, and determinism

use hexagrid::pipeline::{self, GridSize};
use image::{DynamicImage, Rgb, RgbImage};

fn grid_size(size: usize) -> GridSize {
    match GridSize::new(size) {
        Ok(valid) => valid,
        Err(_) => unreachable!("test grid sizes are in range"),
    }
}

fn white_image(side: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(side, side, Rgb([255, 255, 255])))
}

// Single-pixel checkerboard at exactly grid resolution, so sampling is a no-op
fn checkerboard_image(side: u32) -> DynamicImage {
    let img = RgbImage::from_fn(side, side, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    DynamicImage::ImageRgb8(img)
}

fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let value = ((x * 7 + y * 13) % 256) as u8;
        Rgb([value, value / 2, 255 - value])
    });
    DynamicImage::ImageRgb8(img)
}

#[test]
fn test_grid_size_bounds_are_enforced() {
    assert!(GridSize::new(15).is_err());
    assert!(GridSize::new(257).is_err());
    assert!(GridSize::new(0).is_err());
    assert!(GridSize::new(16).is_ok());
    assert!(GridSize::new(256).is_ok());
}

#[test]
fn test_output_dimensions_match_grid_size() {
    let image = gradient_image(100, 80);
    for size in [16, 32, 97] {
        let grid = pipeline::process_image(&image, grid_size(size));
        assert_eq!(grid.size(), size);
        assert_eq!(grid.cells().count(), size * size);
    }
}

#[test]
fn test_uniform_white_input_is_entirely_blank() {
    let grid = pipeline::process_image(&white_image(64), grid_size(16));
    assert!(grid.is_blank(), "near-white cells must be suppressed");
}

#[test]
fn test_checkerboard_classifies_dark_cells_and_suppresses_white() {
    let grid = pipeline::process_image(&checkerboard_image(16), grid_size(16));

    for (row, col, cell) in grid.cells() {
        if (row + col) % 2 == 0 {
            // Black cell next to white neighbors: maximum contrast, lowest tone
            assert_eq!(cell, Some(0), "dark cell at ({row}, {col})");
        } else {
            assert_eq!(cell, None, "white cell at ({row}, {col})");
        }
    }
}

#[test]
fn test_all_indices_are_valid_six_bit_values() {
    let grid = pipeline::process_image(&gradient_image(200, 200), grid_size(64));
    for (row, col, cell) in grid.cells() {
        if let Some(index) = cell {
            assert!(index <= 63, "cell ({row}, {col}) holds index {index}");
        }
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let image = gradient_image(150, 90);
    let first = pipeline::process_image(&image, grid_size(32));
    let second = pipeline::process_image(&image, grid_size(32));
    assert_eq!(first, second);
}
