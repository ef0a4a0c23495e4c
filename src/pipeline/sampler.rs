//! Resampling of arbitrary-resolution images onto the classification grid

use crate::pipeline::GridSize;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb};
use ndarray::Array2;

/// Resample a decoded image onto an N×N grid of RGB samples
///
/// Delegates the actual scaling to the image crate's Lanczos3 resampler; the
/// pipeline imposes no interpolation policy of its own beyond choosing one
/// fixed filter so output stays deterministic.
pub fn sample_image(image: &DynamicImage, grid_size: GridSize) -> Array2<Rgb<u8>> {
    let side = grid_size.get();
    let resized = imageops::resize(
        &image.to_rgb8(),
        side as u32,
        side as u32,
        FilterType::Lanczos3,
    );

    let mut samples = Array2::from_elem((side, side), Rgb([0u8, 0, 0]));
    for (x, y, pixel) in resized.enumerate_pixels() {
        if let Some(sample) = samples.get_mut((y as usize, x as usize)) {
            *sample = *pixel;
        }
    }

    samples
}
