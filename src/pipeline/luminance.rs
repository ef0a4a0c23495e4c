//! Grayscale conversion using the ITU-R BT.601 luminance weighting

use image::Rgb;
use ndarray::Array2;

/// Convert one RGB sample to a grayscale intensity
///
/// `round(0.299·R + 0.587·G + 0.114·B)`, clamped to `[0, 255]`. The clamp is
/// defensive; in-range inputs cannot exceed it.
pub fn luminance(pixel: Rgb<u8>) -> u8 {
    let Rgb([r, g, b]) = pixel;
    let gray = 0.299f64.mul_add(
        f64::from(r),
        0.587f64.mul_add(f64::from(g), 0.114 * f64::from(b)),
    );
    gray.round().clamp(0.0, 255.0) as u8
}

/// Convert a full sample grid to grayscale
pub fn luminance_grid(samples: &Array2<Rgb<u8>>) -> Array2<u8> {
    samples.mapv(luminance)
}
