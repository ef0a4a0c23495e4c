//! Image-to-hexagram classification pipeline
//!
//! Stages run in order, each a total function over its input:
//! sample → luminance → contrast → classify. Once an image has decoded, no
//! stage can fail; the only fallible step is validating the caller-chosen
//! grid size.

/// Intensity plus contrast to blank-or-index classification
pub mod classifier;
/// Local-neighborhood contrast scoring
pub mod contrast;
/// RGB to grayscale conversion
pub mod luminance;
/// Source image resampling onto the grid
pub mod sampler;
/// Run tokens for last-write-wins coordination of overlapping runs
pub mod session;

pub use session::{RunCoordinator, RunToken};

use crate::grid::HexagramGrid;
use crate::io::configuration::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::io::error::{Result, invalid_parameter};
use image::DynamicImage;

/// Validated side length of the hexagram grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize(usize);

impl GridSize {
    /// Validate a caller-chosen grid size
    ///
    /// # Errors
    ///
    /// Returns [`crate::HexagramError::InvalidParameter`] if `size` lies
    /// outside `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
    pub fn new(size: usize) -> Result<Self> {
        if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(invalid_parameter(
                "grid_size",
                &size,
                &format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
            ))
        }
    }

    /// Side length in cells
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Run the full mapping pipeline on a decoded image
///
/// Produces the hexagram grid consumed by both renderers. The intermediate
/// sample, grayscale, and contrast grids live only for the duration of this
/// call. Deterministic: identical image and grid size always yield an
/// identical grid.
pub fn process_image(image: &DynamicImage, grid_size: GridSize) -> HexagramGrid {
    let samples = sampler::sample_image(image, grid_size);
    let gray = luminance::luminance_grid(&samples);
    let contrast = contrast::contrast_grid(&gray);
    classifier::classify_grid(&gray, &contrast)
}
