//! Image-to-hexagram mapping engine for stylized grid artwork
//!
//! The pipeline resamples a source image onto an N×N grid, scores each cell by
//! luminance and local contrast, and classifies it as one of 64 I Ching
//! hexagram glyphs or a deliberate blank. The resulting grid feeds two
//! renderers that share one glyph layout routine: a raster path producing a
//! print-quality PNG surface and a vector path producing a scalable SVG
//! document.

#![forbid(unsafe_code)]

/// Hexagram grid model and the static index-to-line-pattern mapping
pub mod grid;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Sampling, luminance, contrast, and classification stages
pub mod pipeline;
/// Raster and vector renderers with shared glyph geometry
pub mod render;

pub use io::error::{HexagramError, Result};
