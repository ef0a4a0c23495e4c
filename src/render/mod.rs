//! Rendering of hexagram grids to export artifacts
//!
//! Both paths consume the same grid and the same static line patterns, and
//! both delegate glyph geometry to [`layout`]. They keep separate
//! proportionality constants and canvas sizing policies, tuned independently
//! for their resolution regimes; the outputs are visually equivalent, not
//! geometrically identical.

/// Shared glyph geometry parameterized per renderer
pub mod layout;
/// Aliased pixel-surface rendering and PNG encoding
pub mod raster;
/// SVG document rendering
pub mod vector;
