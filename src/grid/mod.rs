//! Hexagram grid data structures
//!
//! This module contains the artifacts shared between classification and
//! rendering:
//! - The N×N hexagram grid produced by the classifier
//! - The static mapping from hexagram index to line pattern

/// The N×N grid of classified cells
pub mod model;
/// Index-to-line-pattern decoding and encoding
pub mod pattern;

pub use model::{Cell, HexagramGrid};
pub use pattern::LineKind;
