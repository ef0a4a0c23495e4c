//! Pipeline constants and runtime configuration defaults

// Grid size bounds for the caller-chosen side length
/// Minimum grid side length in cells
pub const MIN_GRID_SIZE: usize = 16;
/// Maximum grid side length in cells
pub const MAX_GRID_SIZE: usize = 256;
/// Default grid side length in cells
pub const DEFAULT_GRID_SIZE: usize = 64;

// Classifier thresholds
/// Grayscale intensity at or above which a cell is suppressed to blank
pub const BLANK_LUMINANCE_FLOOR: u8 = 240;
/// Contrast score below which a cell is suppressed to blank
pub const FLAT_CONTRAST_CUTOFF: f64 = 15.0;
/// Contrast score at which the emphasis weight saturates
pub const CONTRAST_SATURATION: f64 = 50.0;
/// Share of the intensity kept for a zero-weight cell
pub const BASE_TONE_SHARE: f64 = 0.7;
/// Additional intensity share granted at full contrast weight
pub const CONTRAST_EMPHASIS: f64 = 0.3;
/// Gamma exponent expanding mid-tone separation before quantization
pub const TONE_GAMMA: f64 = 0.8;

// Raster surface sizing
/// Base side length of the raster surface in pixels
pub const RASTER_BASE_SIDE: f64 = 800.0;
/// Grid size at which the raster scale factor reaches 1
pub const RASTER_SCALE_REFERENCE: f64 = 1024.0;
/// Cap on the raster scale factor
pub const RASTER_MAX_SCALE: f64 = 4.0;

// Vector canvas sizing
/// Minimum absolute side length of the SVG canvas
pub const VECTOR_MIN_SIDE: u32 = 1600;
/// SVG canvas points allotted per grid cell before the minimum applies
pub const VECTOR_CELL_POINTS: u32 = 8;

// Output settings
/// Suffix added to output filenames derived from an input stem
pub const OUTPUT_SUFFIX: &str = "_hexagram";
/// Suggested filename for a standalone raster export
pub const RASTER_EXPORT_NAME: &str = "hexagram-art.png";
/// Suggested filename for a standalone vector export
pub const VECTOR_EXPORT_NAME: &str = "hexagram-art.svg";

/// Input file extensions accepted when scanning a directory
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];
