//! Error types for pipeline and export operations
//!
//! Once an image has decoded, the classifier pipeline is total and the
//! renderers cannot fail on a well-formed grid; every variant here belongs to
//! the input or export boundary.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline and export operations
#[derive(Debug)]
pub enum HexagramError {
    /// Failed to decode a source image; the pipeline aborts before sampling
    /// and retains no partial grid
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode a rendered surface into PNG bytes
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to save a rendered surface to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for HexagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode raster surface: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for HexagramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::ImageEncode { source }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, HexagramError>;

impl From<image::ImageError> for HexagramError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for HexagramError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HexagramError {
    HexagramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a generic path error
pub fn path_error(msg: &str) -> HexagramError {
    HexagramError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{HexagramError, invalid_parameter};

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("grid_size", &12, &"must be between 16 and 256");
        match err {
            HexagramError::InvalidParameter { parameter, .. } => {
                assert_eq!(parameter, "grid_size");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
        let message = invalid_parameter("grid_size", &12, &"must be between 16 and 256").to_string();
        assert!(message.contains("grid_size"));
        assert!(message.contains("12"));
    }
}
