//! Export of rendered artifacts to the filesystem

use crate::io::error::{HexagramError, Result};
use image::RgbImage;
use std::fs;
use std::path::Path;

/// Save a rendered raster surface as a PNG file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved.
pub fn export_raster(surface: &RgbImage, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    surface
        .save(output_path)
        .map_err(|source| HexagramError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

/// Save a rendered SVG document
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn export_vector(document: &str, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    fs::write(output_path, document).map_err(|source| HexagramError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write svg",
        source,
    })
}

fn ensure_parent(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| HexagramError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }
    Ok(())
}
