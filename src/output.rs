//! Image file output

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::decoder::encode;
use crate::grid::PixelGrid;

/// Error type for output operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// The file extension does not name a supported output format
    #[error("unsupported output format '{0}' (expected .png or .ppm)")]
    UnsupportedFormat(String),
    /// Grid has no pixels to encode
    #[error("cannot write an empty {rows}x{cols} image")]
    EmptyImage { rows: usize, cols: usize },
}

/// Output formats chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Ppm,
}

impl OutputFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "ppm" => Ok(OutputFormat::Ppm),
            _ => Err(OutputError::UnsupportedFormat(ext)),
        }
    }
}

/// Create parent directories of `path` if they don't exist.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn check_not_empty(grid: &PixelGrid) -> Result<(), OutputError> {
    if grid.is_empty() {
        return Err(OutputError::EmptyImage { rows: grid.rows(), cols: grid.cols() });
    }
    Ok(())
}

/// Save a grid as an opaque PNG.
pub fn save_png(grid: &PixelGrid, path: &Path) -> Result<(), OutputError> {
    check_not_empty(grid)?;
    ensure_parent_dir(path)?;
    grid.to_rgba_image().save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Save a grid in the plain-text P3 format the decoder reads.
pub fn save_ppm(grid: &PixelGrid, path: &Path) -> Result<(), OutputError> {
    ensure_parent_dir(path)?;
    fs::write(path, encode(grid))?;
    Ok(())
}

/// Save a grid, picking the format from the path's extension.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<(), OutputError> {
    let format = OutputFormat::from_path(path)?;
    match format {
        OutputFormat::Png => save_png(grid, path)?,
        OutputFormat::Ppm => save_ppm(grid, path)?,
    }
    debug!("saved {}x{} grid to {}", grid.rows(), grid.cols(), path.display());
    Ok(())
}
