//! Geometric transforms: mirroring and nearest-neighbor resampling

use crate::grid::PixelGrid;

use super::types::TransformError;

/// Mirror a grid left to right: `out[r][c] = in[r][cols - 1 - c]`.
pub fn flipped_horizontally(grid: &PixelGrid) -> PixelGrid {
    let cols = grid.cols();
    PixelGrid::from_fn(grid.rows(), cols, |r, c| grid[(r, cols - 1 - c)])
}

/// Mirror a grid top to bottom: `out[r][c] = in[rows - 1 - r][c]`.
pub fn flipped_vertically(grid: &PixelGrid) -> PixelGrid {
    let rows = grid.rows();
    PixelGrid::from_fn(rows, grid.cols(), |r, c| grid[(rows - 1 - r, c)])
}

/// Map a destination index to its nearest source index.
///
/// Computes `floor(dst * src_len / dst_len)` exactly in integer arithmetic and
/// clamps to the last source index.
fn source_index(dst: usize, src_len: usize, dst_len: usize) -> usize {
    let index = (dst as u128 * src_len as u128 / dst_len as u128) as usize;
    index.min(src_len - 1)
}

/// Resize a grid to exactly `height` rows and `width` columns.
///
/// Nearest-neighbor sampling: destination cell `(r, c)` takes the source
/// pixel at `(floor(r * h0 / height), floor(c * w0 / width))`. No smoothing is
/// performed and the aspect ratio is not preserved.
///
/// # Errors
///
/// Returns [`TransformError::InvalidArgument`] if either target dimension is
/// zero, the target is too large to allocate (see
/// [`PixelGrid::pixel_count`]), or the source grid has no pixels to sample.
///
/// # Examples
///
/// ```
/// use ppmkit::grid::{PixelGrid, Rgb};
/// use ppmkit::transforms::scaled;
///
/// let dot = PixelGrid::filled(1, 1, Rgb::new(10, 20, 30));
/// let big = scaled(&dot, 2, 2).unwrap();
/// assert!(big.pixels().iter().all(|&p| p == Rgb::new(10, 20, 30)));
/// ```
pub fn scaled(
    grid: &PixelGrid,
    height: usize,
    width: usize,
) -> Result<PixelGrid, TransformError> {
    if height == 0 || width == 0 {
        return Err(TransformError::InvalidArgument {
            op: "scale",
            message: format!("target size {}x{} must be at least 1x1", height, width),
        });
    }
    let (h0, w0) = grid.dimensions();
    if grid.is_empty() {
        return Err(TransformError::InvalidArgument {
            op: "scale",
            message: format!("cannot resample an empty {}x{} grid", h0, w0),
        });
    }

    PixelGrid::try_from_fn(height, width, |r, c| {
        grid[(source_index(r, h0, height), source_index(c, w0, width))]
    })
    .map_err(|e| TransformError::InvalidArgument { op: "scale", message: e.to_string() })
}
