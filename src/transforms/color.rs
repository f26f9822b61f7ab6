//! Per-pixel color operations: luminance and alpha blending

use crate::grid::{PixelGrid, Rgb};

use super::types::TransformError;

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Truncate towards zero and clamp into the channel range.
fn to_channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}

/// Perceptual grayscale of a pixel.
///
/// `lum = floor(0.299 r + 0.587 g + 0.114 b)`, returned as `(lum, lum, lum)`.
/// The value is truncated, not rounded.
pub fn luminance(pixel: Rgb) -> Rgb {
    let lum =
        pixel.r as f64 * LUMA_R + pixel.g as f64 * LUMA_G + pixel.b as f64 * LUMA_B;
    Rgb::gray(to_channel(lum))
}

/// Apply [`luminance`] to every pixel.
pub fn gray_scaled(grid: &PixelGrid) -> PixelGrid {
    PixelGrid::from_fn(grid.rows(), grid.cols(), |r, c| luminance(grid[(r, c)]))
}

/// Blend two colors channel by channel.
///
/// Each channel is `floor(alpha * v1 + (1 - alpha) * v2)`, so `alpha = 1.0`
/// yields `c1` and `alpha = 0.0` yields `c2`.
///
/// # Examples
///
/// ```
/// use ppmkit::grid::Rgb;
/// use ppmkit::transforms::blend_color;
///
/// let mid = blend_color(Rgb::gray(100), Rgb::BLACK, 0.5);
/// assert_eq!(mid, Rgb::gray(50));
/// ```
pub fn blend_color(c1: Rgb, c2: Rgb, alpha: f64) -> Rgb {
    let mix = |v1: u8, v2: u8| to_channel(v1 as f64 * alpha + v2 as f64 * (1.0 - alpha));
    Rgb::new(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
}

/// Element-wise blend of two grids of identical dimensions.
///
/// # Errors
///
/// - [`TransformError::DimensionMismatch`] if the grids differ in size
/// - [`TransformError::InvalidArgument`] if `alpha` is not within `[0, 1]`
pub fn blend(first: &PixelGrid, second: &PixelGrid, alpha: f64) -> Result<PixelGrid, TransformError> {
    if first.dimensions() != second.dimensions() {
        return Err(TransformError::DimensionMismatch {
            left: first.dimensions(),
            right: second.dimensions(),
        });
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(TransformError::InvalidArgument {
            op: "blend",
            message: format!("alpha {} is outside [0, 1]", alpha),
        });
    }
    Ok(blend_same_size(first, second, alpha))
}

/// Blend grids already known to share dimensions with an in-range alpha.
pub(crate) fn blend_same_size(first: &PixelGrid, second: &PixelGrid, alpha: f64) -> PixelGrid {
    debug_assert_eq!(first.dimensions(), second.dimensions());
    PixelGrid::from_fn(first.rows(), first.cols(), |r, c| {
        blend_color(first[(r, c)], second[(r, c)], alpha)
    })
}
