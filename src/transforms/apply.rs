//! Transform application functions for grids
//!
//! Dispatches parsed [`Transform`] operations to the grid functions in
//! [`super::geometry`] and [`super::color`].

use log::debug;

use crate::grid::PixelGrid;

use super::color::gray_scaled;
use super::geometry::{flipped_horizontally, flipped_vertically, scaled};
use super::types::{Transform, TransformError};

/// Apply a single transform to a grid, returning a new grid.
pub fn apply_transform(grid: &PixelGrid, transform: &Transform) -> Result<PixelGrid, TransformError> {
    match *transform {
        Transform::MirrorH => Ok(flipped_horizontally(grid)),
        Transform::MirrorV => Ok(flipped_vertically(grid)),
        Transform::Grayscale => Ok(gray_scaled(grid)),
        Transform::Scale { height, width } => scaled(grid, height, width),
    }
}

/// Apply a sequence of transforms in order.
///
/// An empty sequence returns a copy of the input. The first failing transform
/// aborts the chain.
pub fn apply_transforms(
    grid: &PixelGrid,
    transforms: &[Transform],
) -> Result<PixelGrid, TransformError> {
    let mut current = grid.clone();
    for transform in transforms {
        current = apply_transform(&current, transform)?;
        debug!("applied {} -> {}x{}", transform, current.rows(), current.cols());
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgb;

    fn sample() -> PixelGrid {
        PixelGrid::from_rows(vec![
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)],
            vec![Rgb::new(0, 0, 255), Rgb::WHITE],
        ])
        .unwrap()
    }

    #[test]
    fn test_apply_mirror_h() {
        let out = apply_transform(&sample(), &Transform::MirrorH).unwrap();
        assert_eq!(out[(0, 0)], Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_apply_chain_order() {
        let chain = [Transform::MirrorV, Transform::Scale { height: 4, width: 4 }];
        let out = apply_transforms(&sample(), &chain).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out[(0, 0)], Rgb::new(0, 0, 255));
        assert_eq!(out[(3, 3)], Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_apply_empty_chain_copies() {
        assert_eq!(apply_transforms(&sample(), &[]).unwrap(), sample());
    }

    #[test]
    fn test_apply_chain_stops_on_error() {
        let chain = [Transform::Grayscale, Transform::Scale { height: 0, width: 1 }];
        assert!(apply_transforms(&sample(), &chain).is_err());
    }

    #[test]
    fn test_oversized_scale_aborts_chain() {
        let chain = [Transform::MirrorH, Transform::Scale { height: 1 << 32, width: 1 << 32 }];
        assert!(matches!(
            apply_transforms(&sample(), &chain).unwrap_err(),
            TransformError::InvalidArgument { op: "scale", .. }
        ));
    }
}
