//! Pixel grid data model
//!
//! A [`PixelGrid`] is an immutable, rectangular, row-major array of [`Rgb`]
//! triples. Every transform in this crate produces a new grid; nothing here
//! mutates a grid after construction.

use std::fmt;
use std::ops::Index;

use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use thiserror::Error;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray color with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Channels as an array, in `[r, g, b]` order.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Rgba<u8> {
    fn from(c: Rgb) -> Self {
        Rgba([c.r, c.g, c.b, 255])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

/// Errors raised when constructing a grid from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Flat pixel buffer length does not equal `rows * cols`
    #[error("expected {expected} pixels for a {rows}x{cols} grid, got {actual}")]
    LengthMismatch { rows: usize, cols: usize, expected: usize, actual: usize },
    /// A row in nested input has a different length than the first row
    #[error("row {row} has {actual} pixels, expected {expected}")]
    JaggedRow { row: usize, expected: usize, actual: usize },
    /// A dimension exceeds [`MAX_DIMENSION`] or the pixel buffer cannot be addressed
    #[error("grid dimensions {rows}x{cols} are too large")]
    TooLarge { rows: usize, cols: usize },
}

/// Largest row or column count a grid may have. PNG and GIF sizes are `u32`.
pub const MAX_DIMENSION: usize = u32::MAX as usize;

/// Rectangular row-major array of pixels.
///
/// Dimensions are given as `(rows, cols)`, i.e. height first. A grid with zero
/// rows or zero columns is empty and holds no pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Number of pixels in a `rows` x `cols` grid.
    ///
    /// # Errors
    ///
    /// [`GridError::TooLarge`] if either dimension exceeds [`MAX_DIMENSION`]
    /// or the pixel buffer would exceed `isize::MAX` bytes.
    pub fn pixel_count(rows: usize, cols: usize) -> Result<usize, GridError> {
        let too_large = GridError::TooLarge { rows, cols };
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(too_large);
        }
        let count = rows.checked_mul(cols).ok_or_else(|| too_large.clone())?;
        match count.checked_mul(std::mem::size_of::<Rgb>()) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(count),
            _ => Err(too_large),
        }
    }

    /// Build a grid from a flat row-major pixel buffer.
    pub fn new(rows: usize, cols: usize, pixels: Vec<Rgb>) -> Result<Self, GridError> {
        let expected = Self::pixel_count(rows, cols)?;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch { rows, cols, expected, actual: pixels.len() });
        }
        Ok(Self { rows, cols, pixels })
    }

    /// Build a grid from nested rows, rejecting jagged input.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(Self::pixel_count(height, width)?);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::JaggedRow { row: index, expected: width, actual: row.len() });
            }
            pixels.extend(row);
        }
        Ok(Self { rows: height, cols: width, pixels })
    }

    /// A grid where every cell holds `color`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are rejected by [`PixelGrid::pixel_count`].
    pub fn filled(rows: usize, cols: usize, color: Rgb) -> Self {
        match Self::pixel_count(rows, cols) {
            Ok(count) => Self { rows, cols, pixels: vec![color; count] },
            Err(e) => panic!("{}", e),
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    ///
    /// Cells are computed in parallel; the result is identical to a row-major
    /// sequential evaluation.
    ///
    /// # Errors
    ///
    /// [`GridError::TooLarge`] if the dimensions are rejected by
    /// [`PixelGrid::pixel_count`]. `f` is never called in that case.
    pub fn try_from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self, GridError>
    where
        F: Fn(usize, usize) -> Rgb + Send + Sync,
    {
        let count = Self::pixel_count(rows, cols)?;
        let pixels = (0..count).into_par_iter().map(|i| f(i / cols, i % cols)).collect();
        Ok(Self { rows, cols, pixels })
    }

    /// Infallible [`PixelGrid::try_from_fn`] for dimensions already known to be valid,
    /// such as those of an existing grid.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are rejected by [`PixelGrid::pixel_count`].
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> Rgb + Send + Sync,
    {
        match Self::try_from_fn(rows, cols, f) {
            Ok(grid) => grid,
            Err(e) => panic!("{}", e),
        }
    }

    /// Number of rows (height).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (width).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row < self.rows && col < self.cols {
            Some(self.pixels[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Rgb] {
        assert!(row < self.rows, "row {} out of bounds for {} rows", row, self.rows);
        &self.pixels[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[Rgb]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// The flat row-major pixel buffer.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Convert to an opaque RGBA image for encoding with the `image` crate.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.cols as u32, self.rows as u32, |x, y| {
            self.pixels[y as usize * self.cols + x as usize].into()
        })
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = Rgb;

    fn index(&self, (row, col): (usize, usize)) -> &Rgb {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.pixels[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelGrid {
        PixelGrid::from_rows(vec![
            vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)],
            vec![Rgb::new(10, 11, 12), Rgb::new(13, 14, 15), Rgb::new(16, 17, 18)],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_dimensions() {
        let grid = sample();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid[(1, 2)], Rgb::new(16, 17, 18));
        assert_eq!(grid.row(0)[1], Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let err = PixelGrid::from_rows(vec![vec![Rgb::BLACK, Rgb::BLACK], vec![Rgb::BLACK]])
            .unwrap_err();
        assert_eq!(err, GridError::JaggedRow { row: 1, expected: 2, actual: 1 });
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = PixelGrid::new(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert!(matches!(err, GridError::LengthMismatch { expected: 4, actual: 3, .. }));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = sample();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(0, 0), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = PixelGrid::from_fn(3, 4, |r, c| Rgb::new(r as u8, c as u8, 0));
        for r in 0..3 {
            for c in 0..4 {
                assert_eq!(grid[(r, c)], Rgb::new(r as u8, c as u8, 0));
            }
        }
    }

    #[test]
    fn test_empty_grids() {
        assert!(PixelGrid::from_fn(0, 5, |_, _| Rgb::WHITE).is_empty());
        assert!(PixelGrid::from_fn(5, 0, |_, _| Rgb::WHITE).is_empty());
        assert_eq!(PixelGrid::from_rows(vec![]).unwrap().dimensions(), (0, 0));
    }

    #[test]
    fn test_pixel_count_overflow() {
        let big = 1usize << 32;
        assert_eq!(PixelGrid::pixel_count(3, 4), Ok(12));
        assert_eq!(PixelGrid::pixel_count(0, MAX_DIMENSION), Ok(0));
        assert_eq!(
            PixelGrid::pixel_count(big, big),
            Err(GridError::TooLarge { rows: big, cols: big })
        );
        assert!(PixelGrid::pixel_count(MAX_DIMENSION, MAX_DIMENSION).is_err());
    }

    #[test]
    fn test_try_from_fn_rejects_oversized() {
        let big = 1usize << 32;
        let result = PixelGrid::try_from_fn(big, big, |_, _| Rgb::BLACK);
        assert!(matches!(result, Err(GridError::TooLarge { .. })));
        assert!(PixelGrid::new(big, big, Vec::new()).is_err());
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_filled_panics_on_overflow() {
        let _ = PixelGrid::filled(usize::MAX, 2, Rgb::BLACK);
    }

    #[test]
    fn test_to_rgba_image() {
        let image = sample().to_rgba_image();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(*image.get_pixel(2, 1), Rgba([16, 17, 18, 255]));
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(255, 0, 10).to_string(), "(255,0,10)");
    }
}
