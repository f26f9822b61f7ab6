//! Plain-text (P3) image decoding and encoding
//!
//! The accepted layout is a whitespace-separated token stream:
//!
//! ```text
//! <format-tag>          ignored
//! <cols> <rows>         columns first
//! <max-channel>         parsed, value ignored (assumed 255)
//! <r g b> x rows*cols   row-major
//! ```
//!
//! Channel values above 255 are rejected rather than clamped.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::grid::{PixelGrid, Rgb};
use crate::tokenizer::{Token, Tokens};

/// Largest pixel buffer reserved up front, regardless of the declared size.
const MAX_PREALLOCATED_PIXELS: usize = 1 << 20;

/// Largest nonzero dimension accepted when the other dimension is zero.
const MAX_EMPTY_EXTENT: usize = 1 << 20;

/// Error type for malformed image sources
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// A header field is absent
    #[error("missing {field} in image header")]
    MissingHeader { field: &'static str },
    /// A header or channel token is not a non-negative integer
    #[error("line {line}: invalid {field} '{token}'")]
    InvalidNumber { field: &'static str, token: String, line: usize },
    /// Declared dimensions cannot be represented
    #[error("image dimensions {cols}x{rows} are too large")]
    TooLarge { rows: usize, cols: usize },
    /// Fewer channel values than the header declares
    #[error("unexpected end of input: expected {expected} channel values, found {found}")]
    UnexpectedEof { expected: usize, found: usize },
    /// A channel value is above 255
    #[error("line {line}: channel value {value} at pixel ({row}, {col}) is outside 0-255")]
    ChannelOutOfRange { value: u64, row: usize, col: usize, line: usize },
    /// Reading the source failed
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_number(token: Token<'_>, field: &'static str) -> Result<u64, DecodeError> {
    token.text.parse::<u64>().map_err(|_| DecodeError::InvalidNumber {
        field,
        token: token.text.to_string(),
        line: token.line,
    })
}

fn parse_dimension(token: Option<Token<'_>>, field: &'static str) -> Result<usize, DecodeError> {
    let token = token.ok_or(DecodeError::MissingHeader { field })?;
    let value = parse_number(token, field)?;
    usize::try_from(value).map_err(|_| DecodeError::InvalidNumber {
        field,
        token: token.text.to_string(),
        line: token.line,
    })
}

/// Decode a plain-text image into a [`PixelGrid`].
///
/// Pixels are filled row-major in read order: row 0 first and, within a row,
/// column 0 first. Tokens after the last pixel are ignored.
///
/// # Examples
///
/// ```
/// use ppmkit::decoder::decode;
/// use ppmkit::grid::Rgb;
///
/// let grid = decode("P3\n2 1\n255\n255 0 0  0 0 255\n").unwrap();
/// assert_eq!(grid.dimensions(), (1, 2));
/// assert_eq!(grid[(0, 1)], Rgb::new(0, 0, 255));
/// ```
pub fn decode(source: &str) -> Result<PixelGrid, DecodeError> {
    let mut tokens = Tokens::new(source);

    tokens.next().ok_or(DecodeError::MissingHeader { field: "format tag" })?;
    let cols = parse_dimension(tokens.next(), "column count")?;
    let rows = parse_dimension(tokens.next(), "row count")?;
    let max_token = tokens.next().ok_or(DecodeError::MissingHeader { field: "max channel value" })?;
    let max_value = parse_number(max_token, "max channel value")?;
    if max_value != 255 {
        warn!("max channel value {} ignored, channels are read as 0-255", max_value);
    }

    let too_large = || DecodeError::TooLarge { rows, cols };
    let pixel_count = PixelGrid::pixel_count(rows, cols).map_err(|_| too_large())?;
    if pixel_count == 0 && rows.max(cols) > MAX_EMPTY_EXTENT {
        return Err(too_large());
    }
    let expected = pixel_count.checked_mul(3).ok_or_else(too_large)?;

    let mut pixels = Vec::with_capacity(pixel_count.min(MAX_PREALLOCATED_PIXELS));
    let mut found = 0;
    for index in 0..pixel_count {
        let (row, col) = (index / cols, index % cols);
        let mut channels = [0u8; 3];
        for channel in channels.iter_mut() {
            let token = tokens.next().ok_or(DecodeError::UnexpectedEof { expected, found })?;
            let value = parse_number(token, "channel value")?;
            *channel = u8::try_from(value).map_err(|_| DecodeError::ChannelOutOfRange {
                value,
                row,
                col,
                line: token.line,
            })?;
            found += 1;
        }
        pixels.push(Rgb::from(channels));
    }

    debug!("decoded {}x{} image ({} pixels)", cols, rows, pixel_count);
    PixelGrid::new(rows, cols, pixels).map_err(|_| too_large())
}

/// Decode an image from any reader.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<PixelGrid, DecodeError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    decode(&source)
}

/// Decode an image file from disk.
pub fn decode_file(path: &Path) -> Result<PixelGrid, DecodeError> {
    let source = fs::read_to_string(path)?;
    debug!("read {} ({} bytes)", path.display(), source.len());
    decode(&source)
}

/// Encode a grid in the same plain-text format [`decode`] accepts.
///
/// Each image row is written on its own line.
pub fn encode(grid: &PixelGrid) -> String {
    let mut out = format!("P3\n{} {}\n255\n", grid.cols(), grid.rows());
    for row in grid.rows_iter() {
        let line: Vec<String> =
            row.iter().map(|p| format!("{} {} {}", p.r, p.g, p.b)).collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = "P3\n2 2\n255\n255 0 0  0 255 0\n0 0 255  255 255 255\n";

    #[test]
    fn test_decode_row_major() {
        let grid = decode(TINY).unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid[(0, 0)], Rgb::new(255, 0, 0));
        assert_eq!(grid[(0, 1)], Rgb::new(0, 255, 0));
        assert_eq!(grid[(1, 0)], Rgb::new(0, 0, 255));
        assert_eq!(grid[(1, 1)], Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_decode_columns_before_rows() {
        let grid = decode("P3 3 1 255  1 1 1  2 2 2  3 3 3").unwrap();
        assert_eq!(grid.dimensions(), (1, 3));
        assert_eq!(grid[(0, 2)], Rgb::gray(3));
    }

    #[test]
    fn test_decode_with_comments() {
        let grid = decode("P3\n# created by hand\n1 1\n255\n10 20 30 # only pixel\n").unwrap();
        assert_eq!(grid[(0, 0)], Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_decode_ignores_trailing_tokens() {
        let grid = decode("P3 1 1 255 1 2 3 4 5 6").unwrap();
        assert_eq!(grid.pixels(), &[Rgb::new(1, 2, 3)]);
    }

    #[test]
    fn test_decode_truncated() {
        let err = decode("P3 2 1 255 1 2 3 4 5").unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof { expected: 6, found: 5 }));
    }

    #[test]
    fn test_decode_missing_header() {
        assert!(matches!(
            decode("").unwrap_err(),
            DecodeError::MissingHeader { field: "format tag" }
        ));
        assert!(matches!(
            decode("P3 2 2").unwrap_err(),
            DecodeError::MissingHeader { field: "max channel value" }
        ));
    }

    #[test]
    fn test_decode_rejects_out_of_range_channel() {
        let err = decode("P3\n2 1\n255\n0 0 0\n0 256 0\n").unwrap_err();
        match err {
            DecodeError::ChannelOutOfRange { value, row, col, line } => {
                assert_eq!((value, row, col, line), (256, 0, 1, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_negative_and_garbage() {
        assert!(matches!(
            decode("P3 1 1 255 -1 0 0").unwrap_err(),
            DecodeError::InvalidNumber { field: "channel value", .. }
        ));
        assert!(matches!(
            decode("P3 x 1 255").unwrap_err(),
            DecodeError::InvalidNumber { field: "column count", .. }
        ));
    }

    #[test]
    fn test_decode_zero_sized() {
        let grid = decode("P3 0 4 255").unwrap();
        assert_eq!(grid.dimensions(), (4, 0));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_decode_overflowing_dimensions() {
        let huge = usize::MAX.to_string();
        let err = decode(&format!("P3 {huge} {huge} 255")).unwrap_err();
        assert!(matches!(err, DecodeError::TooLarge { .. }));
    }

    #[test]
    fn test_decode_rejects_huge_empty_extent() {
        let err = decode("P3 0 1000000000000 255").unwrap_err();
        assert!(matches!(err, DecodeError::TooLarge { rows: 1_000_000_000_000, cols: 0 }));
        assert!(matches!(decode("P3 5000000 0 255").unwrap_err(), DecodeError::TooLarge { .. }));
    }

    #[test]
    fn test_encode_then_decode() {
        let grid = decode(TINY).unwrap();
        let text = encode(&grid);
        assert!(text.starts_with("P3\n2 2\n255\n"));
        assert_eq!(decode(&text).unwrap(), grid);
    }

    #[test]
    fn test_decode_reader() {
        let grid = decode_reader(TINY.as_bytes()).unwrap();
        assert_eq!(grid.rows(), 2);
    }
}
