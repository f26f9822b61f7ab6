//! Core transform types and error definitions
//!
//! Contains the `Transform` enum representing the supported grid operations
//! and `TransformError` for error handling during parsing and application.

use std::fmt;

/// Errors that can occur during transform parsing or application
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// Unknown transform operation
    #[error("unknown transform operation: {0}")]
    UnknownOperation(String),

    /// Invalid parameter value in a transform string
    #[error("invalid parameter for {op}: {message}")]
    InvalidParameter { op: String, message: String },

    /// Missing required parameter in a transform string
    #[error("missing required parameter for {op}: {param}")]
    MissingParameter { op: String, param: String },

    /// An operation was called with an argument it cannot honor
    #[error("invalid argument for {op}: {message}")]
    InvalidArgument { op: &'static str, message: String },

    /// Two grids combined element-wise have different dimensions
    #[error(
        "dimension mismatch: {}x{} vs {}x{} (rows x cols)",
        left.0, left.1, right.0, right.1
    )]
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },
}

/// A single grid operation with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Mirror left to right
    MirrorH,
    /// Mirror top to bottom
    MirrorV,
    /// Replace every pixel with its luminance
    Grayscale,
    /// Nearest-neighbor resize to an exact size
    Scale {
        /// Target rows
        height: usize,
        /// Target columns
        width: usize,
    },
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::MirrorH => f.write_str("mirror-h"),
            Transform::MirrorV => f.write_str("mirror-v"),
            Transform::Grayscale => f.write_str("grayscale"),
            Transform::Scale { height, width } => write!(f, "scale:{}x{}", height, width),
        }
    }
}

/// Generate a human-readable explanation of a transform.
///
/// # Examples
///
/// ```
/// use ppmkit::transforms::{explain_transform, Transform};
///
/// let t = Transform::Scale { height: 4, width: 8 };
/// assert_eq!(explain_transform(&t), "Resize to 4 rows x 8 columns (nearest neighbor)");
/// ```
pub fn explain_transform(transform: &Transform) -> String {
    match transform {
        Transform::MirrorH => "Flip horizontally (mirror left <-> right)".to_string(),
        Transform::MirrorV => "Flip vertically (mirror top <-> bottom)".to_string(),
        Transform::Grayscale => "Convert to grayscale (luminance)".to_string(),
        Transform::Scale { height, width } => {
            format!("Resize to {} rows x {} columns (nearest neighbor)", height, width)
        }
    }
}
