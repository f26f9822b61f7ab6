//! Transform operations on pixel grids
//!
//! Every operation takes grids by reference and returns a new grid; inputs
//! are never mutated.
//!
//! # Module Structure
//!
//! - [`types`] - Core transform types and error definitions
//! - [`geometry`] - Mirroring and nearest-neighbor resampling
//! - [`color`] - Luminance, grayscale and alpha blending
//! - [`parsing`] - Transform parsing from strings
//! - [`apply`] - Transform application to grids

pub mod apply;
pub mod color;
pub mod geometry;
pub mod parsing;
pub mod types;

// Re-export main types at the module level for convenience
pub use apply::{apply_transform, apply_transforms};
pub use color::{blend, blend_color, gray_scaled, luminance};
pub use geometry::{flipped_horizontally, flipped_vertically, scaled};
pub use parsing::{parse_dimensions, parse_transform_str, parse_transforms};
pub use types::{explain_transform, Transform, TransformError};
