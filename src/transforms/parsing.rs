//! Transform parsing from strings
//!
//! Operations are written as `op` or `op:params`, e.g. `mirror-h` or
//! `scale:4x8`. Operation names are case-insensitive.

use super::types::{Transform, TransformError};

/// Parse a transform from its string form.
///
/// Supported forms:
/// - `mirror-h`, `flip-h`, `mirrorh`
/// - `mirror-v`, `flip-v`, `mirrorv`
/// - `grayscale`, `greyscale`, `gray`, `grey`
/// - `scale:HxW` (`H` rows, `W` columns, both at least 1)
pub fn parse_transform_str(s: &str) -> Result<Transform, TransformError> {
    let s = s.trim();

    let (op, params) =
        if let Some(idx) = s.find(':') { (&s[..idx], Some(&s[idx + 1..])) } else { (s, None) };

    match op.to_lowercase().as_str() {
        "mirror-h" | "flip-h" | "mirrorh" => Ok(Transform::MirrorH),
        "mirror-v" | "flip-v" | "mirrorv" => Ok(Transform::MirrorV),
        "grayscale" | "greyscale" | "gray" | "grey" => Ok(Transform::Grayscale),
        "scale" | "resize" => {
            let dims = params.ok_or_else(|| TransformError::MissingParameter {
                op: "scale".to_string(),
                param: "HxW".to_string(),
            })?;
            let (height, width) = parse_dimensions("scale", dims)?;
            Ok(Transform::Scale { height, width })
        }
        _ => Err(TransformError::UnknownOperation(op.to_string())),
    }
}

/// Parse a list of transform strings, stopping at the first error.
pub fn parse_transforms<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Transform>, TransformError> {
    specs.iter().map(|s| parse_transform_str(s.as_ref())).collect()
}

/// Parse `HxW` into `(rows, cols)`; both must be positive.
pub fn parse_dimensions(op: &str, s: &str) -> Result<(usize, usize), TransformError> {
    let invalid = |message: String| TransformError::InvalidParameter { op: op.to_string(), message };

    let (h, w) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid(format!("expected HxW, got '{}'", s)))?;
    let height = h
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(format!("cannot parse '{}' as a row count", h)))?;
    let width = w
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(format!("cannot parse '{}' as a column count", w)))?;
    if height == 0 || width == 0 {
        return Err(invalid(format!("dimensions must be positive, got {}x{}", height, width)));
    }
    Ok((height, width))
}
