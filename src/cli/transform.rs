//! Transform command implementation

use std::path::Path;
use std::process::ExitCode;

use log::info;

use crate::transforms::{apply_transforms, explain_transform, parse_transforms};

use super::{emit_grid, read_grid, EXIT_ERROR, EXIT_INVALID_ARGS};

/// Apply a chain of transforms (mirror, grayscale, scale) to an image.
///
/// Transform strings are validated before the input is read. Nothing is
/// written if any step fails.
pub fn run_transform(input: &Path, transform_specs: &[String], output: Option<&Path>) -> ExitCode {
    let transforms = match parse_transforms(transform_specs) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let grid = match read_grid(input) {
        Ok(g) => g,
        Err(code) => return code,
    };

    for transform in &transforms {
        info!("{}", explain_transform(transform));
    }

    match apply_transforms(&grid, &transforms) {
        Ok(result) => emit_grid(&result, output),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
