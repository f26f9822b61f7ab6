//! Show command implementation (terminal display)

use std::path::Path;
use std::process::ExitCode;

use crate::transforms::{apply_transforms, parse_transforms};

use super::{emit_grid, read_grid, EXIT_ERROR, EXIT_INVALID_ARGS};

/// Execute the show command - draw the image with colored terminal output
pub fn run_show(input: &Path, transform_specs: &[String]) -> ExitCode {
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

    match apply_transforms(&grid, &transforms) {
        Ok(result) => emit_grid(&result, None),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
