//! Blend command implementation

use std::path::Path;
use std::process::ExitCode;

use log::info;

use crate::config::CliOverrides;
use crate::transforms::{blend, scaled};

use super::{emit_grid, load_settings, read_grid, EXIT_ERROR};

/// Blend two images with the configured alpha.
///
/// Without `fit`, images of different sizes are an error and nothing is
/// written.
pub fn run_blend(
    first: &Path,
    second: &Path,
    fit: bool,
    output: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let config = match load_settings(config_path, overrides) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let first_grid = match read_grid(first) {
        Ok(g) => g,
        Err(code) => return code,
    };
    let mut second_grid = match read_grid(second) {
        Ok(g) => g,
        Err(code) => return code,
    };

    if fit && second_grid.dimensions() != first_grid.dimensions() {
        second_grid = match scaled(&second_grid, first_grid.rows(), first_grid.cols()) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Error: '{}': {}", second.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        };
    }

    info!("blending with alpha {}", config.blend.alpha);
    match blend(&first_grid, &second_grid, config.blend.alpha) {
        Ok(result) => emit_grid(&result, output),
        Err(e) => {
            eprintln!("Error: {}", e);
            if !fit {
                eprintln!("Hint: pass --fit to resize the second image first");
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}
