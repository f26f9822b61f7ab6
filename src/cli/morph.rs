//! Morph command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::animation::{morph, MorphOptions};
use crate::config::CliOverrides;
use crate::gif::render_gif;
use crate::renderer::RecordingRenderer;
use crate::terminal::TerminalRenderer;

use super::{load_settings, read_grid, EXIT_ERROR, EXIT_SUCCESS};

/// Morph `source` into `target`, either animating in the terminal or writing a GIF.
pub fn run_morph(
    source: &Path,
    target: &Path,
    gif: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let config = match load_settings(config_path, overrides) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let source_grid = match read_grid(source) {
        Ok(g) => g,
        Err(code) => return code,
    };
    let target_grid = match read_grid(target) {
        Ok(g) => g,
        Err(code) => return code,
    };

    let steps = config.morph.steps;
    let options = MorphOptions { delay_ms: config.morph.delay_ms };

    match gif {
        Some(path) => {
            let mut recorder = RecordingRenderer::new();
            if let Err(e) = morph(&source_grid, &target_grid, steps, &mut recorder, &options) {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
            let frames = recorder.into_frames();
            if let Err(e) = render_gif(&frames, options.delay_ms, config.output.gif_loop, path) {
                eprintln!("Error: Failed to save '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Saved: {} ({} frames)", path.display(), frames.len());
        }
        None => {
            let mut renderer = TerminalRenderer::stdout();
            if let Err(e) = morph(&source_grid, &target_grid, steps, &mut renderer, &options) {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
