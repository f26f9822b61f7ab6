//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod blend;
mod info;
mod morph;
mod show;
mod transform;

use clap::{Parser, Subcommand};
use log::error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{resolve_config, CliOverrides, PpmkitConfig};
use crate::decoder::{decode_file, DecodeError};
use crate::grid::PixelGrid;
use crate::output::save_grid;
use crate::renderer::Renderer;
use crate::terminal::TerminalRenderer;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// ppmkit - Decode plain PPM images, transform them, and morph between them
#[derive(Parser)]
#[command(name = "ppmkit")]
#[command(about = "ppmkit - Decode plain PPM (P3) images, transform them, and morph between them")]
#[command(version)]
pub struct Cli {
    /// Path to a ppmkit.toml (default: searched upwards from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show image dimensions and summary statistics
    Info {
        /// Input P3 image
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every pixel's (r,g,b) values
    Print {
        /// Input P3 image
        input: PathBuf,
    },

    /// Display an image in the terminal using 24-bit color
    Show {
        /// Input P3 image
        input: PathBuf,

        /// Transform to apply before display (repeatable): mirror-h, mirror-v, grayscale, scale:HxW
        #[arg(short = 't', long = "transform")]
        transforms: Vec<String>,
    },

    /// Apply one or more transforms to an image
    Transform {
        /// Input P3 image
        input: PathBuf,

        /// Transform to apply (repeatable, applied in order): mirror-h, mirror-v, grayscale, scale:HxW
        #[arg(short = 't', long = "transform", required = true)]
        transforms: Vec<String>,

        /// Output file (.png or .ppm). If omitted, the result is shown in the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Blend two images: alpha * first + (1 - alpha) * second
    Blend {
        /// First P3 image (weighted by alpha)
        first: PathBuf,

        /// Second P3 image (weighted by 1 - alpha)
        second: PathBuf,

        /// Weight of the first image, 0.0-1.0 (default from config: 0.5)
        #[arg(long)]
        alpha: Option<f64>,

        /// Resize the second image to the first image's dimensions before blending
        #[arg(long)]
        fit: bool,

        /// Output file (.png or .ppm). If omitted, the result is shown in the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Morph a source image into a target image frame by frame
    Morph {
        /// Source P3 image (first frame)
        source: PathBuf,

        /// Target P3 image (resized to the source's dimensions)
        target: PathBuf,

        /// Number of blend steps; produces steps + 1 frames (default from config: 10)
        #[arg(long)]
        steps: Option<usize>,

        /// Pause after each frame in milliseconds (default from config: 500)
        #[arg(long)]
        delay: Option<u64>,

        /// Write the frames to an animated GIF instead of the terminal
        #[arg(long)]
        gif: Option<PathBuf>,

        /// Play the GIF once instead of looping
        #[arg(long)]
        no_loop: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Info { input, json } => info::run_info(&input, json),
        Commands::Print { input } => info::run_print(&input),
        Commands::Show { input, transforms } => show::run_show(&input, &transforms),
        Commands::Transform { input, transforms, output } => {
            transform::run_transform(&input, &transforms, output.as_deref())
        }
        Commands::Blend { first, second, alpha, fit, output } => {
            let overrides = CliOverrides { alpha, ..Default::default() };
            blend::run_blend(&first, &second, fit, output.as_deref(), config_path, &overrides)
        }
        Commands::Morph { source, target, steps, delay, gif, no_loop } => {
            let overrides = CliOverrides {
                steps,
                delay_ms: delay,
                gif_loop: no_loop.then_some(false),
                ..Default::default()
            };
            morph::run_morph(&source, &target, gif.as_deref(), config_path, &overrides)
        }
    }
}

/// Decode an input image, reporting failures on stderr.
///
/// Unreadable files map to `EXIT_INVALID_ARGS`. Malformed content, including
/// text that is not valid UTF-8, maps to `EXIT_ERROR`.
pub(crate) fn read_grid(path: &Path) -> Result<PixelGrid, ExitCode> {
    decode_file(path).map_err(|e| {
        error!("decode failed for {}: {}", path.display(), e);
        match e {
            DecodeError::Io(io) if io.kind() != ErrorKind::InvalidData => {
                eprintln!("Error: Cannot open input file '{}': {}", path.display(), io);
                ExitCode::from(EXIT_INVALID_ARGS)
            }
            other => {
                eprintln!("Error: '{}': {}", path.display(), other);
                ExitCode::from(EXIT_ERROR)
            }
        }
    })
}

/// Load config with CLI overrides applied, reporting failures on stderr.
pub(crate) fn load_settings(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<PpmkitConfig, ExitCode> {
    resolve_config(config_path, overrides).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}

/// Save a result to `output`, or draw it in the terminal when no path is given.
pub(crate) fn emit_grid(grid: &PixelGrid, output: Option<&Path>) -> ExitCode {
    match output {
        Some(path) => {
            if let Err(e) = save_grid(grid, path) {
                eprintln!("Error: Failed to save '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Saved: {}", path.display());
        }
        None => {
            let mut renderer = TerminalRenderer::stdout();
            let drawn = renderer
                .configure_canvas(grid.rows(), grid.cols())
                .and_then(|()| renderer.render_frame(grid));
            if let Err(e) = drawn {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}
