//! Info and print command implementations

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use crate::grid::PixelGrid;
use crate::terminal::format_grid;

use super::{read_grid, EXIT_ERROR, EXIT_SUCCESS};

/// Summary of a decoded image
#[derive(Debug, Serialize)]
struct ImageInfo {
    path: String,
    rows: usize,
    cols: usize,
    pixels: usize,
    /// Mean of each channel, truncated; absent for empty images
    #[serde(skip_serializing_if = "Option::is_none")]
    mean_rgb: Option<[u8; 3]>,
}

fn mean_rgb(grid: &PixelGrid) -> Option<[u8; 3]> {
    let count = grid.pixels().len() as u64;
    if count == 0 {
        return None;
    }
    let mut sums = [0u64; 3];
    for pixel in grid.pixels() {
        for (sum, channel) in sums.iter_mut().zip(pixel.channels()) {
            *sum += channel as u64;
        }
    }
    Some(sums.map(|s| (s / count) as u8))
}

/// Execute the info command
pub fn run_info(input: &Path, json: bool) -> ExitCode {
    let grid = match read_grid(input) {
        Ok(g) => g,
        Err(code) => return code,
    };

    let info = ImageInfo {
        path: input.display().to_string(),
        rows: grid.rows(),
        cols: grid.cols(),
        pixels: grid.pixels().len(),
        mean_rgb: mean_rgb(&grid),
    };

    if json {
        match serde_json::to_string_pretty(&info) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("File:   {}", info.path);
        println!("Size:   {} cols x {} rows", info.cols, info.rows);
        println!("Pixels: {}", info.pixels);
        if let Some([r, g, b]) = info.mean_rgb {
            println!("Mean:   ({},{},{})", r, g, b);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the print command
pub fn run_print(input: &Path) -> ExitCode {
    match read_grid(input) {
        Ok(grid) => {
            print!("{}", format_grid(&grid));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(code) => code,
    }
}
