//! Terminal rendering utilities for colored grid display
//!
//! Provides ANSI escape sequence generation for displaying pixel grids with
//! true-color backgrounds in terminal emulators that support 24-bit color,
//! plus a plain-text dump of channel values for debugging.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::debug;

use crate::grid::{PixelGrid, Rgb};
use crate::renderer::{RenderError, Renderer};

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a color to an ANSI 24-bit background escape sequence.
///
/// # Examples
///
/// ```
/// use ppmkit::grid::Rgb;
/// use ppmkit::terminal::color_to_ansi_bg;
///
/// assert_eq!(color_to_ansi_bg(Rgb::new(255, 0, 0)), "\x1b[48;2;255;0;0m");
/// ```
pub fn color_to_ansi_bg(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Render a grid as rows of colored cells.
///
/// Each pixel becomes a two-character cell so that pixels look roughly square
/// in a typical terminal font. Row 0 is printed first (top of the screen).
pub fn render_ansi_grid(grid: &PixelGrid) -> String {
    let mut output = String::new();
    for row in grid.rows_iter() {
        for &pixel in row {
            output.push_str(&color_to_ansi_bg(pixel));
            output.push_str("  ");
        }
        output.push_str(ANSI_RESET);
        output.push('\n');
    }
    output
}

/// Format a single pixel as `(rrr,ggg,bbb)` with right-aligned channels.
pub fn format_pixel(pixel: Rgb) -> String {
    format!("({:>3},{:>3},{:>3})", pixel.r, pixel.g, pixel.b)
}

/// Dump every pixel's channel values, one image row per line.
///
/// # Examples
///
/// ```
/// use ppmkit::grid::{PixelGrid, Rgb};
/// use ppmkit::terminal::format_grid;
///
/// let grid = PixelGrid::filled(1, 2, Rgb::new(255, 0, 7));
/// assert_eq!(format_grid(&grid), "(255,  0,  7)  (255,  0,  7)  \n");
/// ```
pub fn format_grid(grid: &PixelGrid) -> String {
    let mut output = String::new();
    for row in grid.rows_iter() {
        for &pixel in row {
            output.push_str(&format_pixel(pixel));
            output.push_str("  ");
        }
        output.push('\n');
    }
    output
}

/// Renderer that draws frames to a terminal with ANSI escapes.
///
/// Pixel `(r, c)` is drawn at column `c`, `rows - 1 - r` lines up from the
/// bottom of the frame, i.e. row 0 ends up on top. Successive frames overdraw
/// the previous one in place.
pub struct TerminalRenderer<W: Write> {
    out: W,
    canvas: Option<(usize, usize)>,
    /// Lines written by the previous frame
    last_height: usize,
}

impl TerminalRenderer<io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, canvas: None, last_height: 0 }
    }

    /// Canvas size from `configure_canvas`, as `(height, width)`.
    pub fn canvas(&self) -> Option<(usize, usize)> {
        self.canvas
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn configure_canvas(&mut self, height: usize, width: usize) -> Result<(), RenderError> {
        debug!("terminal canvas {}x{}", height, width);
        self.canvas = Some((height, width));
        self.last_height = 0;
        Ok(())
    }

    fn render_frame(&mut self, grid: &PixelGrid) -> Result<(), RenderError> {
        if self.last_height > 0 {
            // Move back up to overdraw the previous frame
            write!(self.out, "\x1b[{}A", self.last_height)?;
        }
        self.out.write_all(render_ansi_grid(grid).as_bytes())?;
        self.out.flush()?;
        self.last_height = grid.rows();
        Ok(())
    }

    fn pause(&mut self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_ansi_bg() {
        assert_eq!(color_to_ansi_bg(Rgb::new(1, 2, 3)), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn test_render_ansi_grid_rows() {
        let grid = PixelGrid::from_rows(vec![
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)],
            vec![Rgb::new(0, 0, 255), Rgb::WHITE],
        ])
        .unwrap();
        let out = render_ansi_grid(&grid);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\x1b[48;2;255;0;0m  \x1b[48;2;0;255;0m  "));
        assert!(lines[1].ends_with(ANSI_RESET));
    }

    #[test]
    fn test_format_grid_layout() {
        let grid = PixelGrid::from_rows(vec![
            vec![Rgb::new(10, 20, 30)],
            vec![Rgb::new(255, 255, 255)],
        ])
        .unwrap();
        assert_eq!(format_grid(&grid), "( 10, 20, 30)  \n(255,255,255)  \n");
    }

    #[test]
    fn test_format_empty_grid() {
        assert_eq!(format_grid(&PixelGrid::default()), "");
    }

    #[test]
    fn test_terminal_renderer_overdraws() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.configure_canvas(2, 1).unwrap();
        let grid = PixelGrid::filled(2, 1, Rgb::BLACK);
        renderer.render_frame(&grid).unwrap();
        renderer.render_frame(&grid).unwrap();
        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(written.matches("\x1b[2A").count(), 1);
        assert_eq!(written.matches(ANSI_RESET).count(), 4);
    }
}
