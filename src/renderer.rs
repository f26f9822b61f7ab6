//! Display surfaces that receive pixel grids
//!
//! The [`Renderer`] trait is the seam between grid processing and whatever
//! shows the result. [`crate::terminal::TerminalRenderer`] draws to an ANSI
//! terminal; [`RecordingRenderer`] keeps everything in memory.

use std::io;

use thiserror::Error;

use crate::grid::PixelGrid;

/// Error type for renderer operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Writing to the underlying surface failed
    #[error("Failed to draw frame: {0}")]
    Io(#[from] io::Error),
}

/// A drawing surface for pixel grids.
pub trait Renderer {
    /// Prepare a canvas of `height` rows by `width` columns.
    ///
    /// Called once before any frame is rendered.
    fn configure_canvas(&mut self, height: usize, width: usize) -> Result<(), RenderError>;

    /// Draw every pixel of `grid` and present the frame.
    fn render_frame(&mut self, grid: &PixelGrid) -> Result<(), RenderError>;

    /// Wait between frames.
    fn pause(&mut self, millis: u64);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn configure_canvas(&mut self, height: usize, width: usize) -> Result<(), RenderError> {
        (**self).configure_canvas(height, width)
    }

    fn render_frame(&mut self, grid: &PixelGrid) -> Result<(), RenderError> {
        (**self).render_frame(grid)
    }

    fn pause(&mut self, millis: u64) {
        (**self).pause(millis)
    }
}

/// Renderer that stores what it is asked to draw.
///
/// Pauses are recorded but never slept. Useful for tests and for collecting
/// animation frames before encoding them to a file.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    canvas: Option<(usize, usize)>,
    configure_calls: usize,
    frames: Vec<PixelGrid>,
    pauses: Vec<u64>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas size from the most recent `configure_canvas` call, as `(height, width)`.
    pub fn canvas(&self) -> Option<(usize, usize)> {
        self.canvas
    }

    /// How many times the canvas was configured.
    pub fn configure_calls(&self) -> usize {
        self.configure_calls
    }

    /// Frames in the order they were rendered.
    pub fn frames(&self) -> &[PixelGrid] {
        &self.frames
    }

    /// Requested pause durations, in milliseconds.
    pub fn pauses(&self) -> &[u64] {
        &self.pauses
    }

    pub fn into_frames(self) -> Vec<PixelGrid> {
        self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn configure_canvas(&mut self, height: usize, width: usize) -> Result<(), RenderError> {
        self.canvas = Some((height, width));
        self.configure_calls += 1;
        Ok(())
    }

    fn render_frame(&mut self, grid: &PixelGrid) -> Result<(), RenderError> {
        self.frames.push(grid.clone());
        Ok(())
    }

    fn pause(&mut self, millis: u64) {
        self.pauses.push(millis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgb;

    #[test]
    fn test_recording_renderer_keeps_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.configure_canvas(1, 2).unwrap();
        renderer.render_frame(&PixelGrid::filled(1, 2, Rgb::BLACK)).unwrap();
        renderer.pause(40);
        renderer.render_frame(&PixelGrid::filled(1, 2, Rgb::WHITE)).unwrap();

        assert_eq!(renderer.canvas(), Some((1, 2)));
        assert_eq!(renderer.configure_calls(), 1);
        assert_eq!(renderer.pauses(), &[40]);
        let frames = renderer.into_frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1][(0, 1)], Rgb::WHITE);
    }

    #[test]
    fn test_renderer_through_mut_ref() {
        fn draw(mut target: impl Renderer) {
            target.render_frame(&PixelGrid::filled(1, 1, Rgb::BLACK)).unwrap();
        }
        let mut renderer = RecordingRenderer::new();
        draw(&mut renderer);
        assert_eq!(renderer.frames().len(), 1);
    }
}
