//! Morph animation - progressively blend a source grid into a target grid
//!
//! The target is resized once to the source's dimensions, then frame `s` of
//! `steps` is `blend(source, scaled_target, 1 - s / steps)`. A morph with
//! `steps = n` always produces `n + 1` frames: the first is the source and the
//! last is the scaled target.

use std::iter::FusedIterator;

use log::{debug, info};
use thiserror::Error;

use crate::grid::PixelGrid;
use crate::renderer::{RenderError, Renderer};
use crate::transforms::color::blend_same_size;
use crate::transforms::{scaled, TransformError};

/// Default pause between displayed morph frames, in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u64 = 500;

/// Error type for driving an animation
#[derive(Debug, Error)]
pub enum AnimationError {
    /// The frame sequence could not be built
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// The renderer failed to draw a frame
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Playback settings for [`morph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphOptions {
    /// Pause after each frame, in milliseconds
    pub delay_ms: u64,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self { delay_ms: DEFAULT_FRAME_DELAY_MS }
    }
}

/// Lazy sequence of morph frames.
///
/// Created by [`morph_frames`]. Each call to `next` computes one blended grid.
#[derive(Debug, Clone)]
pub struct MorphFrames<'a> {
    source: &'a PixelGrid,
    target: PixelGrid,
    steps: usize,
    next_step: usize,
}

impl MorphFrames<'_> {
    /// The target after resizing to the source's dimensions.
    pub fn scaled_target(&self) -> &PixelGrid {
        &self.target
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Iterator for MorphFrames<'_> {
    type Item = PixelGrid;

    fn next(&mut self) -> Option<PixelGrid> {
        if self.next_step > self.steps {
            return None;
        }
        let alpha = 1.0 - self.next_step as f64 / self.steps as f64;
        self.next_step += 1;
        Some(blend_same_size(self.source, &self.target, alpha))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next_step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MorphFrames<'_> {}

impl FusedIterator for MorphFrames<'_> {}

/// Build the frame sequence morphing `source` into `target` in `steps` steps.
///
/// # Errors
///
/// Returns [`TransformError::InvalidArgument`] if `steps` is zero or the
/// source grid is empty.
pub fn morph_frames<'a>(
    source: &'a PixelGrid,
    target: &PixelGrid,
    steps: usize,
) -> Result<MorphFrames<'a>, TransformError> {
    if steps == 0 {
        return Err(TransformError::InvalidArgument {
            op: "morph",
            message: "step count must be at least 1".to_string(),
        });
    }
    if source.is_empty() {
        return Err(TransformError::InvalidArgument {
            op: "morph",
            message: format!(
                "source grid is empty ({}x{})",
                source.rows(),
                source.cols()
            ),
        });
    }

    let target = scaled(target, source.rows(), source.cols())?;
    debug!("morph target scaled to {}x{}, {} steps", target.rows(), target.cols(), steps);
    Ok(MorphFrames { source, target, steps, next_step: 0 })
}

/// Morph `source` into `target`, handing each frame to `renderer`.
///
/// The canvas is configured once with the source's dimensions. Every frame is
/// followed by a pause of `options.delay_ms`. Returns the number of frames
/// rendered (`steps + 1`).
pub fn morph<R: Renderer + ?Sized>(
    source: &PixelGrid,
    target: &PixelGrid,
    steps: usize,
    renderer: &mut R,
    options: &MorphOptions,
) -> Result<usize, AnimationError> {
    let frames = morph_frames(source, target, steps)?;
    renderer.configure_canvas(source.rows(), source.cols())?;

    let mut rendered = 0;
    for frame in frames {
        renderer.render_frame(&frame)?;
        renderer.pause(options.delay_ms);
        rendered += 1;
    }

    info!("morph rendered {} frames", rendered);
    Ok(rendered)
}
