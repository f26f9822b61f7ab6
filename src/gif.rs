//! GIF animation rendering

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::Frame;
use log::debug;

use crate::grid::PixelGrid;
use crate::output::{ensure_parent_dir, OutputError};

/// Render a sequence of grids as an animated GIF.
///
/// # Arguments
///
/// * `frames` - The frames to include in the animation
/// * `duration_ms` - Duration per frame in milliseconds
/// * `loop_anim` - Whether the animation should loop infinitely
/// * `path` - Output file path
///
/// An empty frame list writes nothing and succeeds.
pub fn render_gif(
    frames: &[PixelGrid],
    duration_ms: u64,
    loop_anim: bool,
    path: &Path,
) -> Result<(), OutputError> {
    if frames.is_empty() {
        return Ok(());
    }
    if let Some(empty) = frames.iter().find(|f| f.is_empty()) {
        return Err(OutputError::EmptyImage { rows: empty.rows(), cols: empty.cols() });
    }

    ensure_parent_dir(path)?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = GifEncoder::new(writer);

    let repeat = if loop_anim { Repeat::Infinite } else { Repeat::Finite(0) };
    encoder.set_repeat(repeat)?;

    // GIF delays are in centiseconds; anything below one is raised to one
    let delay_cs = (duration_ms / 10).clamp(1, u16::MAX as u64) as u32;
    let delay = image::Delay::from_numer_denom_ms(delay_cs * 10, 1);

    for grid in frames {
        let frame = Frame::from_parts(grid.to_rgba_image(), 0, 0, delay);
        encoder.encode_frame(frame)?;
    }

    debug!("wrote {} frame GIF to {}", frames.len(), path.display());
    Ok(())
}
