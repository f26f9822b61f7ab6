//! ppmkit - Library for decoding and transforming plain PPM images
//!
//! This library provides functionality to:
//! - Decode plain-text (P3) images into an immutable [`grid::PixelGrid`]
//! - Flip, grayscale, resize (nearest neighbor) and blend grids
//! - Morph one image into another as a sequence of blended frames
//! - Hand frames to a [`renderer::Renderer`], or save them as PNG, PPM or GIF

pub mod animation;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod gif;
pub mod grid;
pub mod output;
pub mod renderer;
pub mod terminal;
pub mod tokenizer;
pub mod transforms;
