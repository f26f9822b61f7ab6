//! Configuration for ppmkit
//!
//! Provides types, discovery and loading for `ppmkit.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
