//! Configuration schema types for `ppmkit.toml`
//!
//! Every section and field is optional; missing values fall back to the
//! defaults documented on each field.

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_FRAME_DELAY_MS;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PpmkitConfig {
    /// Morph animation defaults
    #[serde(default)]
    pub morph: MorphConfig,
    /// Static blend defaults
    #[serde(default)]
    pub blend: BlendConfig,
    /// File output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[morph]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphConfig {
    /// Number of blend steps (frames = steps + 1)
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Pause after each frame, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self { steps: default_steps(), delay_ms: default_delay_ms() }
    }
}

fn default_steps() -> usize {
    10
}

fn default_delay_ms() -> u64 {
    DEFAULT_FRAME_DELAY_MS
}

/// `[blend]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Weight of the first image, within [0, 1]
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self { alpha: default_alpha() }
    }
}

fn default_alpha() -> f64 {
    0.5
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Loop GIF animations forever
    #[serde(default = "default_gif_loop")]
    pub gif_loop: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { gif_loop: default_gif_loop() }
    }
}

fn default_gif_loop() -> bool {
    true
}

/// A single validation problem
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "morph.steps")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ppmkit.toml: '{}' {}", self.field, self.message)
    }
}

impl PpmkitConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.morph.steps == 0 {
            errors.push(ConfigValidationError {
                field: "morph.steps".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.blend.alpha) {
            errors.push(ConfigValidationError {
                field: "blend.alpha".to_string(),
                message: format!("must be within [0, 1], got {}", self.blend.alpha),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
