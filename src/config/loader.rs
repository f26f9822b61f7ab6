//! Configuration loading and discovery for `ppmkit.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PpmkitConfig;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "ppmkit.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse ppmkit.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override morph step count
    pub steps: Option<usize>,
    /// Override frame delay
    pub delay_ms: Option<u64>,
    /// Override blend alpha
    pub alpha: Option<f64>,
    /// Override GIF looping
    pub gif_loop: Option<bool>,
}

/// Find ppmkit.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for ppmkit.toml
/// 2. Check XDG_CONFIG_HOME/ppmkit/ppmkit.toml (or ~/.config/ppmkit/ppmkit.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find ppmkit.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("ppmkit").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find ppmkit.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<PpmkitConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(PpmkitConfig::default())
        }
    }
}

/// Load and validate configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<PpmkitConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PpmkitConfig = toml::from_str(&contents)?;
    check(&config)?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

fn check(config: &PpmkitConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PpmkitConfig, overrides: &CliOverrides) {
    if let Some(steps) = overrides.steps {
        config.morph.steps = steps;
    }
    if let Some(delay_ms) = overrides.delay_ms {
        config.morph.delay_ms = delay_ms;
    }
    if let Some(alpha) = overrides.alpha {
        config.blend.alpha = alpha;
    }
    if let Some(gif_loop) = overrides.gif_loop {
        config.output.gif_loop = gif_loop;
    }
}

/// Load configuration, apply CLI overrides, and validate the result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<PpmkitConfig, ConfigError> {
    let mut config = load_config(path)?;
    merge_cli_overrides(&mut config, overrides);
    check(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[morph]\nsteps = 3\n");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "");

        let subdir = temp.path().join("images").join("raw");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "[blend]\nalpha = 0.25\n");

        let config = load_config(Some(&path)).expect("should load");
        assert_eq!(config.blend.alpha, 0.25);
        assert_eq!(config.morph.steps, 10);
    }

    #[test]
    fn test_load_config_parse_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "[morph\nsteps = ");
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "[morph]\nsteps = 0\n");
        match load_config(Some(&path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("morph.steps"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("absent.toml");
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = PpmkitConfig::default();
        let overrides = CliOverrides {
            steps: Some(3),
            alpha: Some(0.9),
            ..Default::default()
        };
        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.morph.steps, 3);
        assert_eq!(config.blend.alpha, 0.9);
        assert_eq!(config.morph.delay_ms, 500);
        assert!(config.output.gif_loop);
    }

    #[test]
    fn test_resolve_config_rejects_bad_override() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = write_config(temp.path(), "");
        let overrides = CliOverrides { steps: Some(0), ..Default::default() };
        assert!(matches!(
            resolve_config(Some(&path), &overrides),
            Err(ConfigError::Validation(_))
        ));
    }
}
