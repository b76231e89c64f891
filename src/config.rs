//! Application configuration.
//!
//! Every setting has a fixed default; an optional `webcrippling.toml` in the
//! working directory can override them.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::errors::ConfigError;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "webcrippling.toml";

/// Main application configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Locations of the two model files.
    pub models: ModelsConfig,
    /// Illustration shown under the form.
    pub illustration: IllustrationConfig,
    /// Main window settings.
    pub window: WindowConfig,
}

/// Model file locations.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelsConfig {
    /// Interior One-Flange model.
    pub iof_path: PathBuf,
    /// End One-Flange model.
    pub eof_path: PathBuf,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            iof_path: PathBuf::from("IOF_RF.json"),
            eof_path: PathBuf::from("EOF_RF.json"),
        }
    }
}

/// Illustration settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct IllustrationConfig {
    /// Image file.
    pub path: PathBuf,
    /// Widest the image may be drawn, in pixels.
    pub max_width: u32,
    /// Tallest the image may be drawn, in pixels.
    pub max_height: u32,
}

impl Default for IllustrationConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("image.png"),
            max_width: 800,
            max_height: 600,
        }
    }
}

/// Window settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,
    /// Initial inner width in points.
    pub width: f32,
    /// Initial inner height in points.
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "IOF and EOF Prediction App".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

impl AppConfig {
    /// Load [`CONFIG_FILE`] from the working directory, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load a specific configuration file; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but is malformed.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
