//! TOML configuration for the demo webcam.
//!
//! ```toml
//! resolution = "1280x720"
//! fps = 60
//! ```
//!
//! Missing keys fall back to 1920x1080 at 30 fps.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::device::Webcam;
use crate::traits::{CameraError, Result};

/// Webcam settings loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebcamConfig {
    /// Resolution as `"<width>x<height>"`.
    pub resolution: String,
    /// Frames per second.
    pub fps: u32,
}

impl Default for WebcamConfig {
    fn default() -> Self {
        Self {
            resolution: "1920x1080".to_owned(),
            fps: 30,
        }
    }
}

impl WebcamConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for invalid TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` if the file cannot be read, `ConfigParse` if it
    /// is not a valid configuration.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| CameraError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Serialize to TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigSerialize` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build a powered-off webcam from these settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` or `InvalidFrameRate` for bad values.
    pub fn build(&self) -> Result<Webcam> {
        Webcam::new(&self.resolution, self.fps)
    }
}
