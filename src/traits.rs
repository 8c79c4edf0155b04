//! Core traits and types for the webcam model.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Frame size in pixels (e.g., 1920x1080).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Full HD, 1920x1080.
    pub const FULL_HD: Self = Self::new(1920, 1080);
    /// HD, 1280x720.
    pub const HD: Self = Self::new(1280, 720);

    /// Create a new resolution. Use [`str::parse`] for checked construction.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in one frame.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl FromStr for Resolution {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self> {
        crate::validation::parse_resolution(s)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Power state of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Camera is switched off. Every camera starts here.
    #[default]
    Off,
    /// Camera is switched on and can capture.
    On,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
        }
    }
}

/// Reason a capture request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRejection {
    /// Capture was requested while the camera was off.
    PoweredOff,
}

impl fmt::Display for CaptureRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoweredOff => write!(f, "camera is off"),
        }
    }
}

/// Outcome of a capture request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureResult {
    /// Photo taken.
    Captured {
        /// Resolution the photo was taken at.
        resolution: Resolution,
        /// Estimated file size in megabytes.
        size_mb: f64,
    },
    /// Nothing was captured.
    Rejected(CaptureRejection),
}

impl CaptureResult {
    /// Whether a photo was taken.
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        matches!(self, Self::Captured { .. })
    }

    /// Estimated file size in megabytes, if a photo was taken.
    #[must_use]
    pub const fn size_mb(&self) -> Option<f64> {
        match self {
            Self::Captured { size_mb, .. } => Some(*size_mb),
            Self::Rejected(_) => None,
        }
    }
}

impl fmt::Display for CaptureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Captured {
                resolution,
                size_mb,
            } => write!(
                f,
                "Photo taken at {resolution}, estimated file size: {size_mb} MB"
            ),
            Self::Rejected(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// Error type for camera configuration.
///
/// Capturing while powered off is not an error; see [`CaptureResult::Rejected`].
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// Resolution string is not `<width>x<height>` with positive integers.
    #[error("invalid resolution {input:?}: {reason}")]
    InvalidResolution {
        /// The rejected input.
        input: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Frame rate must be positive.
    #[error("invalid frame rate {0}: must be greater than zero")]
    InvalidFrameRate(u32),
    /// Configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Configuration file is not valid TOML for this crate.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// Configuration could not be written as TOML.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for camera operations.
pub type Result<T> = std::result::Result<T, CameraError>;

/// Abstraction over a camera with an on/off switch and a shutter.
pub trait Camera {
    /// Switch the camera on. Idempotent.
    fn power_on(&mut self);

    /// Switch the camera off. Idempotent.
    fn power_off(&mut self);

    /// Whether the camera is currently on.
    fn is_powered_on(&self) -> bool;

    /// Attempt to take a photo. Never changes the power state.
    fn capture(&mut self) -> CaptureResult;
}
