//! Webcam model holding resolution, frame rate and power state.

use log::{debug, info, warn};

use crate::traits::{Camera, CaptureRejection, CaptureResult, PowerState, Resolution, Result};
use crate::validation::{estimate_file_size_mb, parse_resolution, validate_frame_rate};

/// A webcam with an on/off switch that estimates photo sizes on capture.
#[derive(Debug, Clone, PartialEq)]
pub struct Webcam {
    resolution: Resolution,
    fps: u32,
    state: PowerState,
    last_estimated_size_mb: Option<f64>,
}

impl Webcam {
    /// Create a powered-off webcam from a `"<width>x<height>"` resolution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` or `InvalidFrameRate` for malformed input.
    pub fn new(resolution: &str, fps: u32) -> Result<Self> {
        let resolution = parse_resolution(resolution)?;
        Self::with_resolution(resolution, fps)
    }

    /// Create a powered-off webcam from an already parsed resolution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFrameRate` if `fps` is zero.
    pub fn with_resolution(resolution: Resolution, fps: u32) -> Result<Self> {
        let fps = validate_frame_rate(fps)?;
        debug!("Created webcam {resolution} @ {fps} fps");

        Ok(Self {
            resolution,
            fps,
            state: PowerState::Off,
            last_estimated_size_mb: None,
        })
    }

    /// Current resolution.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Replace the resolution. The old value is kept on error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` if `resolution` is malformed.
    pub fn set_resolution(&mut self, resolution: &str) -> Result<()> {
        self.resolution = parse_resolution(resolution)?;
        Ok(())
    }

    /// Current frame rate.
    #[must_use]
    pub const fn fps(&self) -> u32 {
        self.fps
    }

    /// Replace the frame rate. The old value is kept on error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFrameRate` if `fps` is zero.
    pub fn set_fps(&mut self, fps: u32) -> Result<()> {
        self.fps = validate_frame_rate(fps)?;
        Ok(())
    }

    /// Current power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Size estimate from the last successful capture, if any.
    #[must_use]
    pub const fn last_estimated_size_mb(&self) -> Option<f64> {
        self.last_estimated_size_mb
    }
}

impl Camera for Webcam {
    fn power_on(&mut self) {
        self.state = PowerState::On;
        info!("Camera powered on");
    }

    fn power_off(&mut self) {
        self.state = PowerState::Off;
        info!("Camera powered off");
    }

    fn is_powered_on(&self) -> bool {
        self.state == PowerState::On
    }

    fn capture(&mut self) -> CaptureResult {
        if self.state == PowerState::Off {
            warn!("Capture rejected: camera is off");
            return CaptureResult::Rejected(CaptureRejection::PoweredOff);
        }

        let size_mb = estimate_file_size_mb(self.resolution, self.fps);
        self.last_estimated_size_mb = Some(size_mb);
        info!(
            "Photo taken at {}, estimated file size: {size_mb} MB",
            self.resolution
        );

        CaptureResult::Captured {
            resolution: self.resolution,
            size_mb,
        }
    }
}
