//! Mock camera implementation for testing without a real webcam.

use crate::traits::{Camera, CaptureRejection, CaptureResult, Resolution};

/// Calls recorded by [`MockCamera`], in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// `power_on` was called.
    PowerOn,
    /// `power_off` was called.
    PowerOff,
    /// `capture` was called.
    Capture,
}

/// Mock camera that records calls and returns a fixed size when on.
pub struct MockCamera {
    powered_on: bool,
    size_mb: f64,
    calls: Vec<Call>,
}

impl Default for MockCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCamera {
    /// Create a powered-off mock camera reporting 1.0 MB per capture.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            powered_on: false,
            size_mb: 1.0,
            calls: Vec::new(),
        }
    }

    /// Set the size reported by successful captures.
    #[must_use]
    pub fn with_size_mb(mut self, size_mb: f64) -> Self {
        self.size_mb = size_mb;
        self
    }

    /// Calls received so far.
    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }
}

impl Camera for MockCamera {
    fn power_on(&mut self) {
        self.calls.push(Call::PowerOn);
        self.powered_on = true;
    }

    fn power_off(&mut self) {
        self.calls.push(Call::PowerOff);
        self.powered_on = false;
    }

    fn is_powered_on(&self) -> bool {
        self.powered_on
    }

    fn capture(&mut self) -> CaptureResult {
        self.calls.push(Call::Capture);
        if !self.powered_on {
            return CaptureResult::Rejected(CaptureRejection::PoweredOff);
        }
        CaptureResult::Captured {
            resolution: Resolution::new(640, 480),
            size_mb: self.size_mb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_camera_creation() {
        let camera = MockCamera::new();
        assert!(!camera.is_powered_on());
        assert!(camera.calls().is_empty());
    }

    #[test]
    fn test_mock_camera_records_calls() {
        let mut camera = MockCamera::new().with_size_mb(2.5);
        assert!(!camera.capture().is_captured());
        camera.power_on();
        assert_eq!(camera.capture().size_mb(), Some(2.5));

        assert_eq!(
            camera.calls(),
            &[Call::Capture, Call::PowerOn, Call::Capture]
        );
    }
}
