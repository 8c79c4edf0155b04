//! Demonstration script exercising both capture branches once.

use log::info;

use crate::traits::{Camera, CaptureResult};

/// What happened during [`run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoReport {
    /// Capture attempted before powering on.
    pub first_capture: CaptureResult,
    /// Capture attempted after powering on.
    pub second_capture: CaptureResult,
    /// Power state after the final `power_off`.
    pub final_state_on: bool,
}

/// Capture while off, power on, capture, power off.
pub fn run<C: Camera>(camera: &mut C) -> DemoReport {
    info!("Starting webcam demo");

    let first_capture = camera.capture();
    camera.power_on();
    let second_capture = camera.capture();
    camera.power_off();

    DemoReport {
        first_capture,
        second_capture,
        final_state_on: camera.is_powered_on(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Webcam;
    use crate::mock::{Call, MockCamera};
    use crate::traits::CaptureRejection;

    #[test]
    fn test_demo_call_order() {
        let mut camera = MockCamera::new();
        let report = run(&mut camera);

        assert_eq!(
            camera.calls(),
            &[Call::Capture, Call::PowerOn, Call::Capture, Call::PowerOff]
        );
        assert!(!report.first_capture.is_captured());
        assert!(report.second_capture.is_captured());
        assert!(!report.final_state_on);
    }

    #[test]
    fn test_demo_with_full_hd_webcam() {
        let mut camera = Webcam::new("1920x1080", 30).expect("valid webcam");
        let report = run(&mut camera);

        assert_eq!(
            report.first_capture,
            CaptureResult::Rejected(CaptureRejection::PoweredOff)
        );
        let size = report.second_capture.size_mb().expect("second capture succeeds");
        assert!((size - 62.208).abs() < f64::EPSILON, "got {size}");
        assert!(!report.final_state_on);
        assert_eq!(camera.last_estimated_size_mb(), Some(size));
    }
}
