//! Webcam-Sim: a model of a webcam with an on/off switch.
//!
//! A [`Webcam`] stores its resolution and frame rate, starts powered off and
//! reports an estimated photo size on capture. Capturing while off yields
//! [`CaptureResult::Rejected`] instead of an error.

pub mod config;
pub mod demo;
pub mod device;
pub mod traits;
pub mod validation;

#[cfg(test)]
pub mod mock;

pub use config::WebcamConfig;
pub use device::Webcam;
pub use traits::{
    Camera, CameraError, CaptureRejection, CaptureResult, PowerState, Resolution,
};
