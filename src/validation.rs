//! Input validation and the file size estimate.
//!
//! Resolution strings and frame rates are checked here before they reach a
//! [`Webcam`](crate::device::Webcam), so a constructed camera always holds
//! positive dimensions and a positive frame rate.

use crate::traits::{CameraError, Resolution, Result};

/// Bytes-per-megabyte divisor used by the size estimate (decimal megabytes).
const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

/// Parses a resolution of the form `<width>x<height>`.
///
/// Surrounding whitespace is ignored and the separator may be `x` or `X`.
///
/// # Arguments
///
/// * `input` - The resolution string, e.g. `"1920x1080"`
///
/// # Errors
///
/// Returns `InvalidResolution` if:
/// - There is not exactly one separator
/// - Either side is not made of ASCII digits only (no sign)
/// - Either side is zero
pub fn parse_resolution(input: &str) -> Result<Resolution> {
    let invalid = |reason: &str| CameraError::InvalidResolution {
        input: input.to_owned(),
        reason: reason.to_owned(),
    };

    let mut parts = input.trim().split(['x', 'X']);
    let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid("expected exactly one 'x' between width and height"));
    };

    let width = parse_dimension(width).ok_or_else(|| invalid("width is not a positive integer"))?;
    let height =
        parse_dimension(height).ok_or_else(|| invalid("height is not a positive integer"))?;

    Ok(Resolution::new(width, height))
}

/// Parses one side of a resolution. Only ASCII digits are accepted, so signs
/// such as `+1920` are rejected; zero is rejected too.
fn parse_dimension(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u32>().ok().filter(|value| *value > 0)
}

/// Checks that a frame rate is positive.
///
/// # Errors
///
/// Returns `InvalidFrameRate` for zero.
pub fn validate_frame_rate(fps: u32) -> Result<u32> {
    if fps == 0 {
        return Err(CameraError::InvalidFrameRate(fps));
    }
    Ok(fps)
}

/// Estimates the file size of a photo in megabytes.
///
/// The product `width * height * fps` is computed exactly in `u128` and then
/// divided by 1,000,000 in floating point.
#[must_use]
pub fn estimate_file_size_mb(resolution: Resolution, fps: u32) -> f64 {
    // Three u32 factors always fit in u128.
    let bytes = u128::from(resolution.pixel_count()) * u128::from(fps);

    #[allow(clippy::cast_precision_loss)]
    let bytes = bytes as f64;

    bytes / BYTES_PER_MEGABYTE
}
