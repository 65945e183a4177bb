use crate::{
    foundation::core::{Orientation, TiltReading, Viewport},
    motion::sample::{GravityVector, MotionSample},
};

/// Pick the axis that follows the user's tilt for the current viewport.
///
/// Portrait reads `x`, landscape reads `y`; a missing axis reads as zero.
pub fn axis_value(gravity: &GravityVector, viewport: Viewport) -> f64 {
    let raw = match viewport.orientation() {
        Orientation::Portrait => gravity.x,
        Orientation::Landscape => gravity.y,
    };
    raw.unwrap_or(0.0)
}

/// Why a sample produced no tilt reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltReject {
    /// The sample carries no gravity data.
    NoGravity,
    /// The tracked axis is infinite.
    NonFinite,
}

/// Resolve one sample to a tilt reading.
///
/// The axis value is truncated toward zero. NaN reads as zero; an infinite axis is rejected
/// so it never reaches the mapper.
pub fn resolve_tilt(sample: &MotionSample, viewport: Viewport) -> Result<TiltReading, TiltReject> {
    let gravity = sample.gravity.as_ref().ok_or(TiltReject::NoGravity)?;
    let v = axis_value(gravity, viewport);
    if v.is_nan() {
        return Ok(TiltReading(0));
    }
    if v.is_infinite() {
        return Err(TiltReject::NonFinite);
    }
    // `as` saturates at the i64 bounds.
    Ok(TiltReading(v.trunc() as i64))
}

#[cfg(test)]
#[path = "../../tests/unit/motion/axis.rs"]
mod tests;
