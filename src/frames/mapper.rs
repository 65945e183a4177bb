//! Tilt-to-frame mapping.
//!
//! Frames are laid out center-out: a level device shows the center frame, and each even
//! step of tilt moves one frame toward the matching edge. Tilts past the half-width
//! saturate at the first/last frame.

use crate::foundation::core::{FrameIndex, TiltReading};

/// Why a tilt reading did not produce a candidate frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MapReject {
    /// Cache is empty; there is no center frame.
    EmptyCache,
    /// Odd tilt magnitudes are filtered as jitter.
    OddTilt,
    /// Target equals the frame already on screen.
    Unchanged,
}

/// Center slot for a cache of `len` frames: `ceil(len / 2 - 1)`.
///
/// Callers must not pass `len == 0`.
pub fn center_index(len: usize) -> usize {
    len.div_ceil(2).saturating_sub(1)
}

/// Map a tilt reading onto a cache slot (quantization, centering and saturation).
pub fn map_tilt(tilt: TiltReading, len: usize) -> Result<FrameIndex, MapReject> {
    if len == 0 {
        return Err(MapReject::EmptyCache);
    }
    if !tilt.is_even() {
        return Err(MapReject::OddTilt);
    }

    let center = center_index(len) as i128;
    let t = i128::from(tilt.0);
    let last = len - 1;

    let idx = match t {
        0 => return Ok(FrameIndex(center as usize)),
        t if t < 0 => {
            let prev = center + t + 1;
            if (0..=last as i128).contains(&prev) {
                prev as usize
            } else {
                0
            }
        }
        t => {
            let next = center + t - 1;
            if (0..=last as i128).contains(&next) {
                next as usize
            } else {
                last
            }
        }
    };
    Ok(FrameIndex(idx))
}

/// Full selection step: [`map_tilt`] plus suppression of redundant redraws.
pub fn select_frame(
    tilt: TiltReading,
    len: usize,
    displayed: Option<FrameIndex>,
) -> Result<FrameIndex, MapReject> {
    let target = map_tilt(tilt, len)?;
    if displayed == Some(target) {
        return Err(MapReject::Unchanged);
    }
    Ok(target)
}

#[cfg(test)]
#[path = "../../tests/unit/frames/mapper.rs"]
mod tests;
