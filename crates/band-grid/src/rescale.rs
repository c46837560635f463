//! Linear rescaling of band values into a display range.
//!
//! The input range may be given high-to-low (e.g. 243 K to 208 K). The
//! first input bound always maps to the first output bound, so a reversed
//! input range inverts the ramp instead of being normalized.

use crate::error::{BandGridError, Result};
use crate::types::BandArray;

/// Affine map of a single value from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// No clamping is applied; values outside the input range extrapolate.
#[inline]
pub fn rescale_value(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Clamp `value` between two bounds given in either order. NaN stays NaN.
#[inline]
pub fn clamp_between(value: f32, a: f32, b: f32) -> f32 {
    value.clamp(a.min(b), a.max(b))
}

fn check_range(in_min: f32, in_max: f32) -> Result<()> {
    if in_min == in_max || !in_min.is_finite() || !in_max.is_finite() {
        return Err(BandGridError::InvalidRange {
            min: in_min,
            max: in_max,
        });
    }
    Ok(())
}

/// Rescale a band, clamping results to the output range.
pub fn rescale(
    band: &BandArray,
    in_min: f32,
    in_max: f32,
    out_min: f32,
    out_max: f32,
) -> Result<BandArray> {
    check_range(in_min, in_max)?;
    Ok(band.map(|v| {
        clamp_between(
            rescale_value(v, in_min, in_max, out_min, out_max),
            out_min,
            out_max,
        )
    }))
}

/// Rescale a band without clamping.
pub fn rescale_linear(
    band: &BandArray,
    in_min: f32,
    in_max: f32,
    out_min: f32,
    out_max: f32,
) -> Result<BandArray> {
    check_range(in_min, in_max)?;
    Ok(band.map(|v| rescale_value(v, in_min, in_max, out_min, out_max)))
}
