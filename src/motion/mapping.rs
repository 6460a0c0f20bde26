//! Range mapping with optional curvature.
//!
//! Every pattern shapes its sensation response through [`map_range`]. The
//! curved form is kept for callers that want a nonlinear response.

use libm::powf;

/// Map `value` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// `value` is clamped into the input interval first, so the result always
/// lies between `out_min` and `out_max`. `out_min > out_max` inverts the
/// mapping. A degenerate input interval maps everything to `out_min`.
///
/// `curvature` lies in `[-10, 10]` (clamped); `0` is linear. The normalized
/// input is raised to `10^(-0.1 * curvature)` before interpolation.
pub fn map_range_curved(
    in_min: f32,
    in_max: f32,
    out_min: f32,
    out_max: f32,
    value: f32,
    curvature: f32,
) -> f32 {
    if !(in_max > in_min) {
        return out_min;
    }
    let value = if value.is_nan() { in_min } else { value.clamp(in_min, in_max) };
    let normalized = (value - in_min) / (in_max - in_min);

    let curvature = if curvature.is_nan() { 0.0 } else { curvature.clamp(-10.0, 10.0) };
    let t = if curvature == 0.0 {
        normalized
    } else {
        powf(normalized, powf(10.0, -0.1 * curvature))
    };

    // Blend form keeps both endpoints exact.
    out_min * (1.0 - t) + out_max * t
}

/// Linear range mapping (neutral curvature).
#[inline]
pub fn map_range(in_min: f32, in_max: f32, out_min: f32, out_max: f32, value: f32) -> f32 {
    map_range_curved(in_min, in_max, out_min, out_max, value, 0.0)
}
