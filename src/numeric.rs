//! Numeric helpers for heading arithmetic.
//!
//! Headings are plain `f32` radians. These helpers keep them inside
//! `[0, 2π)` and mirror integer-style sign semantics where the steering
//! maths depends on them.

use std::f32::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `2π`; that
/// case folds back to `0.0` so the upper bound stays exclusive.
///
/// # Examples
/// ```
/// use decoy_steering::numeric::normalize_angle;
/// use std::f32::consts::{PI, TAU};
/// assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-6);
/// assert_eq!(normalize_angle(TAU), 0.0);
/// ```
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Sign of `value` as `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f32::signum`], zero maps to zero so an agent already facing its
/// target does not turn.
#[must_use]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Convert an integer count of hundredths into a fractional value.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "Jitter draws are bounded by a small configured range."
)]
pub fn hundredths(value: i32) -> f32 {
    value as f32 / 100.0
}
