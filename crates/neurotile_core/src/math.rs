//! Scalar helpers shared by the network, terrain and creature code.

use rand::Rng;

/// Generalised logistic curve:
/// `y_scale / (1 + e^(-(x_scale * value - x_shift))) + y_shift`.
///
/// With `y_scale = 1` and `y_shift = 0` the result lies in `(0, 1)` for any
/// finite input.
#[inline]
#[must_use]
pub fn sigmoid(value: f64, x_scale: f64, y_scale: f64, x_shift: f64, y_shift: f64) -> f64 {
    y_scale / (1.0 + (-(x_scale * value - x_shift)).exp()) + y_shift
}

/// Unit logistic curve, `sigmoid(value, 1, 1, 0, 0)`.
#[inline]
#[must_use]
pub fn unit_sigmoid(value: f64) -> f64 {
    sigmoid(value, 1.0, 1.0, 0.0, 0.0)
}

/// `min(hi, max(lo, value))`.
#[inline]
#[must_use]
pub fn bound(lo: f64, hi: f64, value: f64) -> f64 {
    hi.min(lo.max(value))
}

/// Linear interpolation from `a` to `b`; `t` is not clamped.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wraps `value` into `[0, extent)`.
#[inline]
#[must_use]
pub fn wrap(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Uniform offset in `[-magnitude, +magnitude]`; zero when `magnitude <= 0`.
#[inline]
pub fn jitter<R: Rng>(rng: &mut R, magnitude: f64) -> f64 {
    if magnitude > 0.0 {
        rng.gen_range(-magnitude..=magnitude)
    } else {
        0.0
    }
}
