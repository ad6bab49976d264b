//! GLSL-alike scalar arithmetic.
//!
//! Every function here is generic over [`GenType`] and applies per component
//! when given a vector. Nothing here returns an error: undefined inputs
//! (`smoothstep` with `a == b`, `inversesqrt` of a non-positive value) just
//! produce whatever the IEEE arithmetic yields.

use crate::GenType;

/// Constrain `x` to lie in `[min, max]`.
///
/// Computed as `min(max, max(min, x))`.
#[inline]
pub fn clamp<T: GenType>(x: T, min: T, max: T) -> T {
    x.apply3(min, max, |x, lo, hi| hi.min(lo.max(x)))
}

/// `clamp(x, 0, 1)`.
#[inline]
pub fn saturate<T: GenType>(x: T) -> T {
    clamp(x, T::splat(0.0), T::splat(1.0))
}

/// Linearly interpolate between `x` and `y`: `x * (1 - a) + y * a`.
#[inline]
pub fn mix<T: GenType>(x: T, y: T, a: T) -> T {
    x.apply3(y, a, |x, y, a| x * (1.0 - a) + y * a)
}

/// Sign of `x`: `-1`, `0` or `+1`.
///
/// Computed as `(x >= 0) - (x <= 0)`, so NaN maps to `0`.
#[inline]
pub fn sign<T: GenType>(x: T) -> T {
    sign_edge(x, T::splat(0.0))
}

/// Sign of `x` relative to a custom `edge`, equivalent to `sign(x - edge)`.
#[inline]
pub fn sign_edge<T: GenType>(x: T, edge: T) -> T {
    x.apply2(edge, |x, e| indicator(x >= e) - indicator(x <= e))
}

/// Step function: `0` where `x < edge`, `1` otherwise.
#[inline]
pub fn step<T: GenType>(edge: T, x: T) -> T {
    edge.apply2(x, |e, x| indicator(x >= e))
}

/// Arc-tangent of `y_over_x`, in `[-pi/2, pi/2]`.
#[inline]
pub fn atan<T: GenType>(y_over_x: T) -> T {
    y_over_x.apply(f64::atan)
}

/// Quadrant-aware arc-tangent of `y / x`, in `[-pi, pi]`.
#[inline]
pub fn atan2<T: GenType>(y: T, x: T) -> T {
    y.apply2(x, f64::atan2)
}

/// Fractional part: `x - floor(x)`.
#[inline]
pub fn fract<T: GenType>(x: T) -> T {
    x.apply(|x| x - x.floor())
}

/// Round half up: `floor(x + 0.5)`.
///
/// `round(0.5) == 1.0` and `round(-0.5) == 0.0`; this deliberately differs
/// from both `f64::round` and banker's rounding.
#[inline]
pub fn round<T: GenType>(x: T) -> T {
    x.apply(|x| (x + 0.5).floor())
}

/// Hermite interpolation between 0 and 1 as `x` moves across `[a, b]`.
///
/// ```text
/// t = clamp((x - a) / (b - a), 0, 1)
/// t * t * (3 - 2 * t)
/// ```
///
/// Undefined for `a == b`; `a > b` gives the mirrored curve.
#[inline]
pub fn smoothstep<T: GenType>(x: T, a: T, b: T) -> T {
    x.apply3(a, b, |x, a, b| {
        let t = 1.0_f64.min(0.0_f64.max((x - a) / (b - a)));
        t * t * (3.0 - 2.0 * t)
    })
}

/// `smoothstep(x, 0, 1)`.
#[inline]
pub fn smoothstep01<T: GenType>(x: T) -> T {
    smoothstep(x, T::splat(0.0), T::splat(1.0))
}

/// `1 / sqrt(x)`. Undefined (inf or NaN) for `x <= 0`.
#[inline]
pub fn inversesqrt<T: GenType>(x: T) -> T {
    x.apply(|x| 1.0 / x.sqrt())
}

/// True where `x` is NaN, computed as `!(x >= 0 || x <= 0)`.
#[inline]
pub fn isnan<T: GenType>(x: T) -> T::Mask {
    x.test(|x| !(x >= 0.0 || x <= 0.0))
}

/// True where `x` is an infinity, computed as `2 * x == x && x != 0`.
#[inline]
pub fn isinf<T: GenType>(x: T) -> T::Mask {
    x.test(|x| 2.0 * x == x && x != 0.0)
}

#[inline]
fn indicator(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}
