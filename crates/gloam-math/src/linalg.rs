//! GLSL-alike linear algebra helpers.

use crate::{Vec2, Vec3, na};

type SVec<const D: usize> = na::SVector<f64, D>;

/// Dot product: `a[0] * b[0] + a[1] * b[1] + ...`.
#[inline]
pub fn dot<const D: usize>(a: &SVec<D>, b: &SVec<D>) -> f64 {
    a.dot(b)
}

/// Right-handed 3D cross product: `cross(x, y) == z`.
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// 2D cross product (z-component of the 3D one): `cross2(x, y) == 1`.
#[inline]
pub fn cross2(a: &Vec2, b: &Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Outer product `a * b^T`.
#[inline]
pub fn outer_product<const R: usize, const C: usize>(
    a: &SVec<R>,
    b: &SVec<C>,
) -> na::SMatrix<f64, R, C> {
    a * b.transpose()
}

/// Unit vector in the direction of `v`. Undefined (NaN) for the zero vector.
#[inline]
pub fn normalize<const D: usize>(v: &SVec<D>) -> SVec<D> {
    v * inv_length(v)
}

/// Same direction as `v` with length raised to the `n`-th power:
/// `v * (|v|^2 + eps)^((n - 1) / 2)`.
///
/// With `n = -1` this is the inverse-distance falloff of a point vortex or
/// a gravity well; `eps` softens the singularity at the origin.
#[inline]
pub fn normalize_pow<const D: usize>(v: &SVec<D>, n: f64, eps: f64) -> SVec<D> {
    let l2 = v.norm_squared() + eps;
    v * l2.powf((n - 1.0) / 2.0)
}

/// Sum of all components.
#[inline]
pub fn summation<const D: usize>(v: &SVec<D>) -> f64 {
    v.sum()
}

/// Largest component.
#[inline]
pub fn maximum<const D: usize>(v: &SVec<D>) -> f64 {
    v.max()
}

/// Smallest component.
#[inline]
pub fn minimum<const D: usize>(v: &SVec<D>) -> f64 {
    v.min()
}

/// `dot(v, v)`.
#[inline]
pub fn sqr_length<const D: usize>(v: &SVec<D>) -> f64 {
    v.norm_squared()
}

/// Euclidean length.
#[inline]
pub fn length<const D: usize>(v: &SVec<D>) -> f64 {
    v.norm()
}

/// `1 / length(v)`; infinite for the zero vector.
#[inline]
pub fn inv_length<const D: usize>(v: &SVec<D>) -> f64 {
    1.0 / v.norm()
}

/// `length(a - b)`.
#[inline]
pub fn distance<const D: usize>(a: &SVec<D>, b: &SVec<D>) -> f64 {
    (a - b).norm()
}

/// Reflect incident `i` about normal `n`: `i - 2 * dot(n, i) * n`.
///
/// `n` should be normalized.
#[inline]
pub fn reflect<const D: usize>(i: &SVec<D>, n: &SVec<D>) -> SVec<D> {
    i - n * (2.0 * n.dot(i))
}

/// Refract incident `i` through a surface with normal `n` and index ratio `eta`.
///
/// ```text
/// k = 1 - eta^2 * (1 - dot(n, i)^2)
/// k < 0  -> zero vector (total internal reflection)
/// k >= 0 -> eta * i - (eta * dot(n, i) + sqrt(k)) * n
/// ```
///
/// `i` and `n` should be normalized.
pub fn refract<const D: usize>(i: &SVec<D>, n: &SVec<D>, eta: f64) -> SVec<D> {
    let n_dot_i = n.dot(i);
    let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);
    if k >= 0.0 {
        i * eta - n * (eta * n_dot_i + k.sqrt())
    } else {
        SVec::<D>::zeros()
    }
}
