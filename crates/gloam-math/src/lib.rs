//! GLSL-style math primitives for gloam.
//!
//! Scalar functions (`clamp`, `mix`, `smoothstep`, ...) are generic over
//! [`GenType`], so the same call works on `f64` and on fixed-size vectors,
//! component-wise. Domain edge cases follow shader conventions: they produce
//! a sentinel (zero, inf, NaN or `false`) instead of an error.

pub mod error;
pub mod linalg;
pub mod scalar;
pub mod swizzle;
pub mod vector;

pub use error::{MathError, Result};
pub use linalg::{
    cross, cross2, distance, dot, inv_length, length, maximum, minimum, normalize, normalize_pow,
    outer_product, reflect, refract, sqr_length, summation,
};
pub use scalar::{
    atan, atan2, clamp, fract, inversesqrt, isinf, isnan, mix, round, saturate, sign, sign_edge,
    smoothstep, smoothstep01, step,
};
pub use swizzle::{shuffle, swizzle, swizzle_n};
pub use vector::{Component, mat, vec, vec_angle, vec_fill, vec_n, vec2, vec3, vec4};

pub use nalgebra as na;

/// 2D vector alias.
pub type Vec2 = na::Vector2<f64>;
/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// 4D vector alias.
pub type Vec4 = na::Vector4<f64>;
/// Integer 2D index.
pub type IVec2 = na::Vector2<i32>;
/// Dynamic vector.
pub type DVec = na::DVector<f64>;
/// Dynamic matrix.
pub type DMat = na::DMatrix<f64>;

/// GLSL "genType": a value that scalar functions operate on component-wise.
///
/// Implemented for `f64` and for `SVector<f64, D>`.
pub trait GenType: Copy {
    /// Boolean result of the same shape (`bool` or `SVector<bool, D>`).
    type Mask;

    /// Broadcast a scalar into every component.
    fn splat(x: f64) -> Self;

    /// Apply `f` to every component.
    fn apply(self, f: impl Fn(f64) -> f64) -> Self;

    /// Combine two values component-wise.
    fn apply2(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self;

    /// Combine three values component-wise.
    fn apply3(self, b: Self, c: Self, f: impl Fn(f64, f64, f64) -> f64) -> Self;

    /// Evaluate a predicate on every component.
    fn test(self, f: impl Fn(f64) -> bool) -> Self::Mask;
}

impl GenType for f64 {
    type Mask = bool;

    #[inline]
    fn splat(x: f64) -> Self {
        x
    }

    #[inline]
    fn apply(self, f: impl Fn(f64) -> f64) -> Self {
        f(self)
    }

    #[inline]
    fn apply2(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        f(self, other)
    }

    #[inline]
    fn apply3(self, b: Self, c: Self, f: impl Fn(f64, f64, f64) -> f64) -> Self {
        f(self, b, c)
    }

    #[inline]
    fn test(self, f: impl Fn(f64) -> bool) -> bool {
        f(self)
    }
}

impl<const D: usize> GenType for na::SVector<f64, D> {
    type Mask = na::SVector<bool, D>;

    #[inline]
    fn splat(x: f64) -> Self {
        Self::repeat(x)
    }

    #[inline]
    fn apply(self, f: impl Fn(f64) -> f64) -> Self {
        self.map(f)
    }

    #[inline]
    fn apply2(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        self.zip_map(&other, f)
    }

    #[inline]
    fn apply3(self, b: Self, c: Self, f: impl Fn(f64, f64, f64) -> f64) -> Self {
        self.zip_zip_map(&b, &c, f)
    }

    #[inline]
    fn test(self, f: impl Fn(f64) -> bool) -> Self::Mask {
        self.map(f)
    }
}

/// `D = (1, 0, -1)`: the neighbourhood offset triple used to spell stencil
/// offsets, e.g. `(D.x, D.y)` is one cell to the right.
#[inline]
pub fn d() -> Vec3 {
    Vec3::new(1.0, 0.0, -1.0)
}

/// Archimedes' constant, re-exported for shader-style code.
pub const PI: f64 = std::f64::consts::PI;
/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;
