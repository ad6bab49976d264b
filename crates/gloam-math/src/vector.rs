//! GLSL-alike vector construction.
//!
//! A vector is built from a list of [`Component`]s: scalars are taken as-is
//! and vectors are flattened in order, so `vec(1, vec(2, 3)) == vec(1, 2, 3)`.
//! The fixed-size constructors ([`vec_n`], [`vec2`], ...) check the flattened
//! count against the requested dimension and never pad or truncate.

use crate::{DMat, DVec, MathError, Result, Vec2, Vec3, Vec4, na};

/// One argument of a vector constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Component {
    /// Number of scalars this component flattens into.
    pub fn len(&self) -> usize {
        match self {
            Component::Scalar(_) => 1,
            Component::Vector(v) => v.len(),
        }
    }

    /// True for an empty vector component.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn extend_into(&self, out: &mut Vec<f64>) {
        match self {
            Component::Scalar(x) => out.push(*x),
            Component::Vector(v) => out.extend_from_slice(v),
        }
    }
}

impl From<f64> for Component {
    fn from(x: f64) -> Self {
        Component::Scalar(x)
    }
}

impl<const D: usize> From<na::SVector<f64, D>> for Component {
    fn from(v: na::SVector<f64, D>) -> Self {
        Component::Vector(v.as_slice().to_vec())
    }
}

impl<const D: usize> From<&na::SVector<f64, D>> for Component {
    fn from(v: &na::SVector<f64, D>) -> Self {
        Component::Vector(v.as_slice().to_vec())
    }
}

impl From<DVec> for Component {
    fn from(v: DVec) -> Self {
        Component::Vector(v.as_slice().to_vec())
    }
}

impl From<&[f64]> for Component {
    fn from(v: &[f64]) -> Self {
        Component::Vector(v.to_vec())
    }
}

/// Flatten components into their scalars, in argument order.
pub fn flatten(parts: &[Component]) -> Vec<f64> {
    let mut out = Vec::with_capacity(parts.iter().map(Component::len).sum());
    for part in parts {
        part.extend_into(&mut out);
    }
    out
}

/// Build a vector whose dimension is the count of flattened scalars.
pub fn vec(parts: &[Component]) -> DVec {
    DVec::from_vec(flatten(parts))
}

/// Build an `N`-D vector.
///
/// A single scalar argument fills every slot (see [`vec_fill`]). Otherwise
/// the flattened scalar count must equal `N`.
///
/// # Errors
/// [`MathError::DimensionMismatch`] when the count differs from `N`.
pub fn vec_n<const N: usize>(parts: &[Component]) -> Result<na::SVector<f64, N>> {
    if let [Component::Scalar(x)] = parts {
        return Ok(vec_fill(*x));
    }

    let ys = flatten(parts);
    if ys.len() != N {
        return Err(MathError::DimensionMismatch {
            expected: N,
            found: ys.len(),
        });
    }
    Ok(na::SVector::<f64, N>::from_column_slice(&ys))
}

/// `vec_n::<2>`.
pub fn vec2(parts: &[Component]) -> Result<Vec2> {
    vec_n::<2>(parts)
}

/// `vec_n::<3>`.
pub fn vec3(parts: &[Component]) -> Result<Vec3> {
    vec_n::<3>(parts)
}

/// `vec_n::<4>`.
pub fn vec4(parts: &[Component]) -> Result<Vec4> {
    vec_n::<4>(parts)
}

/// `N`-D vector with every component set to `x`.
#[inline]
pub fn vec_fill<const N: usize>(x: f64) -> na::SVector<f64, N> {
    na::SVector::<f64, N>::repeat(x)
}

/// Unit 2D vector at phase angle `a`: `(cos a, sin a)`.
#[inline]
pub fn vec_angle(a: f64) -> Vec2 {
    Vec2::new(a.cos(), a.sin())
}

/// Build a matrix from row-major rows, e.g. `mat(&[&[1, 2], &[3, 4]])`.
///
/// # Errors
/// [`MathError::RaggedMatrix`] when the rows differ in length.
pub fn mat(rows: &[&[f64]]) -> Result<DMat> {
    let ncols = rows.first().map_or(0, |r| r.len());
    for (row, r) in rows.iter().enumerate() {
        if r.len() != ncols {
            return Err(MathError::RaggedMatrix {
                row,
                expected: ncols,
                found: r.len(),
            });
        }
    }
    Ok(DMat::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
}

/// Compose a vector from scalars and vectors, GLSL style.
///
/// `glvec![1.0, v]` expands to `vec(&[Component::from(1.0), Component::from(v)])`.
/// With a leading dimension, `glvec![3; 1.0, v]` calls [`vec_n`] and returns a
/// `Result`.
#[macro_export]
macro_rules! glvec {
    ($n:literal; $($x:expr),+ $(,)?) => {
        $crate::vector::vec_n::<$n>(&[$($crate::vector::Component::from($x)),+])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::vector::vec(&[$($crate::vector::Component::from($x)),+])
    };
}
