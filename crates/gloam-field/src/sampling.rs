//! Boundary-aware integer sampling and bilinear interpolation.

use gloam_math::{IVec2, Vec2, fract};

use crate::{Field, FieldValue};

/// One cell to the right (`+x`).
pub const RIGHT: [i32; 2] = [1, 0];
/// One cell to the left (`-x`).
pub const LEFT: [i32; 2] = [-1, 0];
/// One cell up (`+y`).
pub const UP: [i32; 2] = [0, 1];
/// One cell down (`-y`).
pub const DOWN: [i32; 2] = [0, -1];

/// What an integer lookup returns outside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePolicy {
    /// Clamp the index into `[0, shape - 1]` on each axis.
    #[default]
    Clamp,
    /// Zero outside the field.
    Black,
    /// One outside the field.
    White,
}

/// `index + d`, saturating at the `i32` range.
#[inline]
pub fn offset(index: IVec2, d: [i32; 2]) -> IVec2 {
    IVec2::new(index.x.saturating_add(d[0]), index.y.saturating_add(d[1]))
}

/// Sample `field` at a signed integer index under `policy`.
pub fn sample_with<T: FieldValue>(field: &Field<T>, index: IVec2, policy: SamplePolicy) -> T {
    let (i, j) = (index.x as i64, index.y as i64);
    if field.contains(i, j) {
        return field[[i as usize, j as usize]];
    }
    match policy {
        SamplePolicy::Clamp => {
            let ci = i.clamp(0, field.width() as i64 - 1) as usize;
            let cj = j.clamp(0, field.height() as i64 - 1) as usize;
            field[[ci, cj]]
        }
        SamplePolicy::Black => T::zero(),
        SamplePolicy::White => T::one(),
    }
}

/// Clamped sample: out-of-range indices read the nearest boundary cell.
#[inline]
pub fn sample<T: FieldValue>(field: &Field<T>, index: IVec2) -> T {
    sample_with(field, index, SamplePolicy::Clamp)
}

/// Alias of [`sample`].
#[inline]
pub fn clamp_sample<T: FieldValue>(field: &Field<T>, index: IVec2) -> T {
    sample(field, index)
}

/// Zero outside the field.
#[inline]
pub fn black_sample<T: FieldValue>(field: &Field<T>, index: IVec2) -> T {
    sample_with(field, index, SamplePolicy::Black)
}

/// One outside the field.
#[inline]
pub fn white_sample<T: FieldValue>(field: &Field<T>, index: IVec2) -> T {
    sample_with(field, index, SamplePolicy::White)
}

/// Nearest-cell sample at a real position: `round(clamp(P, 0, shape - 1))`.
pub fn nearest_sample<T: FieldValue>(field: &Field<T>, p: &Vec2) -> T {
    let hi_x = (field.width() - 1) as f64;
    let hi_y = (field.height() - 1) as f64;
    let i = (p.x.clamp(0.0, hi_x) + 0.5).floor() as usize;
    let j = (p.y.clamp(0.0, hi_y) + 0.5).floor() as usize;
    field[[i, j]]
}

/// Bilinear sample at a real position.
///
/// The base cell is `P` truncated toward zero and the weights are
/// `x = fract(P)`, `y = 1 - x`. Corners are read through [`sample`], so
/// positions outside the field blend clamped boundary values. At integer
/// `P` the stored value is returned exactly.
///
/// `P` is first clamped into `[-1, shape]`, which leaves every result
/// unchanged and keeps huge or infinite coordinates in `i32` range. A NaN
/// coordinate gives a NaN result.
pub fn bilerp<T: FieldValue>(field: &Field<T>, p: &Vec2) -> T {
    let p = Vec2::new(
        p.x.clamp(-1.0, field.width() as f64),
        p.y.clamp(-1.0, field.height() as f64),
    );
    let base = IVec2::new(p.x as i32, p.y as i32);
    let x = Vec2::new(fract(p.x), fract(p.y));
    let y = Vec2::new(1.0 - x.x, 1.0 - x.y);

    let s11 = sample(field, offset(base, [1, 1]));
    let s10 = sample(field, offset(base, RIGHT));
    let s00 = sample(field, base);
    let s01 = sample(field, offset(base, UP));

    s11 * (x.x * x.y) + s10 * (x.x * y.y) + s00 * (y.x * y.y) + s01 * (y.x * x.y)
}

/// Alias of [`bilerp`].
#[inline]
pub fn linear_sample<T: FieldValue>(field: &Field<T>, p: &Vec2) -> T {
    bilerp(field, p)
}

/// Average of `f` over a 2x2 sub-cell pattern with half-step `dx / 2`:
/// offsets `(0, 0)`, `(0, -1)`, `(-1, -1)` and `(-1, 0)`.
pub fn super_sample_2x2<T: FieldValue>(f: impl Fn(&Vec2) -> T, p: &Vec2, dx: f64) -> T {
    let h = dx * 0.5;
    let total = f(p)
        + f(&(p + Vec2::new(0.0, -h)))
        + f(&(p + Vec2::new(-h, -h)))
        + f(&(p + Vec2::new(-h, 0.0)));
    total * 0.25
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gloam_math::Vec3;

    fn ramp() -> Field<f64> {
        Field::from_fn([4, 3], |[i, j]| i as f64 + 10.0 * j as f64).unwrap()
    }

    #[test]
    fn test_clamp_matches_boundary() {
        let f = ramp();
        assert_eq!(sample(&f, IVec2::new(-5, 0)), f[[0, 0]]);
        assert_eq!(sample(&f, IVec2::new(9, 1)), f[[3, 1]]);
        assert_eq!(sample(&f, IVec2::new(2, 7)), f[[2, 2]]);
        assert_eq!(sample(&f, IVec2::new(-1, -1)), f[[0, 0]]);
        assert_eq!(clamp_sample(&f, IVec2::new(1, 1)), 11.0);
    }

    #[test]
    fn test_black_and_white_policies() {
        let f = Field::filled([2, 2], 0.5).unwrap();
        assert_eq!(black_sample(&f, IVec2::new(2, 0)), 0.0);
        assert_eq!(white_sample(&f, IVec2::new(0, -1)), 1.0);
        assert_eq!(white_sample(&f, IVec2::new(1, 1)), 0.5);

        let v = Field::filled([2, 2], Vec3::repeat(0.5)).unwrap();
        assert_eq!(white_sample(&v, IVec2::new(5, 5)), Vec3::repeat(1.0));
    }

    #[test]
    fn test_nearest_sample_rounds_half_up() {
        let f = ramp();
        assert_eq!(nearest_sample(&f, &Vec2::new(1.5, 0.2)), 2.0);
        assert_eq!(nearest_sample(&f, &Vec2::new(1.49, 0.5)), 11.0);
        assert_eq!(nearest_sample(&f, &Vec2::new(-3.0, 99.0)), 20.0);
    }

    #[test]
    fn test_bilerp_midpoints() {
        let f = ramp();
        assert_relative_eq!(bilerp(&f, &Vec2::new(0.5, 0.0)), 0.5, epsilon = 1e-12);
        assert_relative_eq!(bilerp(&f, &Vec2::new(1.5, 1.5)), 16.5, epsilon = 1e-12);
        assert_relative_eq!(linear_sample(&f, &Vec2::new(2.25, 0.75)), 9.75, epsilon = 1e-12);
    }

    #[test]
    fn test_bilerp_clamps_past_the_edge() {
        let f = ramp();
        // the +x neighbour of the last column is the last column itself
        assert_relative_eq!(bilerp(&f, &Vec2::new(3.5, 0.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bilerp_far_outside_reads_the_boundary() {
        let f = ramp();
        assert_eq!(bilerp(&f, &Vec2::new(3.0e9, 0.0)), f[[3, 0]]);
        assert_eq!(bilerp(&f, &Vec2::new(-3.0e9, 1.0)), f[[0, 1]]);
        assert_eq!(bilerp(&f, &Vec2::new(f64::INFINITY, f64::NEG_INFINITY)), f[[3, 0]]);
        assert_eq!(bilerp(&f, &Vec2::new(-7.25, 99.5)), f[[0, 2]]);
        assert!(bilerp(&f, &Vec2::new(f64::NAN, 1.0)).is_nan());
    }

    #[test]
    fn test_offset_saturates() {
        let edge = IVec2::new(i32::MAX, i32::MIN);
        assert_eq!(offset(edge, [1, -1]), edge);
        assert_eq!(offset(IVec2::new(2, 3), DOWN), IVec2::new(2, 2));
        let f = ramp();
        assert_eq!(sample(&f, offset(edge, [1, 1])), f[[3, 0]]);
    }

    #[test]
    fn test_super_sample_constant() {
        let v = super_sample_2x2(|_| 2.0, &Vec2::new(0.3, 0.3), 0.1);
        assert_relative_eq!(v, 2.0, epsilon = 1e-12);

        let avg = super_sample_2x2(|p| p.x + p.y, &Vec2::new(1.0, 1.0), 1.0);
        // mean of 2.0, 1.5, 1.0, 1.5
        assert_relative_eq!(avg, 1.5, epsilon = 1e-12);
    }
}
