//! Complex numbers as a two-entry composite.

use std::fmt;

use gloam_math::Vec2;

use crate::{Composite, Field};

/// `re + im·j`, stored as `[re, im]`.
///
/// `*` is element-wise like every composite; the complex product is
/// [`Complex::mat_mul`].
pub type Complex = Composite<f64, 2>;

/// A pair of real fields (`re`, `im`) whose subscript is a [`Complex`].
pub type ComplexField = Composite<Field<f64>, 2>;

/// Shorthand for `Complex::new([re, im])`.
#[inline]
pub const fn cplx(re: f64, im: f64) -> Complex {
    Composite::new([re, im])
}

impl Composite<f64, 2> {
    /// Real number `x + 0j`.
    #[inline]
    pub const fn from_scalar(x: f64) -> Self {
        cplx(x, 0.0)
    }

    /// `v.x + v.y·j`.
    #[inline]
    pub fn from_vec(v: &Vec2) -> Self {
        cplx(v.x, v.y)
    }

    #[inline]
    pub fn re(&self) -> f64 {
        self[0]
    }

    #[inline]
    pub fn im(&self) -> f64 {
        self[1]
    }

    /// Squared magnitude.
    #[inline]
    pub fn mag2(&self) -> f64 {
        self.re() * self.re() + self.im() * self.im()
    }

    #[inline]
    pub fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }

    /// Argument in `(-pi, pi]`.
    #[inline]
    pub fn ang(&self) -> f64 {
        self.im().atan2(self.re())
    }

    #[inline]
    pub fn conj(&self) -> Self {
        cplx(self.re(), -self.im())
    }

    /// Complex product: `(a + bj)(c + dj) = (ac - bd) + (ad + bc)j`.
    pub fn mat_mul(&self, other: &Self) -> Self {
        let (a, b) = (self.re(), self.im());
        let (c, d) = (other.re(), other.im());
        cplx(a * c - b * d, a * d + b * c)
    }

    /// Component-wise product, the same as `*`.
    #[inline]
    pub fn elementwise_mul(&self, other: &Self) -> Self {
        *self * *other
    }

    pub fn to_vec(&self) -> Vec2 {
        Vec2::new(self.re(), self.im())
    }
}

impl From<f64> for Complex {
    fn from(x: f64) -> Self {
        Complex::from_scalar(x)
    }
}

impl From<Vec2> for Complex {
    fn from(v: Vec2) -> Self {
        Complex::from_vec(&v)
    }
}

impl fmt::Display for Composite<f64, 2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {}j)", self.re(), self.im())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Subscript;
    use approx::assert_relative_eq;

    #[test]
    fn test_parts_and_magnitude() {
        let z = cplx(3.0, 4.0);
        assert_eq!(z.re(), 3.0);
        assert_eq!(z.im(), 4.0);
        assert_eq!(z.mag2(), 25.0);
        assert_eq!(z.mag(), 5.0);
        assert_relative_eq!(cplx(0.0, 1.0).ang(), std::f64::consts::FRAC_PI_2);
        assert_eq!(z.conj(), cplx(3.0, -4.0));
    }

    #[test]
    fn test_products() {
        let a = cplx(1.0, 2.0);
        let b = cplx(3.0, -1.0);
        assert_eq!(a.mat_mul(&b), cplx(5.0, 5.0));
        assert_eq!(a.elementwise_mul(&b), cplx(3.0, -2.0));
        assert_eq!(a * b, a.elementwise_mul(&b));
        // i * i = -1
        assert_eq!(cplx(0.0, 1.0).mat_mul(&cplx(0.0, 1.0)), cplx(-1.0, 0.0));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Complex::from(2.5), cplx(2.5, 0.0));
        assert_eq!(Complex::from(Vec2::new(1.0, -1.0)), cplx(1.0, -1.0));
        assert_eq!(cplx(1.0, 2.0).to_string(), "(1 + 2j)");
    }

    #[test]
    fn test_complex_field_subscript() {
        let mut z = ComplexField::zeros([4, 4]).unwrap();
        z.set([1, 2], cplx(0.5, -0.5));
        let v: Complex = z.subscript([1, 2]);
        assert_eq!(v.mag2(), 0.5);
        assert_eq!(z.at([0, 0]), Complex::from_scalar(0.0));
    }
}
