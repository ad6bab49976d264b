//! Unnormalised SPH smoothing kernels of support radius `h`.
//!
//! Callers supply the normalisation constant for their dimension.

/// `(h - r)^3`
#[inline]
pub fn spiky(r: f64, h: f64) -> f64 {
    (h - r).powi(3)
}

/// `(h^2 - r^2)^3`
#[inline]
pub fn poly6(r: f64, h: f64) -> f64 {
    (h * h - r * r).powi(3)
}

/// `d/dr spiky = -3 (h - r)^2`
#[inline]
pub fn dspiky(r: f64, h: f64) -> f64 {
    -3.0 * (h - r).powi(2)
}

/// `d/dr poly6 = -6 r (h^2 - r^2)^2`
#[inline]
pub fn dpoly6(r: f64, h: f64) -> f64 {
    -6.0 * r * (h * h - r * r).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kernels_vanish_at_support() {
        assert_eq!(spiky(1.0, 1.0), 0.0);
        assert_eq!(poly6(1.0, 1.0), 0.0);
        assert_eq!(dspiky(1.0, 1.0), 0.0);
        assert_eq!(dpoly6(1.0, 1.0), 0.0);
        assert_eq!(spiky(0.0, 2.0), 8.0);
        assert_eq!(poly6(0.0, 2.0), 64.0);
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        let h = 1.3;
        let eps = 1e-6;
        for &r in &[0.1, 0.5, 0.9, 1.2] {
            let fd_spiky = (spiky(r + eps, h) - spiky(r - eps, h)) / (2.0 * eps);
            let fd_poly6 = (poly6(r + eps, h) - poly6(r - eps, h)) / (2.0 * eps);
            assert_relative_eq!(dspiky(r, h), fd_spiky, epsilon = 1e-6);
            assert_relative_eq!(dpoly6(r, h), fd_poly6, epsilon = 1e-6);
        }
    }
}
