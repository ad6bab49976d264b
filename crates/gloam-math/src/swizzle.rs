//! Component swizzling (`v.yx`, `v.xyX_`, ...).
//!
//! Letters `xyzw` select a component, upper-case `XYZW` select and negate it,
//! `_` inserts a zero.

use crate::{DVec, MathError, Result, na};

/// Build a vector from the components of `v` named by `key`.
///
/// # Errors
/// [`MathError::InvalidSwizzle`] for an unknown letter or a component past
/// the end of `v`.
pub fn swizzle<const D: usize>(v: &na::SVector<f64, D>, key: &str) -> Result<DVec> {
    let mut out = Vec::with_capacity(key.len());
    for k in key.chars() {
        let value = match k {
            '_' => 0.0,
            'x' | 'y' | 'z' | 'w' => v[lane(k, key, D)?],
            'X' | 'Y' | 'Z' | 'W' => -v[lane(k.to_ascii_lowercase(), key, D)?],
            _ => return Err(MathError::InvalidSwizzle(key.to_string())),
        };
        out.push(value);
    }
    Ok(DVec::from_vec(out))
}

/// Fixed-size [`swizzle`]: `swizzle_n::<2, _>(&v, "yx")`.
///
/// # Errors
/// As [`swizzle`], plus [`MathError::DimensionMismatch`] when `key` does not
/// name exactly `N` components.
pub fn swizzle_n<const N: usize, const D: usize>(
    v: &na::SVector<f64, D>,
    key: &str,
) -> Result<na::SVector<f64, N>> {
    let out = swizzle(v, key)?;
    if out.len() != N {
        return Err(MathError::DimensionMismatch {
            expected: N,
            found: out.len(),
        });
    }
    Ok(na::SVector::<f64, N>::from_column_slice(out.as_slice()))
}

/// Select components by index.
///
/// # Errors
/// [`MathError::InvalidSwizzle`] for an index past the end of `v`.
pub fn shuffle<const D: usize>(v: &na::SVector<f64, D>, indices: &[usize]) -> Result<DVec> {
    indices
        .iter()
        .map(|&i| {
            v.get(i)
                .copied()
                .ok_or_else(|| MathError::InvalidSwizzle(format!("index {i} of {D}-D vector")))
        })
        .collect::<Result<Vec<_>>>()
        .map(DVec::from_vec)
}

fn lane(k: char, key: &str, dim: usize) -> Result<usize> {
    let i = match k {
        'x' => 0,
        'y' => 1,
        'z' => 2,
        _ => 3,
    };
    if i < dim {
        Ok(i)
    } else {
        Err(MathError::InvalidSwizzle(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec2, Vec3};

    #[test]
    fn test_swizzle_reorder_and_negate() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(swizzle(&v, "zyx").unwrap().as_slice(), &[3.0, 2.0, 1.0]);
        assert_eq!(swizzle(&v, "xY_").unwrap().as_slice(), &[1.0, -2.0, 0.0]);
    }

    #[test]
    fn test_swizzle_n_fixed() {
        let p = Vec2::new(4.0, -1.0);
        let q: Vec2 = swizzle_n::<2, 2>(&p, "yx").unwrap();
        assert_eq!(q, Vec2::new(-1.0, 4.0));
        assert!(swizzle_n::<3, 2>(&p, "yx").is_err());
    }

    #[test]
    fn test_swizzle_rejects_unknown_and_out_of_range() {
        let p = Vec2::new(1.0, 2.0);
        assert!(matches!(swizzle(&p, "xq"), Err(MathError::InvalidSwizzle(_))));
        assert!(matches!(swizzle(&p, "xz"), Err(MathError::InvalidSwizzle(_))));
    }

    #[test]
    fn test_shuffle() {
        let v = Vec3::new(7.0, 8.0, 9.0);
        assert_eq!(shuffle(&v, &[2, 2, 0]).unwrap().as_slice(), &[9.0, 9.0, 7.0]);
        assert!(shuffle(&v, &[3]).is_err());
    }
}
