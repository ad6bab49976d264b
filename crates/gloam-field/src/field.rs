//! Dense 2D field storage.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

use gloam_math::na;
use rayon::prelude::*;

use crate::{FieldError, Result};

/// A value that can live in a [`Field`] and be interpolated.
///
/// Implemented for `f64` and `SVector<f64, D>`.
pub trait FieldValue:
    Copy
    + Send
    + Sync
    + PartialEq
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + AddAssign
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
}

impl FieldValue for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl<const D: usize> FieldValue for na::SVector<f64, D> {
    #[inline]
    fn zero() -> Self {
        Self::zeros()
    }

    #[inline]
    fn one() -> Self {
        Self::repeat(1.0)
    }
}

/// Row-major 2D grid of values.
///
/// Shape is `[width, height]`; cell `[i, j]` lives at `i + j * width`, so a
/// row of constant `j` is contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    shape: [usize; 2],
    data: Vec<T>,
}

impl<T: FieldValue> Field<T> {
    /// Create a field filled with zeros.
    ///
    /// # Errors
    /// [`FieldError::EmptyShape`] if either axis is zero.
    pub fn new(shape: [usize; 2]) -> Result<Self> {
        Self::filled(shape, T::zero())
    }

    /// Create a field filled with a constant value.
    ///
    /// # Errors
    /// [`FieldError::EmptyShape`] if either axis is zero.
    pub fn filled(shape: [usize; 2], value: T) -> Result<Self> {
        check_shape(shape)?;
        Ok(Self {
            shape,
            data: vec![value; shape[0] * shape[1]],
        })
    }

    /// Create a field by evaluating `f` at every cell.
    ///
    /// # Errors
    /// [`FieldError::EmptyShape`] if either axis is zero.
    pub fn from_fn(shape: [usize; 2], f: impl Fn([usize; 2]) -> T + Sync) -> Result<Self> {
        let mut field = Self::new(shape)?;
        field.par_fill_with(f);
        Ok(field)
    }

    /// `[width, height]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.shape[0]
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.shape[1]
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: empty shapes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Linear offset of cell `[i, j]`.
    #[inline]
    pub fn offset(&self, index: [usize; 2]) -> usize {
        index[0] + index[1] * self.shape[0]
    }

    /// Whether a signed index lies inside the field.
    #[inline]
    pub fn contains(&self, i: i64, j: i64) -> bool {
        i >= 0 && j >= 0 && (i as usize) < self.shape[0] && (j as usize) < self.shape[1]
    }

    /// Value at `[i, j]`, or `None` outside the field.
    #[inline]
    pub fn get(&self, index: [usize; 2]) -> Option<T> {
        if index[0] < self.shape[0] && index[1] < self.shape[1] {
            Some(self.data[self.offset(index)])
        } else {
            None
        }
    }

    /// Mutable reference at `[i, j]`, or `None` outside the field.
    #[inline]
    pub fn get_mut(&mut self, index: [usize; 2]) -> Option<&mut T> {
        if index[0] < self.shape[0] && index[1] < self.shape[1] {
            let k = self.offset(index);
            Some(&mut self.data[k])
        } else {
            None
        }
    }

    /// Store `value` at `[i, j]`; out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, index: [usize; 2], value: T) {
        if let Some(cell) = self.get_mut(index) {
            *cell = value;
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Copy all cells from `other`.
    ///
    /// # Errors
    /// [`FieldError::ShapeMismatch`] if the shapes differ.
    pub fn copy_from(&mut self, other: &Field<T>) -> Result<()> {
        self.check_same_shape(other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Fail unless `other` has the same shape as `self`.
    pub fn check_same_shape<U>(&self, other: &Field<U>) -> Result<()> {
        if self.shape == other.shape {
            Ok(())
        } else {
            Err(FieldError::ShapeMismatch {
                expected: self.shape,
                found: other.shape,
            })
        }
    }

    /// New field with `f` applied to every cell.
    pub fn map<U: FieldValue>(&self, f: impl Fn(T) -> U + Sync) -> Field<U> {
        Field {
            shape: self.shape,
            data: self.data.par_iter().map(|&v| f(v)).collect(),
        }
    }

    /// Every index in row-major order.
    pub fn iter_indices(&self) -> impl Iterator<Item = [usize; 2]> + use<T> {
        let [w, h] = self.shape;
        (0..h).flat_map(move |j| (0..w).map(move |i| [i, j]))
    }

    /// Overwrite every cell with `f(index)`, rows in parallel.
    pub fn par_fill_with(&mut self, f: impl Fn([usize; 2]) -> T + Sync) {
        let w = self.shape[0];
        self.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, cell) in row.iter_mut().enumerate() {
                    *cell = f([i, j]);
                }
            });
    }

    /// Visit every cell mutably with its index, rows in parallel.
    pub fn par_for_each_mut(&mut self, f: impl Fn([usize; 2], &mut T) + Sync) {
        let w = self.shape[0];
        self.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, cell) in row.iter_mut().enumerate() {
                    f([i, j], cell);
                }
            });
    }

    /// Sum over all cells.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }
}

impl Field<f64> {
    /// Largest absolute cell value.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
    }
}

impl<const D: usize> Field<na::SVector<f64, D>> {
    /// Largest vector norm over all cells.
    pub fn max_norm(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, v| m.max(v.norm()))
    }
}

impl<T> Index<[usize; 2]> for Field<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: [usize; 2]) -> &T {
        &self.data[index[0] + index[1] * self.shape[0]]
    }
}

impl<T> IndexMut<[usize; 2]> for Field<T> {
    #[inline]
    fn index_mut(&mut self, index: [usize; 2]) -> &mut T {
        &mut self.data[index[0] + index[1] * self.shape[0]]
    }
}

fn check_shape(shape: [usize; 2]) -> Result<()> {
    if shape[0] == 0 || shape[1] == 0 {
        Err(FieldError::EmptyShape(shape))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloam_math::Vec2;

    #[test]
    fn test_field_creation() {
        let f = Field::<f64>::new([4, 3]).unwrap();
        assert_eq!(f.shape(), [4, 3]);
        assert_eq!(f.len(), 12);
        assert_eq!(f.sum(), 0.0);
    }

    #[test]
    fn test_empty_shape_rejected() {
        assert_eq!(
            Field::<f64>::new([0, 3]).unwrap_err(),
            FieldError::EmptyShape([0, 3])
        );
    }

    #[test]
    fn test_row_major_layout() {
        let f = Field::from_fn([3, 2], |[i, j]| (i + 10 * j) as f64).unwrap();
        assert_eq!(f.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(f[[2, 1]], 12.0);
        assert_eq!(f.get([3, 0]), None);
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut f = Field::<f64>::new([2, 2]).unwrap();
        f.set([1, 1], 5.0);
        f.set([2, 0], 9.0);
        assert_eq!(f.sum(), 5.0);
    }

    #[test]
    fn test_copy_from_checks_shape() {
        let mut a = Field::<f64>::new([2, 2]).unwrap();
        let b = Field::filled([2, 2], 3.0).unwrap();
        let c = Field::filled([3, 2], 3.0).unwrap();
        a.copy_from(&b).unwrap();
        assert_eq!(a, b);
        assert!(matches!(
            a.copy_from(&c),
            Err(FieldError::ShapeMismatch {
                expected: [2, 2],
                found: [3, 2]
            })
        ));
    }

    #[test]
    fn test_vector_field_diagnostics() {
        let mut v = Field::<Vec2>::new([3, 3]).unwrap();
        v[[1, 1]] = Vec2::new(3.0, 4.0);
        assert_eq!(v.max_norm(), 5.0);
        assert_eq!(v.sum(), Vec2::new(3.0, 4.0));
        let speed = v.map(|u| u.norm());
        assert_eq!(speed.max_abs(), 5.0);
    }

    #[test]
    fn test_indices_cover_every_cell() {
        let f = Field::<f64>::new([3, 2]).unwrap();
        let idx: Vec<_> = f.iter_indices().collect();
        assert_eq!(idx.len(), 6);
        assert_eq!(idx[0], [0, 0]);
        assert_eq!(idx[4], [1, 1]);
    }
}
