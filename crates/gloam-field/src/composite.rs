//! Composite entries: a fixed bundle of same-kind values that behaves as one.
//!
//! A `Composite<E, N>` holds exactly `N` entries. Arithmetic broadcasts over
//! the entries, and subscripting a composite of fields yields a composite of
//! the cell values. Because `N` is part of the type, combining composites
//! with different entry counts does not compile. Composites of fields are
//! only built through [`Composite::try_new`] (or [`Composite::zeros`]), so
//! their entries always share one shape.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use gloam_math::na;

use crate::{Field, FieldError, FieldValue, Result};

/// Whether a value is a leaf or a bundle of `n` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Primitive,
    Composite(usize),
}

/// A value that can sit inside a composite.
pub trait Entry: Sized {
    fn kind(&self) -> EntryKind;

    /// Apply `f` to every scalar, keeping the structure.
    fn map_scalars(&self, f: &dyn Fn(f64) -> f64) -> Self;

    /// Combine two values of the same structure scalar by scalar.
    fn zip_scalars(&self, other: &Self, f: &dyn Fn(f64, f64) -> f64) -> Self;

    fn is_composite(&self) -> bool {
        matches!(self.kind(), EntryKind::Composite(_))
    }
}

impl Entry for f64 {
    fn kind(&self) -> EntryKind {
        EntryKind::Primitive
    }

    fn map_scalars(&self, f: &dyn Fn(f64) -> f64) -> Self {
        f(*self)
    }

    fn zip_scalars(&self, other: &Self, f: &dyn Fn(f64, f64) -> f64) -> Self {
        f(*self, *other)
    }
}

impl<const D: usize> Entry for na::SVector<f64, D> {
    fn kind(&self) -> EntryKind {
        EntryKind::Primitive
    }

    fn map_scalars(&self, f: &dyn Fn(f64) -> f64) -> Self {
        self.map(f)
    }

    fn zip_scalars(&self, other: &Self, f: &dyn Fn(f64, f64) -> f64) -> Self {
        self.zip_map(other, f)
    }
}

impl<E: Entry, const N: usize> Entry for Composite<E, N> {
    fn kind(&self) -> EntryKind {
        EntryKind::Composite(N)
    }

    fn map_scalars(&self, f: &dyn Fn(f64) -> f64) -> Self {
        self.map(|e| e.map_scalars(f))
    }

    fn zip_scalars(&self, other: &Self, f: &dyn Fn(f64, f64) -> f64) -> Self {
        self.zip_with(other, |a, b| a.zip_scalars(b, f))
    }
}

/// Integer-index access shared by fields and composites of fields.
pub trait Subscript {
    type Output;

    fn subscript(&self, index: [usize; 2]) -> Self::Output;
}

impl<T: FieldValue> Subscript for Field<T> {
    type Output = T;

    #[inline]
    fn subscript(&self, index: [usize; 2]) -> T {
        self[index]
    }
}

impl<E: Subscript, const N: usize> Subscript for Composite<E, N> {
    type Output = Composite<E::Output, N>;

    fn subscript(&self, index: [usize; 2]) -> Self::Output {
        self.map(|e| e.subscript(index))
    }
}

/// `N` entries of the same kind, treated as one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composite<E, const N: usize> {
    entries: [E; N],
}

impl<E: Copy, const N: usize> Composite<E, N> {
    /// Bundle plain values. Composites of fields go through
    /// [`Composite::try_new`], which checks their shapes.
    #[inline]
    pub const fn new(entries: [E; N]) -> Self {
        Self::from_entries(entries)
    }
}

impl<E, const N: usize> Composite<E, N> {
    #[inline]
    pub(crate) const fn from_entries(entries: [E; N]) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[E; N] {
        &self.entries
    }

    #[inline]
    pub fn entries_mut(&mut self) -> &mut [E; N] {
        &mut self.entries
    }

    pub fn into_entries(self) -> [E; N] {
        self.entries
    }

    /// Apply `f` to every entry.
    pub fn map<U>(&self, f: impl Fn(&E) -> U) -> Composite<U, N> {
        Composite::from_entries(std::array::from_fn(|k| f(&self.entries[k])))
    }

    /// Combine entries pairwise.
    pub fn zip_with<F, U>(&self, other: &Composite<F, N>, f: impl Fn(&E, &F) -> U) -> Composite<U, N> {
        Composite::from_entries(std::array::from_fn(|k| f(&self.entries[k], &other.entries[k])))
    }
}

impl<E, const N: usize> Index<usize> for Composite<E, N> {
    type Output = E;

    fn index(&self, k: usize) -> &E {
        &self.entries[k]
    }
}

impl<E, const N: usize> IndexMut<usize> for Composite<E, N> {
    fn index_mut(&mut self, k: usize) -> &mut E {
        &mut self.entries[k]
    }
}

impl<E: Copy, const N: usize> From<[E; N]> for Composite<E, N> {
    fn from(entries: [E; N]) -> Self {
        Self::new(entries)
    }
}

impl<E: Copy + Add<Output = E>, const N: usize> Add for Composite<E, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |&a, &b| a + b)
    }
}

impl<E: Copy + Sub<Output = E>, const N: usize> Sub for Composite<E, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |&a, &b| a - b)
    }
}

/// Element-wise product.
impl<E: Copy + Mul<Output = E>, const N: usize> Mul for Composite<E, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |&a, &b| a * b)
    }
}

impl<E: Copy + Div<Output = E>, const N: usize> Div for Composite<E, N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |&a, &b| a / b)
    }
}

impl<E: Copy + Mul<f64, Output = E>, const N: usize> Mul<f64> for Composite<E, N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.map(|&a| a * rhs)
    }
}

impl<E: Copy + Div<f64, Output = E>, const N: usize> Div<f64> for Composite<E, N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.map(|&a| a / rhs)
    }
}

impl<E: Copy + Neg<Output = E>, const N: usize> Neg for Composite<E, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|&a| -a)
    }
}

impl<T: FieldValue, const N: usize> Composite<Field<T>, N> {
    /// Bundle fields that share one shape.
    ///
    /// # Errors
    /// [`FieldError::ShapeMismatch`] if any entry's shape differs from the
    /// first entry's.
    pub fn try_new(fields: [Field<T>; N]) -> Result<Self> {
        if let Some(first) = fields.first() {
            for f in &fields[1..] {
                first.check_same_shape(f)?;
            }
        }
        Ok(Self::from_entries(fields))
    }

    /// Alias of [`Composite::try_new`].
    ///
    /// # Errors
    /// [`FieldError::ShapeMismatch`] as for `try_new`.
    #[inline]
    pub fn from_fields(fields: [Field<T>; N]) -> Result<Self> {
        Self::try_new(fields)
    }

    /// `N` zero fields of `shape`.
    ///
    /// # Errors
    /// [`FieldError::EmptyShape`] for a zero-sized axis.
    pub fn zeros(shape: [usize; 2]) -> Result<Self> {
        let first = Field::new(shape)?;
        Ok(Self::from_entries(std::array::from_fn(|_| first.clone())))
    }

    /// Iteration domain: the shape of the first entry.
    pub fn loop_range(&self) -> [usize; 2] {
        self.entries.first().map_or([0, 0], Field::shape)
    }

    #[inline]
    pub fn at(&self, index: [usize; 2]) -> Composite<T, N> {
        self.subscript(index)
    }

    /// Store one cell of every entry.
    pub fn set(&mut self, index: [usize; 2], value: Composite<T, N>) {
        for (f, v) in self.entries.iter_mut().zip(value.entries) {
            f.set(index, v);
        }
    }

    pub fn fields(&self) -> &[Field<T>; N] {
        &self.entries
    }

    /// Copy every entry from `other`.
    ///
    /// # Errors
    /// [`FieldError::ShapeMismatch`] if the shapes differ.
    pub fn copy_from(&mut self, other: &Self) -> Result<()> {
        for (dst, src) in self.entries.iter_mut().zip(&other.entries) {
            dst.copy_from(src)?;
        }
        Ok(())
    }

    /// Overwrite every cell with `f(index)`.
    pub fn fill_with(&mut self, f: impl Fn([usize; 2]) -> Composite<T, N> + Sync) {
        for k in 0..N {
            self.entries[k].par_fill_with(|index| f(index).entries[k]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloam_math::Vec2;

    #[test]
    fn test_kind() {
        let c = Composite::new([1.0_f64, 2.0, 3.0]);
        assert_eq!(c.kind(), EntryKind::Composite(3));
        assert!(c.is_composite());
        assert_eq!(1.0_f64.kind(), EntryKind::Primitive);
        assert!(!Vec2::zeros().is_composite());
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let a = Composite::new([1.0_f64, 2.0]);
        let b = Composite::new([3.0_f64, 5.0]);
        assert_eq!(a + b, Composite::new([4.0, 7.0]));
        assert_eq!(b - a, Composite::new([2.0, 3.0]));
        assert_eq!(a * b, Composite::new([3.0, 10.0]));
        assert_eq!(b / a, Composite::new([3.0, 2.5]));
        assert_eq!(-a, Composite::new([-1.0, -2.0]));
        assert_eq!(a * 2.0, Composite::new([2.0, 4.0]));
        assert_eq!(b / 2.0, Composite::new([1.5, 2.5]));
    }

    #[test]
    fn test_nested_composites() {
        let inner = Composite::new([1.0_f64, -2.0]);
        let outer = Composite::new([inner, inner * 3.0]);
        assert_eq!(outer.kind(), EntryKind::Composite(2));
        let doubled = outer.map_scalars(&|x| 2.0 * x);
        assert_eq!(doubled[1], Composite::new([6.0, -12.0]));
        let summed = outer.zip_scalars(&doubled, &|a, b| a + b);
        assert_eq!(summed[0], Composite::new([3.0, -6.0]));
    }

    #[test]
    fn test_vector_entries() {
        let a = Composite::new([Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        let b = a.map_scalars(&|x| x * x);
        assert_eq!(b[1], Vec2::new(9.0, 16.0));
        assert_eq!((a + b)[0], Vec2::new(2.0, 6.0));
    }

    #[test]
    fn test_field_composite_subscript() {
        let mut c = Composite::<Field<f64>, 2>::zeros([3, 2]).unwrap();
        assert_eq!(c.loop_range(), [3, 2]);
        c.set([2, 1], Composite::new([4.0, 5.0]));
        assert_eq!(c.at([2, 1]), Composite::new([4.0, 5.0]));
        assert_eq!(c.subscript([0, 0]), Composite::new([0.0, 0.0]));
        assert_eq!(c.fields()[1][[2, 1]], 5.0);
    }

    #[test]
    fn test_field_composite_rejects_mixed_shapes() {
        let a = Field::<f64>::new([3, 2]).unwrap();
        let b = Field::<f64>::new([2, 3]).unwrap();
        let err = Composite::try_new([a, b]).unwrap_err();
        assert_eq!(
            err,
            FieldError::ShapeMismatch {
                expected: [3, 2],
                found: [2, 3]
            }
        );
    }

    #[test]
    fn test_field_composite_checks_every_entry() {
        let a = Field::<f64>::new([3, 2]).unwrap();
        let c = Field::<f64>::new([2, 3]).unwrap();
        let err = Composite::from_fields([a.clone(), a.clone(), c]).unwrap_err();
        assert!(matches!(err, FieldError::ShapeMismatch { found: [2, 3], .. }));

        let ok = Composite::try_new([a.clone(), a]).unwrap();
        assert_eq!(ok.loop_range(), [3, 2]);
    }

    #[test]
    fn test_fill_with() {
        let mut c = Composite::<Field<f64>, 2>::zeros([2, 2]).unwrap();
        c.fill_with(|[i, j]| Composite::new([i as f64, j as f64]));
        assert_eq!(c.at([1, 0]), Composite::new([1.0, 0.0]));
        assert_eq!(c.at([0, 1]), Composite::new([0.0, 1.0]));
    }
}
