//! Double buffers.

use gloam_field::{Composite, Field, FieldValue};

/// Two same-shaped fields: `old` is read, `new` is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair<T: FieldValue> {
    buffers: Composite<Field<T>, 2>,
}

impl<T: FieldValue> Pair<T> {
    /// Build both buffers with `init`.
    ///
    /// # Errors
    /// Whatever `init` returns, or [`gloam_field::FieldError::ShapeMismatch`]
    /// if the two calls disagree in shape.
    pub fn make(mut init: impl FnMut() -> gloam_field::Result<Field<T>>) -> gloam_field::Result<Self> {
        let old = init()?;
        let new = init()?;
        Ok(Self {
            buffers: Composite::try_new([old, new])?,
        })
    }

    /// Zero-filled buffers of `shape`.
    pub fn zeros(shape: [usize; 2]) -> gloam_field::Result<Self> {
        Ok(Self {
            buffers: Composite::zeros(shape)?,
        })
    }

    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.buffers.loop_range()
    }

    #[inline]
    pub fn old(&self) -> &Field<T> {
        &self.buffers[0]
    }

    #[inline]
    pub fn new(&self) -> &Field<T> {
        &self.buffers[1]
    }

    #[inline]
    pub fn old_mut(&mut self) -> &mut Field<T> {
        &mut self.buffers[0]
    }

    #[inline]
    pub fn new_mut(&mut self) -> &mut Field<T> {
        &mut self.buffers[1]
    }

    /// `(old, new)` borrowed together for a read-old write-new pass.
    #[inline]
    pub fn split_mut(&mut self) -> (&Field<T>, &mut Field<T>) {
        let [old, new] = self.buffers.entries_mut();
        (&*old, new)
    }

    /// Copy `new` into `old`.
    pub fn update(&mut self) {
        let [old, new] = self.buffers.entries_mut();
        old.as_mut_slice().copy_from_slice(new.as_slice());
    }

    /// Exchange the buffers without copying.
    pub fn swap(&mut self) {
        self.buffers.entries_mut().swap(0, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_copies_new_into_old() {
        let mut p = Pair::<f64>::zeros([3, 3]).unwrap();
        p.new_mut().fill(2.0);
        p.update();
        assert_eq!(p.old().sum(), 18.0);
        assert_eq!(p.new().sum(), 18.0);
    }

    #[test]
    fn test_swap() {
        let mut p = Pair::make(|| Field::filled([2, 2], 1.0)).unwrap();
        p.new_mut().fill(5.0);
        p.swap();
        assert_eq!(p.old()[[0, 0]], 5.0);
        assert_eq!(p.new()[[0, 0]], 1.0);
    }

    #[test]
    fn test_make_rejects_mismatched_buffers() {
        let mut shapes = [[2, 2], [3, 2]].into_iter();
        let r = Pair::<f64>::make(|| Field::new(shapes.next().unwrap_or([1, 1])));
        assert!(r.is_err());
    }
}
