//! Dense 2D fields and the sampling helpers built on them.
//!
//! A [`Field<T>`] is a row-major grid of `f64` or fixed-size vectors. Integer
//! lookups go through a [`SamplePolicy`] (clamp, black or white outside the
//! field) and real positions are read with [`bilerp`]. Several fields can be
//! bundled into a [`Composite`] that subscripts and computes as one value;
//! [`Complex`] is the two-entry case.
//!
//! # Example
//!
//! ```
//! use gloam_field::{Field, bilerp};
//! use gloam_math::Vec2;
//!
//! let f = Field::from_fn([4, 4], |[i, j]| (i + j) as f64).unwrap();
//! assert_eq!(bilerp(&f, &Vec2::new(1.5, 1.0)), 2.5);
//! ```

pub mod complex;
pub mod composite;
pub mod error;
pub mod field;
pub mod sampling;

pub use complex::{Complex, ComplexField, cplx};
pub use composite::{Composite, Entry, EntryKind, Subscript};
pub use error::{FieldError, Result};
pub use field::{Field, FieldValue};
pub use sampling::{
    DOWN, LEFT, RIGHT, SamplePolicy, UP, bilerp, black_sample, clamp_sample, linear_sample,
    nearest_sample, offset, sample, sample_with, super_sample_2x2, white_sample,
};
