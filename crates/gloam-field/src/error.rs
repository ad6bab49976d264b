//! Error types for gloam-field.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: [usize; 2],
        found: [usize; 2],
    },

    #[error("field shape {0:?} has a zero-sized axis")]
    EmptyShape([usize; 2]),
}

pub type Result<T> = std::result::Result<T, FieldError>;
