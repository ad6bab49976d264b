//! Error types for gloam-math.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("cannot build a {expected}-D vector from {found} scalars")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid swizzle: {0}")]
    InvalidSwizzle(String),

    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, MathError>;
