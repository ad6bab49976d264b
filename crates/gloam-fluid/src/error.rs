//! Error types for gloam-fluid.

use gloam_field::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FluidError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("invalid smoke config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("smoke config out of range: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FluidError>;
