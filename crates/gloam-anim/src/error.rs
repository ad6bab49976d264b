//! Error types for gloam-anim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimError {
    #[error("shadertoy inputs are not defined, call `Context::define_input` first")]
    InputsNotDefined,

    #[error("invalid animation config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("animation callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl AnimError {
    /// Wrap an error raised inside a lifecycle hook.
    pub fn callback(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        AnimError::Callback(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, AnimError>;
