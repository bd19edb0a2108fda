use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Parameter payload has {actual} words, expected exactly {expected}")]
    PayloadLength { expected: usize, actual: usize },

    #[error("Input vector has {actual} words, expected exactly {expected}")]
    InputLength { expected: usize, actual: usize },

    #[error("Invalid activation scale {0} (must be finite and strictly positive)")]
    InvalidScale(f32),

    #[error("Parameters are already loaded; re-loading is not supported")]
    AlreadyLoaded,

    #[error("Parameters must be loaded before inference")]
    NotLoaded,
}

pub type Result<T> = std::result::Result<T, NetworkError>;
