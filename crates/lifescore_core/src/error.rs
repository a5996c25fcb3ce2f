//! Library error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
