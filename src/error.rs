//! Error type for the session layer
//!
//! The engine itself cannot fail; only configuration and report I/O can.

#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    #[error("Invalid session config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DriftError>;
