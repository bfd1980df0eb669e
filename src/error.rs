use thiserror::Error;

/// Errors raised by matrix construction, configuration and training.
#[derive(Debug, Error)]
pub enum NetError {
    /// Input/output matrices do not describe a valid training set.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A configuration value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
