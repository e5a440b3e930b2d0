/// Result alias used throughout the crate.
pub type WavesResult<T> = Result<T, WavesError>;

/// Library error type.
#[derive(thiserror::Error, Debug)]
pub enum WavesError {
    /// Invalid configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while evaluating or rendering a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Failure inside a frame sink (video/image encoders, preview files).
    #[error("encode error: {0}")]
    Encode(String),

    /// Config or data (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, usually IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavesError {
    /// Build a [`WavesError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WavesError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`WavesError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`WavesError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
