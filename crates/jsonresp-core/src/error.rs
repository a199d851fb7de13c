//! Error types for envelope export.

/// Envelope errors.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The envelope could not be rendered as JSON text.
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

/// Result type for envelope operations.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

impl From<serde_json::Error> for EnvelopeError {
    fn from(err: serde_json::Error) -> Self {
        EnvelopeError::Serialization {
            message: err.to_string(),
        }
    }
}
