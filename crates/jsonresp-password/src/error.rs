//! Error types for password policies.

/// Policy configuration errors.
///
/// A password that fails the active policy is not an error: it is reported
/// through the boolean result and the envelope's error list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// Custom policy whose minimum length exceeds its maximum.
    #[error("invalid length bounds: min_length {min} exceeds max_length {max}")]
    InvertedBounds { min: usize, max: usize },

    /// Preset name not in light/medium/hard/custom.
    #[error("unknown password policy: {name}")]
    UnknownPreset { name: String },

    /// Settings document could not be read or is incomplete.
    #[error("settings error: {message}")]
    Settings { message: String },
}

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

impl PolicyError {
    pub(crate) fn missing_custom_section() -> Self {
        PolicyError::Settings {
            message: "policy `custom` requires a `custom` section".to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PolicyError {
    fn from(err: serde_yaml::Error) -> Self {
        PolicyError::Settings {
            message: err.to_string(),
        }
    }
}
