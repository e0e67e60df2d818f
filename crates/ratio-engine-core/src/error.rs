use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatioEngineError {
    /// Malformed or duplicate period identifiers. Aborts the whole call.
    #[error("Structural input error at {period}: {reason}")]
    StructuralInput { period: String, reason: String },

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RatioEngineError {
    fn from(e: serde_json::Error) -> Self {
        RatioEngineError::SerializationError(e.to_string())
    }
}
