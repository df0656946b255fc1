use thiserror::Error;

/// Analytics pipeline error.
///
/// Missing *optional* data (no sensors, no history) is never an error — it
/// flows through as lowered confidence in the insights section. Errors are
/// reserved for inputs the pipeline cannot reason about at all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A required input field is missing or malformed. Carries the field name
    /// so the API layer can surface field-level detail.
    #[error("invalid input: {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Numeric input that arithmetic cannot run on (NaN / infinite values).
    /// Aborts the whole run; never coerced to zero.
    #[error("computation failed: {0}")]
    Computation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AnalyticsError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
