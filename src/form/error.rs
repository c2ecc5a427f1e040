use thiserror::Error;

/// A field buffer that could not be turned into its wire type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldCoercionError {
    pub field: String,
    pub message: String,
}

impl FieldCoercionError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
