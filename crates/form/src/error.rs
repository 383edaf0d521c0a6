/// Error type for loading form schemas and state.
///
/// Validation failures are not represented here: they come from the host
/// validator as a [`ValidationError`](trellis_validator::ValidationError)
/// and are returned to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The schema JSON could not be deserialized.
    #[error("invalid form schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// Form state must be a JSON object.
    #[error("form state must be a JSON object, got {found}")]
    InvalidState { found: String },
}

impl FormError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Schema(_) => "FORM_SCHEMA",
            Self::InvalidState { .. } => "FORM_INVALID_STATE",
        }
    }
}
