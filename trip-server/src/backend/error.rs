//! Itinerary backend error types.

/// Errors from an itinerary backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Synthesis failed unexpectedly
    #[error("itinerary generation failed: {reason}")]
    Generation { reason: String },

    /// Credential check could not be carried out
    #[error("credential check failed: {reason}")]
    CredentialCheck { reason: String },
}

impl BackendError {
    /// Message safe to show to the traveler.
    pub fn user_message(&self) -> &'static str {
        match self {
            BackendError::Generation { .. } => "Failed to generate itinerary. Please try again.",
            BackendError::CredentialCheck { .. } => {
                "Could not test the API connection. Please try again."
            }
        }
    }
}
