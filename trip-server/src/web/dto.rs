//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::credentials::{Credentials, mask_key};
use crate::domain::TripPlan;

/// Result of a generation request: either a plan or an error message.
#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    /// Whether a plan was produced
    pub success: bool,

    /// The generated plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TripPlan>,

    /// Why generation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    /// Successful response carrying a plan.
    pub fn ok(plan: TripPlan) -> Self {
        Self {
            success: true,
            data: Some(plan),
            error: None,
        }
    }

    /// Failed response carrying a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Request to save API keys.
#[derive(Debug, Deserialize)]
pub struct SaveCredentialsRequest {
    /// Generative-text API key
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Web-search API key
    #[serde(default)]
    pub serper_api_key: Option<String>,
}

impl SaveCredentialsRequest {
    /// Convert to stored credentials.
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.gemini_api_key, self.serper_api_key)
    }
}

/// Which API keys are stored, masked for display.
#[derive(Debug, Serialize)]
pub struct CredentialsStatus {
    /// Masked generative-text API key
    pub gemini_api_key: Option<String>,

    /// Masked web-search API key
    pub serper_api_key: Option<String>,

    /// Whether both keys are present
    pub complete: bool,
}

impl CredentialsStatus {
    /// Create from stored credentials.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            gemini_api_key: credentials.gemini_api_key.as_deref().map(mask_key),
            serper_api_key: credentials.serper_api_key.as_deref().map(mask_key),
            complete: credentials.is_complete(),
        }
    }
}

/// Response after saving API keys.
#[derive(Debug, Serialize)]
pub struct SaveCredentialsResponse {
    /// The keys were written to storage
    pub saved: bool,

    /// The connection test passed
    pub connected: bool,
}

/// Response for a connection test.
#[derive(Debug, Serialize)]
pub struct ConnectionTestResponse {
    /// The connection test passed
    pub connected: bool,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_response_omits_data() {
        let json = serde_json::to_value(GenerationResponse::failed("boom")).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn status_masks_keys() {
        let creds = Credentials::new(Some("gemini-abcd1234".into()), None);
        let status = CredentialsStatus::from_credentials(&creds);

        assert_eq!(status.gemini_api_key.as_deref(), Some("••••1234"));
        assert_eq!(status.serper_api_key, None);
        assert!(!status.complete);
    }

    #[test]
    fn save_request_drops_blank_keys() {
        let req: SaveCredentialsRequest =
            serde_json::from_str(r#"{"gemini_api_key":"","serper_api_key":"key"}"#).unwrap();
        let creds = req.into_credentials();

        assert_eq!(creds.gemini_api_key, None);
        assert_eq!(creds.serper_api_key.as_deref(), Some("key"));
    }
}
