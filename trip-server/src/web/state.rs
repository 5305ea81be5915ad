//! Application state for the web layer.

use std::sync::Arc;

use crate::backend::ItineraryBackend;
use crate::credentials::CredentialStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary backend
    pub backend: Arc<dyn ItineraryBackend>,

    /// Stored API keys
    pub credentials: CredentialStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(backend: impl ItineraryBackend + 'static, credentials: CredentialStore) -> Self {
        Self {
            backend: Arc::new(backend),
            credentials,
        }
    }
}
