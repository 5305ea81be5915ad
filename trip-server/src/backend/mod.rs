//! Itinerary backends.
//!
//! The web layer talks to an [`ItineraryBackend`], which knows how to turn a
//! trip request into a plan and how to check the API credentials a real
//! backend would use. The only implementation is [`MockBackend`], which runs
//! the local generator behind an artificial delay and accepts any
//! credentials. A backend built on a generative-text API and a web-search API
//! would implement the same trait.

mod error;
mod mock;

use async_trait::async_trait;

use crate::credentials::Credentials;
use crate::domain::{TripPlan, TripRequest};

pub use error::BackendError;
pub use mock::{DEFAULT_LATENCY, MockBackend};

/// A service that produces itineraries.
#[async_trait]
pub trait ItineraryBackend: Send + Sync {
    /// Produce a plan for a validated request.
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<TripPlan, BackendError>;

    /// Check whether the credentials would let the backend reach its APIs.
    async fn validate_credentials(&self, credentials: &Credentials) -> Result<bool, BackendError>;
}
