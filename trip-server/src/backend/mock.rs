//! Mock itinerary backend for running without any external API.
//!
//! Plans come from the local generator. Each call waits a fixed delay first
//! so the frontend sees the same pending state it would with a real service.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::credentials::Credentials;
use crate::domain::{TripPlan, TripRequest};
use crate::planner::{Planner, PlannerConfig};

use super::ItineraryBackend;
use super::error::BackendError;

/// Default artificial delay before each response.
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(3);

/// Backend that generates plans locally.
///
/// Without a seed every plan draws from the thread RNG. With a seed every
/// plan uses a fresh `ChaCha20Rng` seeded with it, so identical requests give
/// identical plans.
#[derive(Debug, Clone)]
pub struct MockBackend {
    config: Arc<PlannerConfig>,
    latency: Duration,
    seed: Option<u64>,
}

impl MockBackend {
    /// Create a mock backend with the default delay.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config: Arc::new(config),
            latency: DEFAULT_LATENCY,
            seed: None,
        }
    }

    /// Set the artificial delay.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Use a fixed RNG seed for every plan.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

#[async_trait]
impl ItineraryBackend for MockBackend {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<TripPlan, BackendError> {
        tokio::time::sleep(self.latency).await;

        let started = Instant::now();
        let config = Arc::clone(&self.config);
        let request = request.clone();
        let seed = self.seed;

        // A panic during synthesis surfaces as a join error.
        let plan = tokio::task::spawn_blocking(move || {
            let planner = Planner::new(&config);
            match seed {
                Some(seed) => planner.plan(&request, &mut ChaCha20Rng::seed_from_u64(seed)),
                None => planner.plan(&request, &mut rand::thread_rng()),
            }
        })
        .await
        .map_err(|e| BackendError::Generation {
            reason: e.to_string(),
        })?;

        info!(
            destination = plan.destination(),
            days = plan.total_days(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "itinerary generated"
        );

        Ok(plan)
    }

    async fn validate_credentials(&self, credentials: &Credentials) -> Result<bool, BackendError> {
        tokio::time::sleep(self.latency).await;

        debug!(
            gemini = credentials.gemini_api_key.is_some(),
            serper = credentials.serper_api_key.is_some(),
            "mock connection test"
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Budget, ExperienceLevel, PartySize};

    fn request() -> TripRequest {
        TripRequest::new(
            "Paris",
            PartySize::new(2).unwrap(),
            Budget::new(40_000).unwrap(),
            ExperienceLevel::new(25).unwrap(),
        )
        .unwrap()
    }

    fn instant_backend() -> MockBackend {
        MockBackend::default().with_latency(Duration::ZERO)
    }

    #[test]
    fn default_latency_is_three_seconds() {
        let backend = MockBackend::default();
        assert_eq!(backend.latency(), Duration::from_secs(3));
        assert_eq!(backend.seed(), None);
    }

    #[tokio::test]
    async fn generates_plan() {
        let plan = instant_backend()
            .generate_itinerary(&request())
            .await
            .unwrap();

        assert_eq!(plan.total_days(), 5);
        assert_eq!(plan.hotel().price_per_night, 4375);
    }

    #[tokio::test]
    async fn seeded_backend_is_reproducible() {
        let backend = instant_backend().with_seed(99);

        let a = backend.generate_itinerary(&request()).await.unwrap();
        let b = backend.generate_itinerary(&request()).await.unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn waits_for_latency() {
        let backend = MockBackend::default().with_latency(Duration::from_millis(50));
        let started = Instant::now();

        backend.generate_itinerary(&request()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn panic_in_synthesis_becomes_generation_error() {
        // min_days above max_days makes the day clamp panic
        let backend = MockBackend::new(PlannerConfig::new(8000, 10, 3)).with_latency(Duration::ZERO);

        let err = backend.generate_itinerary(&request()).await.unwrap_err();

        assert!(matches!(err, BackendError::Generation { .. }));
        assert_eq!(
            err.user_message(),
            "Failed to generate itinerary. Please try again."
        );
    }

    #[tokio::test]
    async fn connection_test_always_succeeds() {
        let backend = instant_backend();

        assert!(backend.validate_credentials(&Credentials::default()).await.unwrap());

        let credentials = Credentials::new(Some("g-key".into()), Some("s-key".into()));
        assert!(backend.validate_credentials(&credentials).await.unwrap());
    }
}
