use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_server::backend::MockBackend;
use trip_server::config::ServerConfig;
use trip_server::credentials::CredentialStore;
use trip_server::planner::PlannerConfig;
use trip_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "trip_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    // Load stored API keys (a missing file means none saved yet)
    let credentials = CredentialStore::open(&config.credentials_path)?;
    info!(path = %credentials.path().display(), "credential store opened");

    let mut backend = MockBackend::new(PlannerConfig::default()).with_latency(config.latency);
    if let Some(seed) = config.seed {
        info!(seed, "using fixed RNG seed");
        backend = backend.with_seed(seed);
    }

    let state = AppState::new(backend, credentials);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Trip Planner listening on http://{}", config.addr);
    info!("  GET  /health               - Health check");
    info!("  GET  /settings             - API key settings");
    info!("  POST /trip/plan            - Generate an itinerary");
    info!("  GET  /api/credentials      - Stored key status");
    info!("  POST /api/credentials      - Save API keys");
    info!("  POST /api/credentials/test - Test the connection");

    axum::serve(listener, app).await?;
    Ok(())
}
