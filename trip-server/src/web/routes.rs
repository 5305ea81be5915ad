//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::backend::BackendError;
use crate::credentials::{CredentialError, mask_key};

use super::dto::*;
use super::form::{FormError, TripForm};
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/settings", get(settings_page))
        .route("/trip/plan", post(plan_trip))
        .route(
            "/api/credentials",
            get(get_credentials).post(save_credentials),
        )
        .route("/api/credentials/test", post(test_connection))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "Page not found".to_string(),
    }
}

/// Index page with the trip form.
async fn index_page() -> impl IntoResponse {
    render_page(IndexTemplate::new(Local::now().date_naive()))
}

/// About page.
async fn about_page() -> impl IntoResponse {
    render_page(AboutTemplate)
}

/// Settings page showing which API keys are stored.
async fn settings_page(State(state): State<AppState>) -> impl IntoResponse {
    let credentials = state.credentials.get().await;
    render_page(SettingsTemplate {
        gemini_api_key: credentials.gemini_api_key.as_deref().map(mask_key),
        serper_api_key: credentials.serper_api_key.as_deref().map(mask_key),
    })
}

/// Render a full page, falling back to the error page if rendering fails.
fn render_page(template: impl Template) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        error!("template error: {e}");
        ErrorTemplate {
            title: "Something went wrong".into(),
            message: "This page could not be displayed.".into(),
            details: Some(e.to_string()),
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {e}"))
    }))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Generate a trip plan from the submitted form.
async fn plan_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let form: TripForm = serde_json::from_slice(&body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(&body), "invalid trip form JSON: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = form.validate(Local::now().date_naive())?;

    let plan = state.backend.generate_itinerary(&request).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = TripResultsTemplate {
            trip: TripView::from_plan(&plan, request.travel_date(), request.party_size().get()),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(GenerationResponse::ok(plan)).into_response())
    }
}

/// Report which API keys are stored.
async fn get_credentials(State(state): State<AppState>) -> Json<CredentialsStatus> {
    let credentials = state.credentials.get().await;
    Json(CredentialsStatus::from_credentials(&credentials))
}

/// Save API keys, then test the connection with them.
///
/// The keys are stored whatever the connection test says.
async fn save_credentials(
    State(state): State<AppState>,
    Json(req): Json<SaveCredentialsRequest>,
) -> Result<Json<SaveCredentialsResponse>, AppError> {
    let credentials = req.into_credentials();
    state.credentials.save(credentials.clone()).await?;

    let connected = state
        .backend
        .validate_credentials(&credentials)
        .await
        .unwrap_or_else(|e| {
            warn!("connection test failed: {e}");
            false
        });

    Ok(Json(SaveCredentialsResponse {
        saved: true,
        connected,
    }))
}

/// Test the connection with the stored API keys.
async fn test_connection(
    State(state): State<AppState>,
) -> Result<Json<ConnectionTestResponse>, AppError> {
    let credentials = state.credentials.get().await;
    let connected = state.backend.validate_credentials(&credentials).await?;
    Ok(Json(ConnectionTestResponse { connected }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        error!("backend error: {e}");
        AppError::Internal {
            message: e.user_message().to_string(),
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(e: CredentialError) -> Self {
        error!("credential store error: {e}");
        AppError::Internal {
            message: "Could not save API keys.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}
