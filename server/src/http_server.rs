use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use guardian_core::errors::SuggestError;
use guardian_core::suggest::Suggester;
use guardian_core::types::{SuggestionRequest, SuggestionResult};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::action;

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    suggester: Arc<Suggester>,
}

impl AppState {
    pub fn new(suggester: Suggester) -> Self {
        Self {
            suggester: Arc::new(suggester),
        }
    }
}

/// Body shape for every failure the API reports.
#[derive(Serialize)]
pub struct ErrorBody {
    error: String,
}

/// Error type for HTTP responses.
///
/// Validation failures are the caller's fault; everything from the provider
/// round trip is an upstream failure.
#[derive(Debug)]
pub struct ApiError(SuggestError);

impl From<SuggestError> for ApiError {
    fn from(err: SuggestError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SuggestError::Validation(_) => StatusCode::BAD_REQUEST,
            SuggestError::Provider(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

/// Builds the router with all routes and middleware. The dashboard is served
/// from a different origin, so CORS stays open.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/api/suggest", post(handle_suggest))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting HTTP server on {}", addr);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server exited: {}", e))
}

/// Health check handler
async fn health() -> impl IntoResponse {
    "Remote Guardian backend is running"
}

/// Handler for suggestion requests
async fn handle_suggest(
    State(state): State<AppState>,
    Json(payload): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResult>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("suggest", %request_id);

    async move {
        let result = action::get_ai_commands(&state.suggester, &payload).await?;
        Ok(Json(result))
    }
    .instrument(span)
    .await
}
