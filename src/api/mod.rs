//! Lofi Stats REST API
//!
//! HTTP API layer, built with Axum. Documents are loaded from the configured
//! catalog on every request.
//!
//! # Endpoints
//!
//! ## Documents
//! - `GET /api/labels.json` - Label leaderboard document
//! - `GET /api/artistIndex.json` - Artist index document
//! - `GET /api/artists/:id.json` - Artist detail document
//!
//! ## Labels
//! - `GET /api/v1/labels?q=&sort=&order=` - Leaderboard rows with display fields
//!
//! ## Artists
//! - `GET /api/v1/artists?q=` - Search the artist index
//! - `GET /api/v1/artists/:id/summary` - Derived artist statistics
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! `GET /` redirects to `/api/v1/labels`.
//!
//! # Example
//!
//! ```rust,no_run
//! use lofi_stats::api::{serve, ApiConfig, AppState};
//! use lofi_stats::catalog::CatalogStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(CatalogStore::new("./public/api"));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(catalog, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::{HeaderValue, Method},
    response::Redirect,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let document_routes = Router::new()
        .route("/labels.json", get(routes::documents::labels_document))
        .route("/artistIndex.json", get(routes::documents::artist_index_document))
        .route("/artists/:file", get(routes::documents::artist_document));

    let api_routes = Router::new()
        .route("/labels", get(routes::labels::list_labels))
        .route("/artists", get(routes::artists::search))
        .route("/artists/:id/summary", get(routes::artists::summary));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/api/v1/labels") }))
        .nest("/api", document_routes)
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive unless origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let source = state.catalog.describe();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(source = %source, "Lofi Stats API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Lofi Stats API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
