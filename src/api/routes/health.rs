//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (catalog documents are reachable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::catalog::CONTRACT_VERSION;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 once the label leaderboard can be loaded.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_catalog_health(&state).await {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let catalog_ok = check_catalog_health(&state).await;

    Json(HealthResponse {
        status: if catalog_ok { "healthy" } else { "unhealthy" }.to_string(),
        catalog: if catalog_ok { "ok" } else { "error" }.to_string(),
        source: state.catalog.describe(),
        contract_version: CONTRACT_VERSION,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn check_catalog_health(state: &AppState) -> bool {
    match state.catalog.labels().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(source = %state.catalog.describe(), error = %e, "Catalog health check failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
