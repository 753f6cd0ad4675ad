//! Document Routes
//!
//! Serves the static catalog documents the web client reads, after they
//! have been parsed and validated.
//!
//! - GET /api/labels.json
//! - GET /api/artistIndex.json
//! - GET /api/artists/:file - `<artist id>.json`

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::{Artist, ArtistIndex, Labels};

/// GET /api/labels.json
pub async fn labels_document(State(state): State<Arc<AppState>>) -> ApiResult<Json<Labels>> {
    Ok(Json(state.catalog.labels().await?))
}

/// GET /api/artistIndex.json
pub async fn artist_index_document(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ArtistIndex>> {
    Ok(Json(state.catalog.artist_index().await?))
}

/// GET /api/artists/:file
pub async fn artist_document(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
) -> ApiResult<Json<Artist>> {
    let artist_id = file
        .strip_suffix(".json")
        .ok_or_else(|| ApiError::NotFound(format!("Document artists/{} not found", file)))?;

    Ok(Json(state.catalog.artist(artist_id).await?))
}
