//! Artist Routes
//!
//! - GET /api/v1/artists?q= - Search the artist index
//! - GET /api/v1/artists/:id/summary - Derived statistics for one artist

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::api::dto::{
    ArtistSearchParams, ArtistSearchResponse, ArtistSummaryResponse, CollaboratorDto, ReleaseDto,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::format::{spotify_album_url, spotify_artist_url};
use crate::search::{search_artists, MIN_ARTIST_QUERY_CHARS};
use crate::stats::{ArtistSummary, CollaboratorCount};

/// GET /api/v1/artists
///
/// Search the artist index by name. Short queries return an empty list
/// rather than an error so the picker can call this on every keystroke.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArtistSearchParams>,
) -> ApiResult<Json<ArtistSearchResponse>> {
    let query = params.q.unwrap_or_default();
    let index = state.catalog.artist_index().await?;

    let artists: Vec<_> = search_artists(&index, &query).into_iter().cloned().collect();

    tracing::debug!(query = %query, matches = artists.len(), "Searched artists");

    Ok(Json(ArtistSearchResponse {
        query,
        min_query_chars: MIN_ARTIST_QUERY_CHARS,
        total: artists.len(),
        artists,
    }))
}

/// GET /api/v1/artists/:id/summary
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<String>,
) -> ApiResult<Json<ArtistSummaryResponse>> {
    let artist = state.catalog.artist(&artist_id).await?;
    let today = Utc::now().date_naive();

    Ok(Json(summary_to_response(
        ArtistSummary::build(&artist, today),
        today,
    )))
}

fn collaborator_to_dto(collaborator: CollaboratorCount) -> CollaboratorDto {
    CollaboratorDto {
        spotify_url: spotify_artist_url(&collaborator.artist.id),
        collaborator,
    }
}

/// Attach display strings and links to a summary
pub fn summary_to_response(summary: ArtistSummary, as_of: NaiveDate) -> ArtistSummaryResponse {
    ArtistSummaryResponse {
        spotify_url: spotify_artist_url(&summary.id),
        id: summary.id,
        name: summary.name,
        image_url_l: summary.image_url_l,
        total_tracks: summary.total_tracks,
        tracks_in_past_year: summary.tracks_in_past_year,
        first_tracked_release: summary.first_tracked_release,
        top_collaborator: summary.top_collaborator.map(collaborator_to_dto),
        top_labels: summary.top_labels,
        top_collaborators: summary
            .top_collaborators
            .into_iter()
            .map(collaborator_to_dto)
            .collect(),
        discography: summary
            .discography
            .into_iter()
            .map(|release| ReleaseDto {
                kind: release.kind(),
                spotify_url: spotify_album_url(&release.album.id),
                release,
            })
            .collect(),
        as_of,
    }
}
