//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{ArtistIndexEntry, StreamsRange};
use crate::stats::{CollaboratorCount, LabelCount, Release};

// ============================================
// LABEL DTOs
// ============================================

/// Label leaderboard query parameters
#[derive(Debug, Default, Deserialize)]
pub struct LabelQueryParams {
    /// Loose name filter
    #[serde(default)]
    pub q: Option<String>,
    /// Column: popularity, tracks, streams, name
    #[serde(default)]
    pub sort: Option<String>,
    /// Direction: asc, desc
    #[serde(default)]
    pub order: Option<String>,
}

/// One leaderboard row, with the display strings the table renders
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRow {
    /// 1-based position after sorting, before filtering
    pub rank: usize,
    pub name: String,
    pub image_url: String,
    pub popularity: f64,
    pub tracks: u32,
    pub tracks_in_editorials: u32,
    /// e.g. "20.0%", absent when the label has no editorial placements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorial_share: Option<String>,
    pub streams: StreamsRange,
    /// e.g. "12k – 250k"
    pub streams_text: String,
    pub playlist_url: String,
}

/// Label leaderboard response
#[derive(Debug, Serialize)]
pub struct LabelListResponse {
    /// Rows matching the filter
    pub labels: Vec<LabelRow>,
    /// Number of rows returned
    pub total: usize,
}

// ============================================
// ARTIST DTOs
// ============================================

/// Artist search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ArtistSearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Artist search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSearchResponse {
    pub query: String,
    /// Queries shorter than this return no artists
    pub min_query_chars: usize,
    pub artists: Vec<ArtistIndexEntry>,
    pub total: usize,
}

/// Collaborator with a link to their Spotify page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorDto {
    #[serde(flatten)]
    pub collaborator: CollaboratorCount,
    pub spotify_url: String,
}

/// Release with its display kind and Spotify link
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDto {
    #[serde(flatten)]
    pub release: Release,
    /// "Album", "Single", "Compilation" or "EP"
    pub kind: String,
    pub spotify_url: String,
}

/// Artist profile response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummaryResponse {
    pub id: String,
    pub name: String,
    pub image_url_l: Option<String>,
    pub spotify_url: String,
    pub total_tracks: usize,
    pub tracks_in_past_year: usize,
    pub first_tracked_release: Option<NaiveDate>,
    pub top_collaborator: Option<CollaboratorDto>,
    pub top_labels: Vec<LabelCount>,
    pub top_collaborators: Vec<CollaboratorDto>,
    pub discography: Vec<ReleaseDto>,
    /// Date the past-year window was computed against
    pub as_of: NaiveDate,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Catalog status: ok, error
    pub catalog: String,
    /// Directory or URL the documents are loaded from
    pub source: String,
    /// Version of the document contract this build reads
    pub contract_version: u32,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
