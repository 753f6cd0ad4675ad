//! Label Routes
//!
//! - GET /api/v1/labels - Label leaderboard with display fields

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LabelListResponse, LabelQueryParams, LabelRow};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::{sort_labels, Label, LabelSortKey, SortOrder};
use crate::format::{editorial_share, spotify_playlist_url, streams_range_text};
use crate::search::filter_ranked_labels;

/// GET /api/v1/labels
///
/// Without `sort` or `order` the rows keep the published order. Ranks are
/// assigned after sorting and survive the `q` filter.
pub async fn list_labels(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LabelQueryParams>,
) -> ApiResult<Json<LabelListResponse>> {
    let sort = parse_sort(&params)?;

    let mut labels = state.catalog.labels().await?.labels;
    if let Some((key, order)) = sort {
        sort_labels(&mut labels, key, order);
    }

    let query = params.q.as_deref().unwrap_or("");
    let rows: Vec<LabelRow> = filter_ranked_labels(&labels, query)
        .into_iter()
        .map(|(rank, label)| label_to_row(rank, label))
        .collect();

    tracing::debug!(query = %query, rows = rows.len(), "Listed labels");

    Ok(Json(LabelListResponse {
        total: rows.len(),
        labels: rows,
    }))
}

fn parse_sort(params: &LabelQueryParams) -> ApiResult<Option<(LabelSortKey, SortOrder)>> {
    if params.sort.is_none() && params.order.is_none() {
        return Ok(None);
    }

    let key = match &params.sort {
        Some(s) => s.parse().map_err(ApiError::Validation)?,
        None => LabelSortKey::default(),
    };
    let order = match &params.order {
        Some(s) => s.parse().map_err(ApiError::Validation)?,
        None => SortOrder::default(),
    };

    Ok(Some((key, order)))
}

/// Convert a leaderboard entry to its row DTO
pub fn label_to_row(rank: usize, label: &Label) -> LabelRow {
    LabelRow {
        rank,
        name: label.name.clone(),
        image_url: label.image_url.clone(),
        popularity: label.popularity,
        tracks: label.tracks,
        tracks_in_editorials: label.tracks_in_editorials,
        editorial_share: editorial_share(label),
        streams: label.streams,
        streams_text: streams_range_text(&label.streams),
        playlist_url: spotify_playlist_url(&label.playlist_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StreamsRange;

    fn params(sort: Option<&str>, order: Option<&str>) -> LabelQueryParams {
        LabelQueryParams {
            q: None,
            sort: sort.map(String::from),
            order: order.map(String::from),
        }
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort(&params(None, None)).unwrap(), None);
        assert_eq!(
            parse_sort(&params(Some("tracks"), None)).unwrap(),
            Some((LabelSortKey::Tracks, SortOrder::Desc))
        );
        assert_eq!(
            parse_sort(&params(None, Some("asc"))).unwrap(),
            Some((LabelSortKey::Popularity, SortOrder::Asc))
        );
        assert!(matches!(
            parse_sort(&params(Some("vibes"), None)),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_label_to_row() {
        let label = Label {
            image_url: "https://img/x".to_string(),
            name: "Chillhop Music".to_string(),
            popularity: 45.0,
            playlist_id: "pl1".to_string(),
            tracks: 150,
            tracks_in_editorials: 30,
            streams: StreamsRange {
                max: 250_000,
                min: 12_000,
            },
        };

        let row = label_to_row(2, &label);
        assert_eq!(row.rank, 2);
        assert_eq!(row.streams_text, "12k \u{2013} 250k");
        assert_eq!(row.editorial_share.as_deref(), Some("20.0%"));
        assert_eq!(row.playlist_url, "https://open.spotify.com/playlist/pl1");
    }
}
