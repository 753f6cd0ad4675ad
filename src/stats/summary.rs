//! Artist profile summary
//!
//! Everything the artist page shows, computed in one go from the artist
//! document. `today` is passed in so the result only depends on the inputs.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

use super::collaborators::{top_collaborator, top_collaborators, CollaboratorCount};
use super::dedup::distinct_isrc_count;
use super::discography::{discography, Release};
use super::labels::{top_labels, LabelCount};
use crate::catalog::{Artist, ArtistTrack};

/// Derived statistics for one artist
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    pub image_url_l: Option<String>,
    /// Distinct recordings
    pub total_tracks: usize,
    /// Distinct recordings released within the year before `today`
    pub tracks_in_past_year: usize,
    /// Earliest album release date among all credits
    pub first_tracked_release: Option<NaiveDate>,
    pub top_collaborator: Option<CollaboratorCount>,
    pub top_labels: Vec<LabelCount>,
    pub top_collaborators: Vec<CollaboratorCount>,
    pub discography: Vec<Release>,
}

impl ArtistSummary {
    pub fn build(artist: &Artist, today: NaiveDate) -> Self {
        let tracks = artist.tracks.as_slice();

        let summary = Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            image_url_l: artist.image_url_l.clone(),
            total_tracks: distinct_isrc_count(tracks),
            tracks_in_past_year: tracks_released_since(tracks, one_year_before(today)),
            first_tracked_release: first_release_date(tracks),
            top_collaborator: top_collaborator(tracks, &artist.id),
            top_labels: top_labels(tracks),
            top_collaborators: top_collaborators(tracks, &artist.id),
            discography: discography(tracks),
        };

        tracing::debug!(
            artist_id = %artist.id,
            credits = tracks.len(),
            total_tracks = summary.total_tracks,
            releases = summary.discography.len(),
            "Built artist summary"
        );

        summary
    }
}

/// The same calendar day one year earlier. Feb 29 rolls over to Mar 1.
pub fn one_year_before(today: NaiveDate) -> NaiveDate {
    let year = today.year() - 1;
    today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Distinct ISRCs among credits released strictly after `cutoff`
pub fn tracks_released_since(tracks: &[ArtistTrack], cutoff: NaiveDate) -> usize {
    tracks
        .iter()
        .filter(|t| t.album.release_date > cutoff)
        .map(|t| t.isrc.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Earliest release date over all credits
pub fn first_release_date(tracks: &[ArtistTrack]) -> Option<NaiveDate> {
    tracks.iter().map(|t| t.album.release_date).min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::{artist, credit, ASO, KUPLA};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_one_year_before() {
        assert_eq!(one_year_before(date("2024-06-15")), date("2023-06-15"));
        assert_eq!(one_year_before(date("2024-02-29")), date("2023-03-01"));
        assert_eq!(one_year_before(date("2024-03-01")), date("2023-03-01"));
    }

    #[test]
    fn test_leap_day_window_excludes_first_of_march() {
        let subject = artist(
            KUPLA,
            vec![
                credit("I1", "alb1", "2023-02-28", "L", &[KUPLA]),
                credit("I2", "alb2", "2023-03-01", "L", &[KUPLA]),
                credit("I3", "alb3", "2023-03-02", "L", &[KUPLA]),
            ],
        );

        let summary = ArtistSummary::build(&subject, date("2024-02-29"));
        assert_eq!(summary.tracks_in_past_year, 1);
    }

    #[test]
    fn test_tracks_in_past_year_is_distinct_and_exclusive() {
        let tracks = vec![
            credit("I1", "alb1", "2023-06-15", "L", &[KUPLA]),
            credit("I2", "alb2", "2023-06-16", "L", &[KUPLA]),
            credit("I2", "alb3", "2024-01-01", "L", &[KUPLA]),
            credit("I3", "alb3", "2024-01-01", "L", &[KUPLA]),
        ];

        assert_eq!(tracks_released_since(&tracks, date("2023-06-15")), 2);
    }

    #[test]
    fn test_build_summary() {
        let subject = artist(
            KUPLA,
            vec![
                credit("I1", "alb1", "2021-03-15", "Lofi Girl", &[KUPLA, ASO]),
                credit("I1", "alb2", "2023-06-01", "Chillhop Music", &[KUPLA, ASO]),
                credit("I2", "alb2", "2023-06-01", "Chillhop Music", &[KUPLA]),
            ],
        );

        let summary = ArtistSummary::build(&subject, date("2024-01-01"));

        assert_eq!(summary.total_tracks, 2);
        assert_eq!(summary.tracks_in_past_year, 2);
        assert_eq!(summary.first_tracked_release, Some(date("2021-03-15")));
        let top = summary.top_collaborator.as_ref().unwrap();
        assert_eq!((top.artist.id.as_str(), top.count), ("aso", 1));
        assert_eq!(summary.top_labels.len(), 2);
        assert_eq!(summary.top_labels[0].label.name, "Chillhop Music");
        assert_eq!(summary.top_labels[1].label.name, "Lofi Girl");
        assert_eq!(summary.discography.len(), 2);
        assert_eq!(summary.discography[0].album.id, "alb2");
        assert_eq!(summary.discography[0].track_count, 2);
    }

    #[test]
    fn test_empty_artist_summary() {
        let summary = ArtistSummary::build(&artist(KUPLA, vec![]), date("2024-01-01"));

        assert_eq!(summary.total_tracks, 0);
        assert_eq!(summary.tracks_in_past_year, 0);
        assert!(summary.first_tracked_release.is_none());
        assert!(summary.top_collaborator.is_none());
        assert!(summary.top_labels.is_empty());
        assert!(summary.top_collaborators.is_empty());
        assert!(summary.discography.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let summary = ArtistSummary::build(&artist(KUPLA, vec![]), date("2024-01-01"));
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["totalTracks"], 0);
        assert!(value["firstTrackedRelease"].is_null());
        assert!(value["topCollaborators"].as_array().unwrap().is_empty());
    }
}
