//! Catalog document types
//!
//! The data contract for the three static documents the catalog publishes:
//! - `Labels`: the label leaderboard (`labels.json`)
//! - `ArtistIndex`: every tracked artist (`artistIndex.json`)
//! - `Artist`: one artist with a flat list of track credits (`artists/{id}.json`)
//!
//! Field names are camelCase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{CatalogError, CatalogResult};

/// Version of the document contract described by this module.
///
/// Bump when a field is added, removed, or changes meaning.
pub const CONTRACT_VERSION: u32 = 1;

/// Summary of an artist credited on a track or album
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistTrackArtist {
    /// Spotify artist ID
    pub id: String,
    /// Small image URL, if the artist has one
    #[serde(default)]
    pub image_url_s: Option<String>,
    /// Display name
    pub name: String,
}

impl ArtistTrackArtist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url_s: None,
            name: name.into(),
        }
    }
}

/// Playlist attached to a label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BasicLabelPlaylist {
    pub image_url: String,
}

/// Label summary embedded in albums. Labels are identified by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BasicLabel {
    pub name: String,
    pub playlist: BasicLabelPlaylist,
}

impl BasicLabel {
    pub fn new(name: impl Into<String>, playlist_image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            playlist: BasicLabelPlaylist {
                image_url: playlist_image_url.into(),
            },
        }
    }
}

/// Release type as reported by Spotify
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Compilation,
    Single,
}

impl std::fmt::Display for AlbumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlbumType::Album => write!(f, "album"),
            AlbumType::Compilation => write!(f, "compilation"),
            AlbumType::Single => write!(f, "single"),
        }
    }
}

/// Album summary embedded in each track credit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistTrackAlbum {
    /// Album artists, in credit order
    pub artists: Vec<ArtistTrackArtist>,
    /// Spotify album ID
    pub id: String,
    #[serde(default)]
    pub image_url_s: Option<String>,
    pub label: BasicLabel,
    pub name: String,
    /// Release date, `YYYY-MM-DD` on the wire
    pub release_date: NaiveDate,
    #[serde(rename = "type")]
    pub album_type: AlbumType,
}

/// One track credit from an artist's point of view.
///
/// The same recording (ISRC) may appear several times in one artist's list,
/// e.g. once per album it was released on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistTrack {
    pub album: ArtistTrackAlbum,
    /// Credited artists, including the artist the document belongs to
    pub artists: Vec<ArtistTrackArtist>,
    /// Spotify track ID
    pub id: String,
    /// International Standard Recording Code
    pub isrc: String,
    pub name: String,
}

/// Artist detail document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    pub id: String,
    /// Large image URL, if the artist has one
    #[serde(default)]
    pub image_url_l: Option<String>,
    pub tracks: Vec<ArtistTrack>,
}

impl Artist {
    /// Reject documents the aggregations cannot make sense of.
    ///
    /// Release dates are already checked during deserialization.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::Invalid("artist id is empty".to_string()));
        }

        for (index, track) in self.tracks.iter().enumerate() {
            if track.isrc.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "artist {}: track {} ({}) has an empty isrc",
                    self.id, index, track.id
                )));
            }
            if track.album.id.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "artist {}: track {} ({}) has an empty album id",
                    self.id, index, track.id
                )));
            }
        }

        Ok(())
    }
}

/// One entry of the artist index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistIndexEntry {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub image_url_s: Option<String>,
}

/// Artist index document, ordered case-insensitively by name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistIndex {
    pub artists: Vec<ArtistIndexEntry>,
}

/// Estimated monthly streams per track (interquartile range)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamsRange {
    pub max: u64,
    pub min: u64,
}

/// One row of the label leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub image_url: String,
    pub name: String,
    /// Median track popularity (0-100) over the past 6 months
    pub popularity: f64,
    pub playlist_id: String,
    /// Tracks released in the past 6 months
    pub tracks: u32,
    /// Of those, tracks that made it into editorial playlists
    #[serde(default)]
    pub tracks_in_editorials: u32,
    pub streams: StreamsRange,
}

/// Label leaderboard document, ordered by popularity as published
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Labels {
    pub labels: Vec<Label>,
}
