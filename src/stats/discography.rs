//! Discography
//!
//! One entry per album the artist is credited on. Unlike the other views,
//! track counts here are not deduplicated by ISRC: a recording released on
//! two albums belongs to both.

use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::{AlbumType, ArtistTrack, ArtistTrackAlbum};
use crate::format::title_case;

/// An album with the number of the artist's credits on it
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[serde(flatten)]
    pub album: ArtistTrackAlbum,
    pub track_count: usize,
}

impl Release {
    /// Display kind: singles with more than two tracks are EPs
    pub fn kind(&self) -> String {
        if self.album.album_type == AlbumType::Single && self.track_count > 2 {
            "EP".to_string()
        } else {
            title_case(&self.album.album_type.to_string())
        }
    }
}

/// Group credits by album id.
///
/// The album metadata comes from the first credit seen for each album.
/// Sorted by release date, newest first; releases sharing a date end up in
/// reverse order of first appearance.
pub fn discography(tracks: &[ArtistTrack]) -> Vec<Release> {
    let mut releases: Vec<Release> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for track in tracks {
        match positions.get(track.album.id.as_str()).copied() {
            Some(position) => releases[position].track_count += 1,
            None => {
                positions.insert(track.album.id.as_str(), releases.len());
                releases.push(Release {
                    album: track.album.clone(),
                    track_count: 1,
                });
            }
        }
    }

    releases.reverse();
    releases.sort_by(|a, b| b.album.release_date.cmp(&a.album.release_date));
    releases
}
