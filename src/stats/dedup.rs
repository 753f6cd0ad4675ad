//! ISRC deduplication
//!
//! An artist's credit list repeats a recording once per release it appears
//! on. Every count except the discography's collapses those repeats first.

use std::collections::HashSet;

use crate::catalog::ArtistTrack;

/// Iterator over the first credit of each distinct ISRC, in input order
pub struct UniqueTracks<'a> {
    tracks: std::slice::Iter<'a, ArtistTrack>,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for UniqueTracks<'a> {
    type Item = &'a ArtistTrack;

    fn next(&mut self) -> Option<Self::Item> {
        self.tracks
            .by_ref()
            .find(|&track| self.seen.insert(track.isrc.as_str()))
    }
}

/// Iterate over `tracks` skipping every credit whose ISRC was already seen
pub fn unique_tracks(tracks: &[ArtistTrack]) -> UniqueTracks<'_> {
    UniqueTracks {
        tracks: tracks.iter(),
        seen: HashSet::with_capacity(tracks.len()),
    }
}

/// Keep only the first occurrence of each ISRC, preserving order
pub fn dedup_by_isrc(tracks: &[ArtistTrack]) -> Vec<ArtistTrack> {
    unique_tracks(tracks).cloned().collect()
}

/// Number of distinct ISRCs in `tracks`
pub fn distinct_isrc_count(tracks: &[ArtistTrack]) -> usize {
    unique_tracks(tracks).count()
}
