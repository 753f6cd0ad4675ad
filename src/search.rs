//! Search filtering
//!
//! Both the label table and the artist picker filter by the same loose
//! substring match: case and punctuation are ignored, so "lofigirl" finds
//! "Lofi Girl".

use regex::Regex;
use std::sync::OnceLock;

use crate::catalog::{ArtistIndex, ArtistIndexEntry, Label};

/// Artist search only starts once the query has this many characters
pub const MIN_ARTIST_QUERY_CHARS: usize = 3;

fn ignored_chars() -> &'static Regex {
    static IGNORED: OnceLock<Regex> = OnceLock::new();
    IGNORED.get_or_init(|| {
        Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()\s]").expect("ignored character class is valid")
    })
}

/// Lowercase and strip punctuation and whitespace
pub fn normalize(s: &str) -> String {
    ignored_chars().replace_all(&s.to_lowercase(), "").into_owned()
}

/// Whether `query` occurs in `text` once both are normalized.
///
/// An empty query matches everything.
pub fn text_matches_query(text: &str, query: &str) -> bool {
    normalize(text).contains(&normalize(query))
}

/// Artists whose name matches `query`, in index order.
///
/// Queries shorter than [`MIN_ARTIST_QUERY_CHARS`] return nothing.
pub fn search_artists<'a>(index: &'a ArtistIndex, query: &str) -> Vec<&'a ArtistIndexEntry> {
    if query.chars().count() < MIN_ARTIST_QUERY_CHARS {
        return Vec::new();
    }

    let needle = normalize(query);
    index
        .artists
        .iter()
        .filter(|artist| normalize(&artist.name).contains(&needle))
        .collect()
}

/// Labels whose name matches `query`, in input order, each paired with its
/// 1-based position in the unfiltered slice
pub fn filter_ranked_labels<'a>(labels: &'a [Label], query: &str) -> Vec<(usize, &'a Label)> {
    let needle = normalize(query);
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| normalize(&label.name).contains(&needle))
        .map(|(i, label)| (i + 1, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StreamsRange;

    fn entry(name: &str) -> ArtistIndexEntry {
        ArtistIndexEntry {
            name: name.to_string(),
            id: name.to_lowercase().replace(' ', ""),
            image_url_s: None,
        }
    }

    fn label(name: &str) -> Label {
        Label {
            image_url: String::new(),
            name: name.to_string(),
            popularity: 0.0,
            playlist_id: String::new(),
            tracks: 0,
            tracks_in_editorials: 0,
            streams: StreamsRange { min: 0, max: 0 },
        }
    }

    #[test]
    fn test_text_matches_query() {
        assert!(text_matches_query("Lofi Girl", "lofigirl"));
        assert!(text_matches_query("Lofi Girl", "LOFI"));
        assert!(!text_matches_query("Lofi Girl", "xyz"));
        assert!(text_matches_query("anything", ""));
        assert!(text_matches_query("", ""));
    }

    #[test]
    fn test_punctuation_is_ignored_on_both_sides() {
        assert!(text_matches_query("S.O.U.L. (Records)", "soul records"));
        assert!(text_matches_query("dreamy_beats-official", "dreamy beats"));
        assert!(text_matches_query("Chill~Hop", "chill-hop"));
        assert!(text_matches_query("tab\tand\nnewline", "tabandnewline"));
    }

    #[test]
    fn test_other_symbols_still_count() {
        assert!(!text_matches_query("Lofi Girl", "lofi+girl"));
        assert!(text_matches_query("C'est la vie", "c'est"));
    }

    #[test]
    fn test_search_artists_needs_three_characters() {
        let index = ArtistIndex {
            artists: vec![entry("Aso"), entry("Kupla"), entry("Lofi Fruits"), entry("Philanthrope")],
        };

        assert!(search_artists(&index, "").is_empty());
        assert!(search_artists(&index, "as").is_empty());

        let found: Vec<&str> = search_artists(&index, "aso")
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(found, vec!["Aso"]);

        let found: Vec<&str> = search_artists(&index, "lofi-fru")
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(found, vec!["Lofi Fruits"]);
    }

    #[test]
    fn test_filter_ranked_labels_keeps_order_and_rank() {
        let labels = vec![label("Lofi Girl"), label("Chillhop Music"), label("Lofi Records")];

        let found: Vec<(usize, &str)> = filter_ranked_labels(&labels, "lofi")
            .into_iter()
            .map(|(rank, l)| (rank, l.name.as_str()))
            .collect();
        assert_eq!(found, vec![(1, "Lofi Girl"), (3, "Lofi Records")]);

        let ranks: Vec<usize> = filter_ranked_labels(&labels, "")
            .into_iter()
            .map(|(rank, _)| rank)
            .collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        assert!(filter_ranked_labels(&labels, "jazz").is_empty());
    }
}
