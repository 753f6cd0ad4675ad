//! Tracks by label

use serde::Serialize;
use std::collections::HashMap;

use super::dedup::unique_tracks;
use crate::catalog::{ArtistTrack, BasicLabel};

/// A label and how many distinct recordings the artist released on it
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabelCount {
    pub label: BasicLabel,
    pub count: usize,
}

/// Count distinct ISRCs per album label.
///
/// The label record kept for a name is the one from the last counted track.
/// Sorted by count descending, then label name ascending.
pub fn top_labels(tracks: &[ArtistTrack]) -> Vec<LabelCount> {
    let mut by_name: HashMap<&str, LabelCount> = HashMap::new();

    for track in unique_tracks(tracks) {
        let label = &track.album.label;
        by_name
            .entry(label.name.as_str())
            .and_modify(|entry| {
                entry.count += 1;
                entry.label = label.clone();
            })
            .or_insert_with(|| LabelCount {
                label: label.clone(),
                count: 1,
            });
    }

    let mut labels: Vec<LabelCount> = by_name.into_values().collect();
    labels.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.label.name.cmp(&b.label.name))
    });
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::dedup::distinct_isrc_count;
    use crate::stats::test_support::{credit, KUPLA};

    #[test]
    fn test_counts_distinct_recordings_per_label() {
        let tracks = vec![
            credit("I1", "alb1", "2020-01-01", "Chillhop Music", &[KUPLA]),
            credit("I1", "alb2", "2020-02-01", "Lofi Girl", &[KUPLA]),
            credit("I2", "alb2", "2020-02-01", "Lofi Girl", &[KUPLA]),
            credit("I3", "alb3", "2020-03-01", "Lofi Girl", &[KUPLA]),
        ];

        let labels = top_labels(&tracks);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label.name, "Lofi Girl");
        assert_eq!(labels[0].count, 2);
        assert_eq!(labels[1].label.name, "Chillhop Music");
        assert_eq!(labels[1].count, 1);
    }

    #[test]
    fn test_ties_break_by_case_sensitive_name() {
        let tracks = vec![
            credit("I1", "alb1", "2020-01-01", "b-side", &[KUPLA]),
            credit("I2", "alb2", "2020-01-01", "Bside", &[KUPLA]),
            credit("I3", "alb3", "2020-01-01", "A Label", &[KUPLA]),
        ];

        let names: Vec<String> = top_labels(&tracks)
            .into_iter()
            .map(|l| l.label.name)
            .collect();
        // Uppercase sorts before lowercase
        assert_eq!(names, vec!["A Label", "Bside", "b-side"]);
    }

    #[test]
    fn test_last_counted_label_record_is_kept() {
        let mut first = credit("I1", "alb1", "2020-01-01", "Lofi Girl", &[KUPLA]);
        first.album.label.playlist.image_url = "old".to_string();
        let mut second = credit("I2", "alb2", "2020-01-01", "Lofi Girl", &[KUPLA]);
        second.album.label.playlist.image_url = "new".to_string();
        let mut repeat = credit("I2", "alb3", "2020-01-01", "Lofi Girl", &[KUPLA]);
        repeat.album.label.playlist.image_url = "ignored".to_string();

        let labels = top_labels(&[first, second, repeat]);
        assert_eq!(labels[0].label.playlist.image_url, "new");
    }

    #[test]
    fn test_counts_sum_to_distinct_isrcs() {
        let tracks = vec![
            credit("I1", "alb1", "2020-01-01", "A", &[KUPLA]),
            credit("I2", "alb1", "2020-01-01", "A", &[KUPLA]),
            credit("I2", "alb2", "2020-01-01", "B", &[KUPLA]),
            credit("I3", "alb2", "2020-01-01", "B", &[KUPLA]),
            credit("I4", "alb3", "2020-01-01", "C", &[KUPLA]),
        ];

        let total: usize = top_labels(&tracks).iter().map(|l| l.count).sum();
        assert_eq!(total, distinct_isrc_count(&tracks));
    }

    #[test]
    fn test_no_tracks_no_labels() {
        assert!(top_labels(&[]).is_empty());
    }
}
