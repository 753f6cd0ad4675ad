//! Label leaderboard ordering
//!
//! The published leaderboard is already ordered by popularity. These helpers
//! re-order a copy for the other sortable columns. All sorts are stable.

use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;

use super::types::Label;

/// Column to sort the label leaderboard by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSortKey {
    /// Median popularity
    #[default]
    Popularity,
    /// Tracks released in the past 6 months
    Tracks,
    /// Estimated streams, by upper bound then lower bound
    Streams,
    /// Label name
    Name,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for LabelSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popularity" => Ok(LabelSortKey::Popularity),
            "tracks" => Ok(LabelSortKey::Tracks),
            "streams" => Ok(LabelSortKey::Streams),
            "name" => Ok(LabelSortKey::Name),
            _ => Err(format!(
                "Invalid sort key: {}. Use popularity, tracks, streams, or name",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {}. Use asc or desc", s)),
        }
    }
}

fn compare(a: &Label, b: &Label, key: LabelSortKey) -> Ordering {
    match key {
        LabelSortKey::Popularity => a.popularity.total_cmp(&b.popularity),
        LabelSortKey::Tracks => a.tracks.cmp(&b.tracks),
        LabelSortKey::Streams => a
            .streams
            .max
            .cmp(&b.streams.max)
            .then(a.streams.min.cmp(&b.streams.min)),
        LabelSortKey::Name => a.name.cmp(&b.name),
    }
}

/// Sort labels in place by `key` in `order`
pub fn sort_labels(labels: &mut [Label], key: LabelSortKey, order: SortOrder) {
    labels.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
