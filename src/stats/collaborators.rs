//! Tracks by collaborator
//!
//! A collaborator is any other artist credited on one of the subject's
//! recordings. Counts are per distinct ISRC.

use serde::Serialize;
use std::collections::HashMap;

use super::dedup::unique_tracks;
use crate::catalog::{ArtistTrack, ArtistTrackArtist};

/// A collaborator and the number of distinct recordings shared with the subject
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollaboratorCount {
    pub artist: ArtistTrackArtist,
    pub count: usize,
}

/// Tally collaborators in first-encountered order.
///
/// The artist record kept for an id is the most recently seen one.
fn tally(tracks: &[ArtistTrack], subject_id: &str) -> Vec<CollaboratorCount> {
    let mut order: Vec<CollaboratorCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for track in unique_tracks(tracks) {
        for collaborator in track.artists.iter().filter(|a| a.id != subject_id) {
            match positions.get(collaborator.id.as_str()).copied() {
                Some(position) => {
                    let entry = &mut order[position];
                    entry.count += 1;
                    entry.artist = collaborator.clone();
                }
                None => {
                    positions.insert(collaborator.id.as_str(), order.len());
                    order.push(CollaboratorCount {
                        artist: collaborator.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    order
}

/// The collaborator sharing the most recordings with `subject_id`.
///
/// On a tie the collaborator encountered *later* in the credit list wins:
/// candidates are scanned in first-encountered order and the leader is
/// replaced whenever a count is greater than or equal to it. This differs
/// from [`top_collaborators`], which breaks ties by name.
pub fn top_collaborator(tracks: &[ArtistTrack], subject_id: &str) -> Option<CollaboratorCount> {
    tally(tracks, subject_id)
        .into_iter()
        .reduce(|leader, candidate| {
            if candidate.count >= leader.count {
                candidate
            } else {
                leader
            }
        })
}

/// All collaborators, by shared recordings descending then name ascending
pub fn top_collaborators(tracks: &[ArtistTrack], subject_id: &str) -> Vec<CollaboratorCount> {
    let mut collaborators = tally(tracks, subject_id);
    collaborators.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.artist.name.cmp(&b.artist.name))
    });
    collaborators
}
