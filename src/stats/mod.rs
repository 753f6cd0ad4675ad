//! Artist statistics
//!
//! Pure aggregations over one artist's flat list of track credits:
//!
//! - **dedup**: First credit per ISRC (shared by every count below)
//! - **labels**: Distinct recordings per label
//! - **collaborators**: Distinct recordings shared with each other artist
//! - **discography**: Credits grouped by album (not deduplicated)
//! - **summary**: All of the above plus the profile header numbers
//!
//! None of these can fail; an artist without credits yields empty results.
//!
//! # Example
//!
//! ```rust
//! use lofi_stats::catalog::Artist;
//! use lofi_stats::stats::{top_collaborators, top_labels};
//!
//! let artist = Artist {
//!     name: "Kupla".into(),
//!     id: "kupla".into(),
//!     image_url_l: None,
//!     tracks: vec![],
//! };
//!
//! assert!(top_labels(&artist.tracks).is_empty());
//! assert!(top_collaborators(&artist.tracks, &artist.id).is_empty());
//! ```

pub mod collaborators;
pub mod dedup;
pub mod discography;
pub mod labels;
pub mod summary;

pub use collaborators::{top_collaborator, top_collaborators, CollaboratorCount};
pub use dedup::{dedup_by_isrc, distinct_isrc_count, unique_tracks, UniqueTracks};
pub use discography::{discography, Release};
pub use labels::{top_labels, LabelCount};
pub use summary::{first_release_date, one_year_before, tracks_released_since, ArtistSummary};
