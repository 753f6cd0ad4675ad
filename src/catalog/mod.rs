//! Lofi catalog documents
//!
//! This module provides the static documents everything else is computed from:
//!
//! - **types**: The document contract (Labels, ArtistIndex, Artist, ...)
//! - **store**: Documents read from a local data directory
//! - **client**: The same documents fetched over HTTP
//! - **sort**: Label leaderboard ordering
//! - **error**: Error types
//!
//! # Layout
//!
//! ```text
//! <root>/labels.json
//! <root>/artistIndex.json
//! <root>/artists/<artist id>.json
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use lofi_stats::catalog::{CatalogSource, CatalogStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CatalogStore::new("./public/api");
//!
//!     let labels = store.labels().await?;
//!     let artist = store.artist("4ZgQDCtRqZlhLswVS6MHN4").await?;
//!
//!     println!("{} labels, {} credits", labels.labels.len(), artist.tracks.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod sort;
pub mod store;
pub mod types;

pub use client::{CatalogClient, ClientConfig};
pub use error::{CatalogError, CatalogResult};
pub use sort::{sort_labels, LabelSortKey, SortOrder};
pub use store::CatalogStore;
pub use types::{
    AlbumType, Artist, ArtistIndex, ArtistIndexEntry, ArtistTrack, ArtistTrackAlbum,
    ArtistTrackArtist, BasicLabel, BasicLabelPlaylist, Label, Labels, StreamsRange,
    CONTRACT_VERSION,
};

use async_trait::async_trait;

/// Relative path of the label leaderboard document
pub const LABELS_DOCUMENT: &str = "labels.json";

/// Relative path of the artist index document
pub const ARTIST_INDEX_DOCUMENT: &str = "artistIndex.json";

/// Relative path of an artist detail document
pub fn artist_document(artist_id: &str) -> String {
    format!("artists/{}.json", artist_id)
}

/// Common trait for everything that can hand out catalog documents
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location of the documents (directory or URL)
    fn describe(&self) -> String;

    /// Label leaderboard
    async fn labels(&self) -> CatalogResult<Labels>;

    /// Index of all tracked artists
    async fn artist_index(&self) -> CatalogResult<ArtistIndex>;

    /// One artist's detail document, validated
    async fn artist(&self, artist_id: &str) -> CatalogResult<Artist>;
}

/// Check an artist id before it is turned into a path or URL.
///
/// Spotify ids are base62; `-` and `_` are tolerated for hand-made fixtures.
pub fn validate_artist_id(artist_id: &str) -> CatalogResult<()> {
    if artist_id.is_empty() {
        return Err(CatalogError::InvalidArtistId("empty".to_string()));
    }

    if artist_id.len() > 64 {
        return Err(CatalogError::InvalidArtistId(format!(
            "exceeds 64 characters: {}",
            artist_id
        )));
    }

    if !artist_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CatalogError::InvalidArtistId(format!(
            "must be alphanumeric: {}",
            artist_id
        )));
    }

    Ok(())
}
