//! # Lofi Stats
//!
//! Label and artist statistics for the lofi music scene, computed from a
//! set of static catalog documents.
//!
//! ## Features
//!
//! - **Artist aggregation**: ISRC deduplication, top labels, top collaborators, discography
//! - **Display helpers**: `k`/`M`/`B` abbreviation, stream ranges, Spotify links
//! - **Search**: Loose name matching for labels and artists
//! - **Catalog sources**: Local data directory or remote HTTP host
//! - **REST API**: Axum server for documents and derived views
//!
//! ## Modules
//!
//! - [`catalog`]: Document contract and sources
//! - [`stats`]: Artist aggregations
//! - [`format`]: Display formatting
//! - [`search`]: Search filtering
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lofi_stats::catalog::{CatalogSource, CatalogStore};
//! use lofi_stats::stats::ArtistSummary;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CatalogStore::new("./public/api");
//!     let artist = store.artist("4ZgQDCtRqZlhLswVS6MHN4").await?;
//!
//!     let today = chrono::Utc::now().date_naive();
//!     let summary = ArtistSummary::build(&artist, today);
//!
//!     println!(
//!         "{}: {} tracks, {} in the past year",
//!         summary.name, summary.total_tracks, summary.tracks_in_past_year
//!     );
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod format;
pub mod search;
pub mod stats;
pub mod telemetry;

// Re-export top-level types for convenience
pub use catalog::{
    Artist, ArtistIndex, ArtistTrack, CatalogClient, CatalogError, CatalogResult, CatalogSource,
    CatalogStore, Label, Labels,
};

pub use stats::{
    dedup_by_isrc, discography, top_collaborator, top_collaborators, top_labels, ArtistSummary,
    CollaboratorCount, LabelCount, Release,
};

pub use format::to_kmb;
pub use search::text_matches_query;

pub use api::{build_router, serve, ApiError, AppState};
pub use config::Config;
