//! Filesystem catalog
//!
//! Reads catalog documents from a directory laid out the way the exporter
//! writes them. Nothing is cached: every call reads and parses the file.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::error::{CatalogError, CatalogResult};
use super::types::{Artist, ArtistIndex, Labels};
use super::{artist_document, validate_artist_id, CatalogSource, ARTIST_INDEX_DOCUMENT, LABELS_DOCUMENT};

/// Catalog documents stored under a local directory
#[derive(Debug, Clone)]
pub struct CatalogStore {
    root: PathBuf,
}

impl CatalogStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the documents
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read_document<T: DeserializeOwned>(&self, relative: &str) -> CatalogResult<T> {
        let path = self.root.join(relative);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(relative.to_string()));
            }
            Err(e) => return Err(CatalogError::Io(e)),
        };

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read catalog document");

        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Parse {
            path,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for CatalogStore {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn labels(&self) -> CatalogResult<Labels> {
        self.read_document(LABELS_DOCUMENT).await
    }

    async fn artist_index(&self) -> CatalogResult<ArtistIndex> {
        self.read_document(ARTIST_INDEX_DOCUMENT).await
    }

    async fn artist(&self, artist_id: &str) -> CatalogResult<Artist> {
        validate_artist_id(artist_id)?;

        let artist: Artist = self
            .read_document(&artist_document(artist_id))
            .await
            .map_err(|e| match e {
                CatalogError::NotFound(_) => CatalogError::NotFound(format!("artist {}", artist_id)),
                other => other,
            })?;
        artist.validate()?;

        Ok(artist)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_all_documents() {
        let dir = tempdir().unwrap();
        fixtures::write_catalog(dir.path());
        let store = CatalogStore::new(dir.path());

        let labels = store.labels().await.unwrap();
        assert_eq!(labels.labels.len(), 3);

        let index = store.artist_index().await.unwrap();
        assert_eq!(index.artists.len(), 4);

        let artist = store.artist("kupla").await.unwrap();
        assert_eq!(artist.tracks.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_artist_is_not_found() {
        let dir = tempdir().unwrap();
        fixtures::write_catalog(dir.path());
        let store = CatalogStore::new(dir.path());

        let err = store.artist("nobody").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: artist nobody");
    }

    #[tokio::test]
    async fn test_path_traversal_is_rejected() {
        let dir = tempdir().unwrap();
        fixtures::write_catalog(dir.path());
        let store = CatalogStore::new(dir.path().join("artists"));

        let err = store.artist("../labels").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArtistId(_)));
    }

    #[tokio::test]
    async fn test_malformed_document_is_parse_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("labels.json"), "{not json").unwrap();
        let store = CatalogStore::new(dir.path());

        let err = store.labels().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_invalid_artist_document_is_rejected() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("artists")).unwrap();
        let doc = serde_json::json!({
            "name": "Broken", "id": "broken", "imageUrlL": null,
            "tracks": [fixtures::track("", "alb1", "2020-01-01", "L", &[("broken", "Broken")])]
        });
        std::fs::write(dir.path().join("artists/broken.json"), doc.to_string()).unwrap();
        let store = CatalogStore::new(dir.path());

        let err = store.artist("broken").await.unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_missing_root_reports_not_found() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("does-not-exist"));

        assert!(store.labels().await.unwrap_err().is_not_found());
        assert_eq!(store.describe(), dir.path().join("does-not-exist").display().to_string());
    }
}
