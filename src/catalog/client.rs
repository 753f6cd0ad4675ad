//! HTTP catalog client
//!
//! Fetches catalog documents from wherever the static site is hosted.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{CatalogError, CatalogResult};
use super::types::{Artist, ArtistIndex, Labels};
use super::{validate_artist_id, CatalogSource, ARTIST_INDEX_DOCUMENT, LABELS_DOCUMENT};

/// Catalog documents served over HTTP
pub struct CatalogClient {
    client: Client,
    config: ClientConfig,
}

/// Configuration for the catalog client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL the documents live under (e.g., "https://example.com/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8083/api".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl CatalogClient {
    /// Create a new catalog client with the given configuration
    pub fn new(config: ClientConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Absolute URL of a document path
    pub fn document_url(&self, relative: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), relative)
    }

    async fn get_document<T: DeserializeOwned>(&self, relative: &str) -> CatalogResult<T> {
        let url = self.document_url(relative);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(relative.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url = %url, bytes = bytes.len(), "Fetched catalog document");

        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Parse {
            path: url.into(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    fn describe(&self) -> String {
        self.config.base_url.clone()
    }

    async fn labels(&self) -> CatalogResult<Labels> {
        self.get_document(LABELS_DOCUMENT).await
    }

    async fn artist_index(&self) -> CatalogResult<ArtistIndex> {
        self.get_document(ARTIST_INDEX_DOCUMENT).await
    }

    async fn artist(&self, artist_id: &str) -> CatalogResult<Artist> {
        validate_artist_id(artist_id)?;

        let relative = format!("artists/{}.json", urlencoding::encode(artist_id));
        let artist: Artist = self.get_document(&relative).await.map_err(|e| match e {
            CatalogError::NotFound(_) => CatalogError::NotFound(format!("artist {}", artist_id)),
            other => other,
        })?;
        artist.validate()?;

        Ok(artist)
    }
}
