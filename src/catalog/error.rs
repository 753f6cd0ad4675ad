//! Catalog error types
//!
//! Defines all errors that can occur while loading catalog documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading catalog documents
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON for its type
    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Document parsed but violates the contract (empty isrc, empty album id)
    #[error("Invalid document: {0}")]
    Invalid(String),

    /// Artist id cannot name a document (empty, too long, path characters)
    #[error("Invalid artist id: {0}")]
    InvalidArtistId(String),

    /// Requested document does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote catalog answered with a non-success status
    #[error("Remote catalog returned {status} for {url}")]
    Status { status: u16, url: String },
}

impl CatalogError {
    /// Whether the error means "this document does not exist"
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NotFound("artist 42".to_string());
        assert_eq!(err.to_string(), "Not found: artist 42");
        assert!(err.is_not_found());

        let err = CatalogError::Status {
            status: 502,
            url: "http://cdn/api/labels.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Remote catalog returned 502 for http://cdn/api/labels.json"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let catalog_err: CatalogError = io_err.into();
        assert!(matches!(catalog_err, CatalogError::Io(_)));
    }
}
