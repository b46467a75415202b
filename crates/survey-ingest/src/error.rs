//! Error types for payload ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading study payloads.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Payload file or directory does not exist.
    #[error("payload not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a payload file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list a payload directory.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not valid studies JSON.
    #[error("failed to parse studies payload from {origin}: {source}")]
    Parse {
        /// File path, or `<input>` for in-memory payloads.
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// No study with the requested id.
    #[error("study not found: {id}")]
    StudyNotFound { id: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/studies.json"),
        };
        assert_eq!(err.to_string(), "payload not found: /data/studies.json");

        let err = IngestError::StudyNotFound { id: "abc".into() };
        assert_eq!(err.to_string(), "study not found: abc");
    }
}
