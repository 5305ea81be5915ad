//! Credential store error types.

use std::path::PathBuf;

/// Errors that can occur when reading or writing the credential file.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The credential file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The credential file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The credential file is not valid JSON
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Credentials could not be serialized
    #[error("failed to serialize credentials: {0}")]
    Serialize(#[from] serde_json::Error),
}
