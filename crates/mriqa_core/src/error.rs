//! Error types for backend communication.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error from talking to the analysis backend.
///
/// The UI collapses every variant into one generic failure notification;
/// the variant detail only reaches the tracing log.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The selection was empty; no request was issued.
    #[error("No files selected")]
    EmptySelection,

    /// An endpoint answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The processing response body could not be deserialized.
    #[error("Failed to parse {what}: {message}")]
    Parse { what: &'static str, message: String },

    /// Reading a selected file off disk failed.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a downloaded artifact failed.
    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No Downloads directory could be resolved for saving an artifact.
    #[error("Could not locate a Downloads directory")]
    NoDownloadsDir,

    /// Transport-level failure (connect, timeout, TLS, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Create a non-success status error.
    pub fn status(endpoint: &'static str, status: u16) -> Self {
        Self::Status { endpoint, status }
    }

    /// Create a parse error.
    pub fn parse(what: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            what,
            message: message.into(),
        }
    }

    /// Create a file read error.
    pub fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error.
    pub fn write_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }
}

/// Result type for backend operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_context() {
        let err = ClientError::status("/process-folder/", 500);
        let msg = err.to_string();
        assert!(msg.contains("/process-folder/"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn parse_error_displays_detail() {
        let err = ClientError::parse("processing response", "missing field `results`");
        assert!(err.to_string().contains("missing field `results`"));
    }
}
