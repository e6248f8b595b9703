//! MRI QA Core - Backend client logic for the MRI QA desktop client
//!
//! This crate contains all non-UI logic: the HTTP client for the analysis
//! backend, the upload-then-process submission flow, folder discovery,
//! metric formatting, and artifact downloads. It can be used by the GUI
//! application or a CLI tool.

pub mod client;
pub mod discovery;
pub mod download;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod submit;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
