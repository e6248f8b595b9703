//! HTTP client for the analysis backend.
//!
//! The backend exposes two POST endpoints: a multipart folder upload and a
//! bodyless processing trigger. Both are wrapped behind the
//! [`AnalysisBackend`] trait so the submission flow can be exercised in
//! tests without a network.

use std::future::Future;
use std::time::Duration;

use reqwest::multipart;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::models::{ProcessOutcome, UploadEntry};

/// Base address of the analysis backend, fixed per deployment build.
pub const BACKEND_BASE: &str = "http://127.0.0.1:8000";

/// Multipart folder upload endpoint.
pub const UPLOAD_ENDPOINT: &str = "/upload-folder/";

/// Processing trigger endpoint.
pub const PROCESS_ENDPOINT: &str = "/process-folder/";

/// The analysis runs the full DICOM pipeline server-side; allow it the same
/// generous window the original client did.
const PROCESS_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for the startup reachability probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Resolve a backend-relative artifact path against a base address.
///
/// The backend hands out paths like `/roi.png`; resolution is plain
/// concatenation, mirroring the download links of the original client.
pub fn resolve_artifact_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

/// Transport seam for the upload-then-process flow.
pub trait AnalysisBackend {
    /// Upload the selected files as one multipart request.
    fn upload_folder(
        &self,
        entries: &[UploadEntry],
    ) -> impl Future<Output = ClientResult<()>> + Send;

    /// Trigger processing of the previously uploaded batch.
    fn process_folder(&self) -> impl Future<Output = ClientResult<ProcessOutcome>> + Send;
}

/// Real backend reachable over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base: String,
}

impl HttpBackend {
    /// Client against the compiled-in backend address.
    pub fn new() -> Self {
        Self::with_base(BACKEND_BASE)
    }

    /// Client against an explicit base address.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// The base address this client talks to.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Check whether the backend answers at all.
    ///
    /// Used for the startup status line only; any response counts as
    /// reachable, failures are not surfaced beyond the return value.
    pub async fn probe(&self) -> bool {
        self.http
            .get(&self.base)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .is_ok()
    }

    /// Fetch a backend artifact (overlay image, spreadsheet) as raw bytes.
    pub async fn fetch_artifact(&self, path: &str) -> ClientResult<Vec<u8>> {
        let url = resolve_artifact_url(&self.base, path);
        debug!(url, "fetching artifact");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::status("artifact", response.status().as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisBackend for HttpBackend {
    fn upload_folder(
        &self,
        entries: &[UploadEntry],
    ) -> impl Future<Output = ClientResult<()>> + Send {
        async move {
            let mut form = multipart::Form::new();
            for entry in entries {
                let bytes = tokio::fs::read(&entry.path)
                    .await
                    .map_err(|e| ClientError::read_file(&entry.path, e))?;
                let part = multipart::Part::bytes(bytes).file_name(entry.relative_name.clone());
                form = form.part("files", part);
            }

            debug!(count = entries.len(), "uploading folder");
            let response = self
                .http
                .post(resolve_artifact_url(&self.base, UPLOAD_ENDPOINT))
                .multipart(form)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(ClientError::status(
                    UPLOAD_ENDPOINT,
                    response.status().as_u16(),
                ));
            }
            Ok(())
        }
    }

    fn process_folder(&self) -> impl Future<Output = ClientResult<ProcessOutcome>> + Send {
        async move {
            debug!("triggering processing");
            let response = self
                .http
                .post(resolve_artifact_url(&self.base, PROCESS_ENDPOINT))
                .timeout(PROCESS_TIMEOUT)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(ClientError::status(
                    PROCESS_ENDPOINT,
                    response.status().as_u16(),
                ));
            }

            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| ClientError::parse("processing response", e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_url_is_plain_concatenation() {
        assert_eq!(
            resolve_artifact_url("https://x", "/roi.png"),
            "https://x/roi.png"
        );
    }

    #[test]
    fn endpoints_resolve_against_default_base() {
        let backend = HttpBackend::new();
        assert_eq!(
            resolve_artifact_url(backend.base(), UPLOAD_ENDPOINT),
            format!("{}/upload-folder/", BACKEND_BASE)
        );
    }
}
