//! The upload-then-process submission flow.
//!
//! Both network calls are driven as one async operation with a single
//! terminal success path and a single terminal failure path; the UI layer
//! maps the result onto its busy flag and notification state.

use tracing::{error, info};

use crate::client::AnalysisBackend;
use crate::error::{ClientError, ClientResult};
use crate::models::{ProcessOutcome, UploadEntry};

/// Upload the selection, then trigger processing.
///
/// Processing is only attempted after the upload succeeded; an upload
/// failure aborts the sequence without touching the processing endpoint.
/// An empty selection is rejected before any network activity.
pub async fn run_submission<B: AnalysisBackend>(
    backend: &B,
    entries: &[UploadEntry],
) -> ClientResult<ProcessOutcome> {
    if entries.is_empty() {
        return Err(ClientError::EmptySelection);
    }

    info!(count = entries.len(), "starting submission");
    backend.upload_folder(entries).await.inspect_err(|e| {
        error!("upload failed: {e}");
    })?;

    let outcome = backend.process_folder().await.inspect_err(|e| {
        error!("processing failed: {e}");
    })?;

    info!(
        rows = outcome.results.len(),
        message = outcome.message.as_deref().unwrap_or(""),
        "submission complete"
    );
    Ok(outcome)
}
