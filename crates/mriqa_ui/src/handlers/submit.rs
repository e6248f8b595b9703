//! Submission handlers: the upload-then-process flow and backend status.

use iced::widget::image;
use iced::Task;

use mriqa_core::models::ProcessOutcome;
use mriqa_core::submit::run_submission;

use crate::app::{App, Message};

impl App {
    /// Start the upload-then-process sequence.
    pub fn start_submission(&mut self) -> Task<Message> {
        if self.selection.is_empty() {
            self.status_text = "No files selected".to_string();
            self.append_log("[WARNING] Please select a folder with files first");
            return Task::none();
        }
        if self.is_busy {
            return Task::none();
        }

        self.begin_submission();
        self.append_log(&format!("Uploading {} files...", self.selection.len()));

        let backend = self.backend.clone();
        let entries = self.selection.clone();
        Task::perform(
            async move {
                run_submission(&backend, &entries)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::SubmissionComplete,
        )
    }

    /// Handle the terminal message of a submission.
    ///
    /// This runs on every exit path of the async task, so the busy flag is
    /// always cleared, success or failure.
    pub fn handle_submission_complete(
        &mut self,
        result: Result<ProcessOutcome, String>,
    ) -> Task<Message> {
        match result {
            Ok(outcome) => {
                if let Some(message) = &outcome.message {
                    self.append_log(message);
                }
                self.append_log(&format!("Received {} result rows", outcome.results.len()));
                self.apply_outcome(outcome);
                self.fetch_overlay()
            }
            Err(e) => {
                tracing::error!("submission failed: {e}");
                self.fail_submission();
                self.append_log("[ERROR] Processing failed. Please try again.");
                Task::none()
            }
        }
    }

    /// Fetch the overlay image when the outcome carried a path for it.
    fn fetch_overlay(&self) -> Task<Message> {
        let Some(path) = self.image_url.clone() else {
            return Task::none();
        };

        let backend = self.backend.clone();
        Task::perform(
            async move {
                backend
                    .fetch_artifact(&path)
                    .await
                    .map(image::Handle::from_bytes)
                    .map_err(|e| e.to_string())
            },
            Message::OverlayLoaded,
        )
    }

    pub fn handle_overlay_loaded(
        &mut self,
        result: Result<image::Handle, String>,
    ) -> Task<Message> {
        match result {
            Ok(handle) => {
                self.overlay = Some(handle);
            }
            Err(e) => {
                tracing::error!("overlay fetch failed: {e}");
                self.append_log("[ERROR] Could not load the overlay image");
            }
        }
        Task::none()
    }

    /// One-shot reachability probe at startup.
    pub fn probe_backend(&self) -> Task<Message> {
        let backend = self.backend.clone();
        Task::perform(
            async move { backend.probe().await },
            Message::BackendProbed,
        )
    }

    pub fn handle_backend_probed(&mut self, reachable: bool) -> Task<Message> {
        self.backend_reachable = Some(reachable);
        if reachable {
            self.append_log("Backend is reachable");
        } else {
            self.append_log("[WARNING] Backend did not respond; submissions may fail");
        }
        Task::none()
    }
}
