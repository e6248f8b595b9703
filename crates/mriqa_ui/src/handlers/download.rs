//! Artifact download handlers.

use std::path::PathBuf;

use iced::Task;

use mriqa_core::download::save_artifact;

use crate::app::{App, Message};

impl App {
    /// Save the metrics spreadsheet into the Downloads directory.
    pub fn download_metrics(&mut self) -> Task<Message> {
        let Some(path) = self.excel_url.clone() else {
            return Task::none();
        };
        self.append_log("Downloading metrics spreadsheet...");
        self.artifact_download(path, "output_metrics.xlsx", "metrics spreadsheet")
    }

    /// Save the overlay image into the Downloads directory.
    pub fn download_overlay(&mut self) -> Task<Message> {
        let Some(path) = self.image_url.clone() else {
            return Task::none();
        };
        self.append_log("Downloading overlay image...");
        self.artifact_download(path, "roi_overlay.png", "overlay image")
    }

    fn artifact_download(
        &self,
        path: String,
        default_name: &'static str,
        label: &'static str,
    ) -> Task<Message> {
        let backend = self.backend.clone();
        Task::perform(
            async move {
                save_artifact(&backend, &path, default_name)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::DownloadFinished { label, result },
        )
    }

    pub fn handle_download_finished(
        &mut self,
        label: &'static str,
        result: Result<PathBuf, String>,
    ) -> Task<Message> {
        match result {
            Ok(target) => {
                self.append_log(&format!("Saved {} to {}", label, target.display()));
            }
            Err(e) => {
                tracing::error!("download failed: {e}");
                self.append_log(&format!("[ERROR] Could not download the {}", label));
            }
        }
        Task::none()
    }
}
