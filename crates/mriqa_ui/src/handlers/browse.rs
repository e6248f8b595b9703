//! Folder selection handlers.

use std::path::PathBuf;

use iced::Task;

use mriqa_core::discovery;
use mriqa_core::models::UploadEntry;

use crate::app::{App, Message};

impl App {
    /// Open the folder picker.
    pub fn browse_folder(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Select DICOM Folder")
                    .pick_folder()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::FolderSelected,
        )
    }

    /// Scan the picked folder off the UI thread.
    pub fn handle_folder_selected(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(folder) = path else {
            return Task::none();
        };

        Task::perform(
            async move {
                let result = discovery::scan_folder(&folder).map_err(|e| e.to_string());
                (folder, result)
            },
            |(folder, result)| Message::SelectionScanned { folder, result },
        )
    }

    /// Replace the held selection with the scan result.
    pub fn handle_selection_scanned(
        &mut self,
        folder: PathBuf,
        result: Result<Vec<UploadEntry>, String>,
    ) -> Task<Message> {
        match result {
            Ok(entries) => {
                self.folder_path = folder.display().to_string();
                self.append_log(&format!(
                    "Selected {} ({} files)",
                    folder.display(),
                    entries.len()
                ));
                self.selection = entries;
            }
            Err(e) => {
                tracing::error!("folder scan failed: {e}");
                self.append_log("[ERROR] Could not read the selected folder");
            }
        }
        Task::none()
    }
}
