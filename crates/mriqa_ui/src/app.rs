//! Application state and message dispatch.
//!
//! State follows the one-field-per-widget pattern: the selected folder and
//! its staged files, the latest result rows, the artifact paths from the
//! last processing run, and the busy flag that gates resubmission.

use std::path::PathBuf;

use iced::widget::image;
use iced::{Element, Task, Theme};

use mriqa_core::client::HttpBackend;
use mriqa_core::models::{MetricRow, ProcessOutcome, UploadEntry};

use crate::pages;

/// Main application state.
pub struct App {
    /// Client against the analysis backend.
    pub backend: HttpBackend,

    // Selection
    pub folder_path: String,
    pub selection: Vec<UploadEntry>,

    // Latest results
    pub results: Vec<MetricRow>,
    pub image_url: Option<String>,
    pub excel_url: Option<String>,
    pub overlay: Option<image::Handle>,

    // Status
    pub is_busy: bool,
    pub status_text: String,
    pub backend_reachable: Option<bool>,
    pub log_text: String,
}

/// All messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Selection
    BrowseFolder,
    FolderSelected(Option<PathBuf>),
    SelectionScanned {
        folder: PathBuf,
        result: Result<Vec<UploadEntry>, String>,
    },

    // Submission
    RunAnalysis,
    SubmissionComplete(Result<ProcessOutcome, String>),
    OverlayLoaded(Result<image::Handle, String>),

    // Artifact downloads
    DownloadMetrics,
    DownloadOverlay,
    DownloadFinished {
        label: &'static str,
        result: Result<PathBuf, String>,
    },

    // Startup
    BackendProbed(bool),
}

impl App {
    pub const TITLE: &'static str = "MRI QA Console";

    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            backend: HttpBackend::new(),
            folder_path: String::new(),
            selection: Vec::new(),
            results: Vec::new(),
            image_url: None,
            excel_url: None,
            overlay: None,
            is_busy: false,
            status_text: "Ready".to_string(),
            backend_reachable: None,
            log_text: String::new(),
        };

        let probe = app.probe_backend();
        (app, probe)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFolder => self.browse_folder(),
            Message::FolderSelected(path) => self.handle_folder_selected(path),
            Message::SelectionScanned { folder, result } => {
                self.handle_selection_scanned(folder, result)
            }

            Message::RunAnalysis => self.start_submission(),
            Message::SubmissionComplete(result) => self.handle_submission_complete(result),
            Message::OverlayLoaded(result) => self.handle_overlay_loaded(result),

            Message::DownloadMetrics => self.download_metrics(),
            Message::DownloadOverlay => self.download_overlay(),
            Message::DownloadFinished { label, result } => {
                self.handle_download_finished(label, result)
            }

            Message::BackendProbed(reachable) => self.handle_backend_probed(reachable),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }

    // === Pure state transitions ===

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && !self.is_busy
    }

    /// Enter the busy state and drop everything from the previous run.
    ///
    /// Clearing happens here, before any network activity, so stale rows
    /// are never visible during the new run.
    pub fn begin_submission(&mut self) {
        self.is_busy = true;
        self.results.clear();
        self.image_url = None;
        self.excel_url = None;
        self.overlay = None;
        self.status_text = "Processing...".to_string();
    }

    /// Leave the busy state with the outcome of a successful run.
    pub fn apply_outcome(&mut self, outcome: ProcessOutcome) {
        self.is_busy = false;
        self.results = outcome.results;
        self.image_url = outcome.image_url;
        self.excel_url = outcome.excel_url;
        self.status_text = "Processing complete".to_string();
    }

    /// Leave the busy state after a failed run.
    pub fn fail_submission(&mut self) {
        self.is_busy = false;
        self.status_text = "Processing failed".to_string();
    }

    /// Add a timestamped line to the log pane.
    pub fn append_log(&mut self, message: &str) {
        use std::fmt::Write;
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        writeln!(&mut self.log_text, "[{}] {}", timestamp, message).ok();
    }
}

#[cfg(test)]
mod tests {
    use mriqa_core::models::MetricValue;

    use super::*;

    fn app() -> App {
        App::new().0
    }

    fn outcome_with_row() -> ProcessOutcome {
        let row: MetricRow = serde_json::from_str(
            r#"{"Filename":"a.dcm","Mean":"1.005","Min":"0","Max":"2",
                "Sum":"10","StDev":"0.5","SNR":"20","PIU":"95.123"}"#,
        )
        .unwrap();
        ProcessOutcome {
            message: None,
            results: vec![row],
            image_url: Some("/roi.png".to_string()),
            excel_url: Some("/output_metrics.xlsx".to_string()),
        }
    }

    #[test]
    fn cannot_submit_empty_selection() {
        let app = app();
        assert!(!app.can_submit());
    }

    #[test]
    fn cannot_submit_while_busy() {
        let mut app = app();
        app.selection = vec![UploadEntry::new("/scans/a.dcm", "a.dcm")];
        assert!(app.can_submit());

        app.begin_submission();
        assert!(!app.can_submit());
    }

    #[test]
    fn begin_submission_clears_previous_run() {
        let mut app = app();
        app.selection = vec![UploadEntry::new("/scans/a.dcm", "a.dcm")];
        app.apply_outcome(outcome_with_row());
        assert!(!app.results.is_empty());

        app.begin_submission();
        assert!(app.is_busy);
        assert!(app.results.is_empty());
        assert!(app.image_url.is_none());
        assert!(app.excel_url.is_none());
        assert!(app.overlay.is_none());
    }

    #[test]
    fn outcome_populates_results_and_clears_busy() {
        let mut app = app();
        app.begin_submission();
        app.apply_outcome(outcome_with_row());

        assert!(!app.is_busy);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].mean, MetricValue::Text("1.005".to_string()));
        assert_eq!(app.image_url.as_deref(), Some("/roi.png"));
    }

    #[test]
    fn failure_clears_busy_and_keeps_results_empty() {
        let mut app = app();
        app.begin_submission();
        app.fail_submission();

        assert!(!app.is_busy);
        assert!(app.results.is_empty());
        assert!(app.image_url.is_none());
    }

    #[test]
    fn log_lines_are_timestamped() {
        let mut app = app();
        app.append_log("[WARNING] Please select a folder first");
        assert!(app.log_text.contains("[WARNING] Please select a folder first"));
        assert!(app.log_text.starts_with('['));
    }
}
