//! Data structures exchanged with the analysis backend.

use std::path::PathBuf;

use serde::Deserialize;

/// One file staged for upload.
///
/// `relative_name` is the path relative to the selected folder and becomes
/// the filename of the multipart part, so the backend can recreate the
/// folder structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEntry {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the selected root, with `/` separators.
    pub relative_name: String,
}

impl UploadEntry {
    pub fn new(path: impl Into<PathBuf>, relative_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            relative_name: relative_name.into(),
        }
    }
}

/// A metric cell as the backend sends it.
///
/// The backend's spreadsheet export pipeline is loose about types: the same
/// column can arrive as a JSON number or as its string form. Both are kept
/// as-is and only interpreted at render time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// The textual form of the value, exactly as it would print.
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Column headers of the metrics table, in display order.
pub const METRIC_COLUMNS: [&str; 7] = ["Mean", "Min", "Max", "Sum", "StDev", "SNR", "PIU"];

/// One row of the processing result table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "Mean", default)]
    pub mean: MetricValue,
    #[serde(rename = "Min", default)]
    pub min: MetricValue,
    #[serde(rename = "Max", default)]
    pub max: MetricValue,
    #[serde(rename = "Sum", default)]
    pub sum: MetricValue,
    #[serde(rename = "StDev", default)]
    pub stdev: MetricValue,
    #[serde(rename = "SNR", default)]
    pub snr: MetricValue,
    #[serde(rename = "PIU", default)]
    pub piu: MetricValue,
}

impl MetricRow {
    /// Metric values in [`METRIC_COLUMNS`] order.
    pub fn values(&self) -> [&MetricValue; 7] {
        [
            &self.mean, &self.min, &self.max, &self.sum, &self.stdev, &self.snr, &self.piu,
        ]
    }
}

/// Successful outcome of a full upload-then-process submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessOutcome {
    /// Human-readable status from the backend, unused beyond logging.
    #[serde(default)]
    pub message: Option<String>,
    /// One row per analyzed slice.
    #[serde(default)]
    pub results: Vec<MetricRow>,
    /// Backend-relative path of the ROI overlay image, when generated.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Backend-relative path of the metrics spreadsheet, when generated.
    #[serde(default)]
    pub excel_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_value_accepts_numbers_and_strings() {
        let row: MetricRow = serde_json::from_str(
            r#"{"Filename":"a.dcm","Mean":1.005,"Min":"0","Max":2,"Sum":10,
                "StDev":0.5,"SNR":"20","PIU":"95.123"}"#,
        )
        .unwrap();

        assert_eq!(row.filename, "a.dcm");
        assert_eq!(row.mean, MetricValue::Number(1.005));
        assert_eq!(row.min, MetricValue::Text("0".to_string()));
        assert_eq!(row.mean.as_text(), "1.005");
    }

    #[test]
    fn outcome_tolerates_missing_optional_fields() {
        let outcome: ProcessOutcome = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(outcome.results.is_empty());
        assert!(outcome.image_url.is_none());
        assert!(outcome.excel_url.is_none());
    }

    #[test]
    fn outcome_reads_artifact_paths() {
        let outcome: ProcessOutcome = serde_json::from_str(
            r#"{"message":"Processing completed.","results":[],
                "image_url":"/roi.png","excel_url":"/output_metrics.xlsx"}"#,
        )
        .unwrap();
        assert_eq!(outcome.image_url.as_deref(), Some("/roi.png"));
        assert_eq!(outcome.excel_url.as_deref(), Some("/output_metrics.xlsx"));
    }
}
