//! Saving backend artifacts to disk.
//!
//! The desktop equivalent of the original client's download links: fetch
//! the artifact from the backend and drop it into the user's Downloads
//! directory.

use std::path::{Path, PathBuf};

use directories::UserDirs;
use tracing::info;

use crate::client::HttpBackend;
use crate::error::{ClientError, ClientResult};

/// Derive a local filename from a backend artifact path.
///
/// Falls back to `default` when the path has no usable final segment.
pub fn artifact_filename(path: &str, default: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}

/// Fetch `path` from the backend and save it into the Downloads directory.
///
/// Returns the full path of the written file.
pub async fn save_artifact(
    backend: &HttpBackend,
    path: &str,
    default_name: &str,
) -> ClientResult<PathBuf> {
    let bytes = backend.fetch_artifact(path).await?;
    let dir = downloads_dir().ok_or(ClientError::NoDownloadsDir)?;
    let target = write_bytes(&dir, &artifact_filename(path, default_name), &bytes).await?;
    info!(target = %target.display(), "artifact saved");
    Ok(target)
}

fn downloads_dir() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
}

async fn write_bytes(dir: &Path, filename: &str, bytes: &[u8]) -> ClientResult<PathBuf> {
    let target = dir.join(filename);
    tokio::fs::write(&target, bytes)
        .await
        .map_err(|e| ClientError::write_file(&target, e))?;
    Ok(target)
}
