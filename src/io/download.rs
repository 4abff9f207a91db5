/// Saving generated images
///
/// The result is already a self-contained data URI, so a download is just
/// decoding it and writing the bytes to a user-chosen file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use thiserror::Error;

use crate::gemini::data_uri::DataUri;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("The generated image is corrupt: {0}")]
    Decode(String),

    #[error("Could not write {path}: {message}")]
    Write { path: String, message: String },
}

/// `reality-engine-<unix millis>.<ext>`
pub fn default_filename(uri: &DataUri, now: DateTime<Utc>) -> String {
    format!("reality-engine-{}.{}", now.timestamp_millis(), uri.extension())
}

/// Ask where to save the result. `None` if the user cancelled.
pub fn pick_destination(uri: &DataUri) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Save Generated Image")
        .set_file_name(default_filename(uri, Utc::now()));

    if let Some(dir) = dirs::download_dir() {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}

/// Decode the data URI and write it to `path`
pub async fn save_result(uri: DataUri, path: PathBuf) -> Result<PathBuf, DownloadError> {
    let bytes = uri
        .decode()
        .map_err(|e| DownloadError::Decode(e.to_string()))?;

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| DownloadError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::info!("💾 Saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

pub fn alert(err: &DownloadError) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Download")
        .set_description(err.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}
