/// Image uploader
///
/// Reads a picked or dropped file and decides whether it is an image.
/// Only files whose content (or, failing that, extension) identifies an
/// `image/*` type ever reach the session controller.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use thiserror::Error;

use crate::state::data::{Dimensions, SourceImage};

/// Extensions offered in the file picker
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Could not read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Please select a valid image file.")]
    NotAnImage { name: String },
}

/// Show the native picker for a single image file
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select an Image")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
}

/// Read a file from disk and validate it as an image
pub async fn load_image(path: PathBuf) -> Result<SourceImage, UploadError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| UploadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    accept(name, Some(&path), bytes)
}

/// Turn raw file contents into a `SourceImage` if they are an image
pub fn accept(name: String, path: Option<&Path>, bytes: Vec<u8>) -> Result<SourceImage, UploadError> {
    let Some(mime_type) = detect_mime_type(&bytes, path) else {
        tracing::warn!("🚫 Rejected {}: not an image", name);
        return Err(UploadError::NotAnImage { name });
    };

    let dimensions = Dimensions::probe(&bytes);
    if dimensions.is_none() {
        tracing::warn!("⚠️  Could not read the size of {}", name);
    }

    Ok(SourceImage {
        name,
        bytes: bytes.into(),
        mime_type,
        dimensions,
    })
}

/// Sniff the mime type from the content, then from the extension
pub fn detect_mime_type(bytes: &[u8], path: Option<&Path>) -> Option<String> {
    image::guess_format(bytes)
        .ok()
        .or_else(|| path.and_then(|p| ImageFormat::from_path(p).ok()))
        .map(|format| format.to_mime_type().to_string())
        .filter(|mime| mime.starts_with("image/"))
}

/// Tell the user why a file was not loaded
pub fn alert(err: &UploadError) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Upload")
        .set_description(err.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::png_bytes;

    #[test]
    fn test_png_is_accepted() {
        let source = accept("shot.png".into(), None, png_bytes(3, 2)).unwrap();

        assert_eq!(source.mime_type, "image/png");
        assert_eq!(source.dimensions, Some(Dimensions { width: 3, height: 2 }));
        assert_eq!(source.name, "shot.png");
    }

    #[test]
    fn test_content_wins_over_extension() {
        let mime = detect_mime_type(&png_bytes(1, 1), Some(Path::new("photo.jpg")));
        assert_eq!(mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_extension_fallback() {
        let mime = detect_mime_type(b"truncated", Some(Path::new("photo.webp")));
        assert_eq!(mime.as_deref(), Some("image/webp"));
    }

    #[test]
    fn test_non_image_is_rejected() {
        let err = accept("notes.txt".into(), Some(Path::new("notes.txt")), b"hello".to_vec())
            .unwrap_err();

        assert_eq!(err, UploadError::NotAnImage { name: "notes.txt".into() });
        assert_eq!(err.to_string(), "Please select a valid image file.");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let path = std::env::temp_dir().join("morpheum-test-does-not-exist.png");

        let err = load_image(path).await.unwrap_err();

        assert!(matches!(err, UploadError::Read { .. }));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("morpheum-upload-{}.png", std::process::id()));
        std::fs::write(&path, png_bytes(2, 2)).unwrap();

        let source = load_image(path.clone()).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(source.name, path.file_name().unwrap().to_string_lossy());
        assert_eq!(source.mime_type, "image/png");
    }
}
