/// Shared data structures for the application state
///
/// These structs represent the images that flow between the uploader,
/// the session controller and the comparison views.

use std::io::Cursor;
use std::sync::Arc;

use iced::widget::image::Handle;

use crate::gemini::data_uri::{DataUri, DataUriError};

/// Pixel size of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Read the size from the image header without decoding pixels
    pub fn probe(bytes: &[u8]) -> Option<Self> {
        let (width, height) = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()?;

        Some(Self { width, height })
    }
}

/// An image accepted by the uploader
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Filename only (e.g., "screenshot.png")
    pub name: String,
    /// Raw file contents, shared with in-flight generation jobs
    pub bytes: Arc<[u8]>,
    /// Detected mime type, always `image/*`
    pub mime_type: String,
    /// Pixel size, when the header could be read
    pub dimensions: Option<Dimensions>,
}

/// An image returned by the generation service
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// The self-contained result reference
    pub data_uri: DataUri,
    /// Displayable handle decoded from the data URI
    pub handle: Handle,
    pub dimensions: Option<Dimensions>,
}

impl GeneratedImage {
    pub fn from_data_uri(data_uri: DataUri) -> Result<Self, DataUriError> {
        let bytes = data_uri.decode()?;
        let dimensions = Dimensions::probe(&bytes);

        Ok(Self {
            data_uri,
            handle: Handle::from_bytes(bytes),
            dimensions,
        })
    }
}
