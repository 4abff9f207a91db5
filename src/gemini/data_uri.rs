/// Base64 `data:` URIs
///
/// Generated images travel through the application as self-contained data
/// URIs, so nothing has to be released when a result is dropped.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;
use thiserror::Error;

/// Mime type assumed when the service does not declare one
pub const FALLBACK_MIME_TYPE: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUriError {
    #[error("invalid base64 payload: {0}")]
    Payload(String),
}

/// `data:<mime>;base64,<payload>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime_type: String,
    payload: String,
}

impl DataUri {
    /// Wrap an already base64-encoded payload. An empty mime type becomes
    /// `image/png`.
    pub fn from_base64(mime_type: Option<&str>, payload: impl Into<String>) -> Self {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MIME_TYPE);

        Self {
            mime_type: mime_type.to_string(),
            payload: payload.into(),
        }
    }

    /// Encode raw bytes
    #[cfg(test)]
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self::from_base64(Some(mime_type), BASE64.encode(bytes))
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Decode the payload back into bytes
    pub fn decode(&self) -> Result<Vec<u8>, DataUriError> {
        BASE64
            .decode(self.payload.as_bytes())
            .map_err(|e| DataUriError::Payload(e.to_string()))
    }

    /// File extension matching the mime type, `png` when unknown
    pub fn extension(&self) -> &'static str {
        image::ImageFormat::from_mime_type(&self.mime_type)
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or("png")
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let uri = DataUri::from_base64(Some("image/png"), "AAAA");
        assert_eq!(uri.to_string(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_missing_mime_falls_back_to_png() {
        assert_eq!(DataUri::from_base64(None, "AAAA").mime_type(), "image/png");
        assert_eq!(DataUri::from_base64(Some(""), "AAAA").mime_type(), "image/png");
    }

    #[test]
    fn test_bytes_round_trip() {
        let uri = DataUri::from_bytes("image/jpeg", &[1, 2, 3]);

        assert_eq!(uri.to_string(), "data:image/jpeg;base64,AQID");
        assert_eq!(uri.decode().unwrap(), vec![1, 2, 3]);
        assert_eq!(uri.extension(), "jpg");
    }

    #[test]
    fn test_bad_payload() {
        let uri = DataUri::from_base64(Some("image/png"), "not base64!");
        assert!(matches!(uri.decode(), Err(DataUriError::Payload(_))));
    }

    #[test]
    fn test_unknown_mime_extension() {
        assert_eq!(DataUri::from_base64(Some("image/x-unknown"), "").extension(), "png");
    }
}
