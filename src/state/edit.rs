/// Edit session state
///
/// An edit session is one upload → prompt → review cycle. The controller
/// owns the session and the display handle registry and is the only place
/// that mutates either. Every transition that drops the original image
/// releases its display handle in the same step.

use std::sync::Arc;

use iced::widget::image::Handle;

use super::data::{GeneratedImage, SourceImage};
use super::handles::{DisplayHandleId, DisplayHandles};
use crate::gemini::{DataUri, GenerationError};

/// The state of one upload-edit-review cycle
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Distinguishes this session from earlier ones
    pub id: u64,
    /// Display handle of the uploaded image
    pub original: DisplayHandleId,
    /// The uploaded file itself
    pub source: SourceImage,
    /// Latest generated image
    pub result: Option<GeneratedImage>,
    /// Instruction that produced `result`
    pub prompt: String,
    /// A generation request is in flight
    pub is_loading: bool,
    /// Message of the last failed generation
    pub error: Option<String>,
}

/// Everything a background generation task needs
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub session_id: u64,
    pub image: Arc<[u8]>,
    pub mime_type: String,
    pub prompt: String,
}

/// Owner of the current session
#[derive(Debug, Default)]
pub struct SessionController {
    session: Option<EditSession>,
    handles: DisplayHandles,
    next_session_id: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Displayable handle of the current original image
    pub fn original_handle(&self) -> Option<&Handle> {
        self.session
            .as_ref()
            .and_then(|session| self.handles.get(session.original))
    }

    #[cfg(test)]
    pub fn handles(&self) -> &DisplayHandles {
        &self.handles
    }

    /// Start a new session for an accepted image
    ///
    /// The previous session, if any, is torn down first.
    pub fn select_image(&mut self, source: SourceImage) {
        self.release_current();

        let original = self.handles.create(&source.bytes);
        let id = self.next_session_id;
        self.next_session_id += 1;

        tracing::info!(
            "📥 Session {} started with {} ({}, {} bytes)",
            id,
            source.name,
            source.mime_type,
            source.bytes.len()
        );

        self.session = Some(EditSession {
            id,
            original,
            source,
            result: None,
            prompt: String::new(),
            is_loading: false,
            error: None,
        });
    }

    /// Swap the image while the editor stays open
    pub fn replace(&mut self, source: SourceImage) {
        self.select_image(source);
    }

    /// Drop the session and return to the empty state
    pub fn reset(&mut self) {
        if self.release_current() {
            tracing::info!(
                "🗑️  Session cleared ({} display handles live)",
                self.handles.live_count()
            );
        }
    }

    /// Mark the session as loading and hand out the job to run
    ///
    /// Returns `None` when there is nothing to do: no session, a blank
    /// prompt, or a generation already in flight.
    pub fn begin_generation(&mut self, prompt: &str) -> Option<GenerationJob> {
        let session = self.session.as_mut()?;

        if prompt.trim().is_empty() || session.is_loading {
            return None;
        }

        session.is_loading = true;
        session.error = None;

        Some(GenerationJob {
            session_id: session.id,
            image: Arc::clone(&session.source.bytes),
            mime_type: session.source.mime_type.clone(),
            prompt: prompt.to_string(),
        })
    }

    /// Apply the outcome of a finished generation
    ///
    /// Failures keep the original (and any earlier result) so the user can
    /// retry. Outcomes for a session that no longer exists are dropped.
    pub fn finish_generation(
        &mut self,
        session_id: u64,
        prompt: String,
        outcome: Result<DataUri, GenerationError>,
    ) {
        let Some(session) = self.session.as_mut().filter(|s| s.id == session_id) else {
            tracing::debug!("Dropping generation outcome for stale session {}", session_id);
            return;
        };

        session.is_loading = false;

        let generated = outcome
            .map_err(|err| err.to_string())
            .and_then(|uri| {
                GeneratedImage::from_data_uri(uri)
                    .map_err(|err| format!("Generated image could not be read: {}", err))
            });

        match generated {
            Ok(image) => {
                session.result = Some(image);
                session.prompt = prompt;
                session.error = None;
            }
            Err(message) => {
                tracing::warn!("⚠️  Generation for session {} failed: {}", session_id, message);
                session.error = Some(message);
            }
        }
    }

    /// Release the current session's handle and clear it
    ///
    /// Results are data URIs and need no release.
    fn release_current(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                self.handles.release(session.original);
                true
            }
            None => false,
        }
    }
}
