/// Generation service integration
///
/// This module handles:
/// - The request/response wire format (wire.rs)
/// - The outbound HTTP call (transport.rs)
/// - Response validation and image extraction (client.rs)
/// - Data URIs for generated images (data_uri.rs)
/// - The error taxonomy (error.rs)

pub mod client;
pub mod data_uri;
pub mod error;
pub mod transport;
pub mod wire;

pub use client::GeminiClient;
pub use data_uri::DataUri;
pub use error::GenerationError;
