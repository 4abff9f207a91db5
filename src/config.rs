/// Runtime configuration
///
/// The configuration is assembled once in `main` and handed to the
/// generation client at construction. Nothing below `main` reads the
/// process environment.

use std::env;

/// Model used when `MORPHEUM_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Public endpoint of the generation service
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Everything the generation client needs to talk to the service
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API credential. `None` means generation must fail before any request.
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    pub model: String,
    /// Scheme + host of the service, without a trailing slash
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from the environment
    ///
    /// A `.env` file in the working directory is honoured if present.
    /// - `GEMINI_API_KEY` (or `API_KEY`) - the credential
    /// - `MORPHEUM_MODEL` - overrides the model identifier
    /// - `MORPHEUM_API_BASE` - overrides the service endpoint
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::info!("📄 Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => tracing::warn!("⚠️  Ignoring unreadable .env file: {}", err),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = non_blank(lookup("GEMINI_API_KEY")).or_else(|| non_blank(lookup("API_KEY")));

        let model = non_blank(lookup("MORPHEUM_MODEL")).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base_url = non_blank(lookup("MORPHEUM_API_BASE"))
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_key,
            model,
            api_base_url,
        }
    }

    /// Whether a credential is available
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
