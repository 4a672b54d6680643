//! Error types for ytdata

use thiserror::Error;

/// Main error type for ytdata operations
#[derive(Debug, Error)]
pub enum YtError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("API key not found (set YOUTUBE_API_KEY)")]
    ApiKeyNotFound,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

impl YtError {
    /// Check if the error was raised before any request was sent
    pub fn is_extraction_error(&self) -> bool {
        matches!(self, YtError::InvalidUrl(_))
    }

    /// Check if the error came back from the API itself
    pub fn is_api_error(&self) -> bool {
        matches!(self, YtError::Api { .. })
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            YtError::Api { status, .. } => Some(*status),
            YtError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
