//! Error types for the plant data crate.

use thiserror::Error;

/// Result type alias for plant data operations.
pub type Result<T> = std::result::Result<T, PlantDataError>;

/// Errors that can occur while talking to the species API.
#[derive(Debug, Error)]
pub enum PlantDataError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A paginated fetch failed; carries the page that failed so callers
    /// can report exactly where the run stopped.
    #[error("fetch failed on page {page}: {message}")]
    Fetch { page: u32, message: String },

    /// Invalid request (page zero, missing key, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PlantDataError {
    /// Create a fetch error for a specific page.
    pub fn fetch(page: u32, message: impl Into<String>) -> Self {
        Self::Fetch {
            page,
            message: message.into(),
        }
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Page number if this is a fetch error.
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Fetch { page, .. } => Some(*page),
            _ => None,
        }
    }
}
