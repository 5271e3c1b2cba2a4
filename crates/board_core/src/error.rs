//! Error types for board operations.

use thiserror::Error;

/// Text shown when the server rejects a request without a usable detail.
pub const GENERIC_APPLICATION_ERROR: &str = "An error occurred";

/// Errors from talking to the activities API.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("HTTP request failed: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Parse(String),

    #[error("server responded with status {status}: {}", detail.as_deref().unwrap_or(GENERIC_APPLICATION_ERROR))]
    Application { status: u16, detail: Option<String> },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// The two failure families the board distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response.
    NetworkOrParse,
    /// The server answered with a non-2xx status.
    Application,
}

impl BoardError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Application { .. } => ErrorKind::Application,
            Self::Network(_) | Self::Parse(_) | Self::InvalidBaseUrl(_) => ErrorKind::NetworkOrParse,
        }
    }

    /// Text to show the user for this error.
    ///
    /// Application errors surface the server's detail verbatim; everything
    /// else falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Application { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| GENERIC_APPLICATION_ERROR.to_string()),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(any(feature = "http-client", test))]
impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
