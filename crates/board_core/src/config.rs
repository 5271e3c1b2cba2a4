//! Board configuration.

use std::time::Duration;

/// Default API origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// How long a feedback message stays visible.
pub const DEFAULT_FEEDBACK_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the board controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Origin serving the activities API (default: http://localhost:8000)
    pub base_url: String,
    /// Delay before a feedback message is hidden (default: 5s)
    pub feedback_timeout: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            feedback_timeout: DEFAULT_FEEDBACK_TIMEOUT,
        }
    }
}

impl BoardConfig {
    /// Configuration for the given API origin with default timings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
