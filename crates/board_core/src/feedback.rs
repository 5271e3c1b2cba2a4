//! Transient feedback messages.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FEEDBACK_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one shown message so its hide timer cannot hide a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackId(u64);

impl FeedbackId {
    fn next() -> Self {
        Self(NEXT_FEEDBACK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Whether the message reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// CSS class of the message element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message shown after a signup or unregister attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub id: FeedbackId,
    pub text: String,
    pub kind: FeedbackKind,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackKind::Error)
    }

    fn new(text: impl Into<String>, kind: FeedbackKind) -> Self {
        Self {
            id: FeedbackId::next(),
            text: text.into(),
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }
}
