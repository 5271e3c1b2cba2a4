//! Shared types for the activity board.
//!
//! This crate defines the data structures exchanged with the activities
//! API and consumed by the board controller and its front ends.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activity fields as sent by `GET /activities`, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    /// Free-form description
    pub description: String,
    /// Human readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: i64,
    /// Enrolled participant emails, in enrollment order
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A named activity with its enrolled participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Human readable schedule
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: i64,
    /// Enrolled participant emails
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity from a catalog entry.
    pub fn from_entry(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Remaining capacity.
    ///
    /// Negative when the server reports more participants than
    /// `max_participants`; the value is never clamped.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    /// Whether the server reports more participants than the capacity.
    pub fn is_over_capacity(&self) -> bool {
        self.spots_left() < 0
    }
}

/// The full `GET /activities` response.
///
/// Entries keep the order in which the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCatalog(IndexMap<String, ActivityDetails>);

impl ActivityCatalog {
    /// Number of activities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no activities.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an activity by name.
    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.0.get(name)
    }

    /// Iterate over `(name, details)` pairs in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityDetails)> {
        self.0.iter().map(|(name, details)| (name.as_str(), details))
    }

    /// Convert into activities, preserving server order.
    pub fn into_activities(self) -> Vec<Activity> {
        self.0
            .into_iter()
            .map(|(name, details)| Activity::from_entry(name, details))
            .collect()
    }
}

impl FromIterator<(String, ActivityDetails)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (String, ActivityDetails)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Success body of the signup and unregister endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation text, e.g. "Signed up a@b.com for Chess Club"
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with a non-2xx status.
///
/// `detail` is usually a string, but framework validation failures send a
/// list of objects instead, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The detail text, when the server sent a non-empty string.
    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}
