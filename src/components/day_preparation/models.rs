use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Summary shown when the planning endpoint cannot be used
pub const FALLBACK_SUMMARY: &str = "Brody is ready to help! (Backend not connected)";

/// A user's day as returned by the planning endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPreparation {
    /// Timestamp string exactly as the server sent it
    pub date: String,
    #[serde(default)]
    pub meetings: Option<Vec<Meeting>>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    pub summary: String,
}

/// Meeting entry; only the title is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub title: String,
}

/// Task entry; only the title is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
}

impl DayPreparation {
    /// Build the locally synthesized payload used when the request fails
    pub fn fallback() -> Self {
        Self {
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            meetings: Some(Vec::new()),
            tasks: Some(Vec::new()),
            summary: FALLBACK_SUMMARY.to_string(),
        }
    }

    /// Meetings in response order; absent and empty look the same
    pub fn meetings(&self) -> &[Meeting] {
        self.meetings.as_deref().unwrap_or_default()
    }

    /// Tasks in response order; absent and empty look the same
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_deref().unwrap_or_default()
    }
}
