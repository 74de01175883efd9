use chrono::{DateTime, Utc};

/// An open pull request found on one of the polled repositories.
///
/// Built fresh on every fetch and handed to the notifier as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub url: String, // HTML URL, unique within a run
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl PullRequest {
    /// Time elapsed between creation and `now`
    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.created_at
    }
}
