use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::pull_request::PullRequest;

/// One item of the `GET /repos/{owner}/{repo}/pulls` response
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubPull {
    pub html_url: String,
    pub title: String,
    pub user: GitHubUser,
    #[serde(default)]
    pub assignee: Option<GitHubUser>, // null or absent when unassigned
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

impl GitHubPull {
    /// Login of the assignee, empty when nobody is assigned
    pub fn assignee_login(&self) -> &str {
        self.assignee
            .as_ref()
            .map(|user| user.login.as_str())
            .unwrap_or("")
    }
}

impl From<GitHubPull> for PullRequest {
    fn from(pull: GitHubPull) -> Self {
        PullRequest {
            url: pull.html_url,
            title: pull.title,
            author: pull.user.login,
            created_at: pull.created_at,
        }
    }
}
