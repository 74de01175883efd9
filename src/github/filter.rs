use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

use super::types::GitHubPull;

/// Exclusion rules applied to every fetched pull request.
///
/// Each rule is evaluated on its own; a pull request is kept only when no
/// enabled rule excludes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Pull requests younger than this are skipped. Zero disables the rule.
    pub min_age: Duration,
    /// Skip pull requests that already have an assignee.
    pub ignore_assigned: bool,
}

/// Why a pull request was left out of the reminder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooRecent,
    Assigned(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooRecent => write!(f, "younger than minimum age"),
            SkipReason::Assigned(login) => write!(f, "assigned to {}", login),
        }
    }
}

impl FilterPolicy {
    /// Returns the first rule that excludes `pull`, if any.
    pub fn skip_reason(&self, pull: &GitHubPull, now: DateTime<Utc>) -> Option<SkipReason> {
        if self.is_too_recent(pull.created_at, now) {
            return Some(SkipReason::TooRecent);
        }
        let assignee = pull.assignee_login();
        if self.ignore_assigned && !assignee.is_empty() {
            return Some(SkipReason::Assigned(assignee.to_string()));
        }
        None
    }

    pub fn should_ignore(&self, pull: &GitHubPull, now: DateTime<Utc>) -> bool {
        self.skip_reason(pull, now).is_some()
    }

    fn is_too_recent(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        if self.min_age.is_zero() {
            return false;
        }
        match (now - created_at).to_std() {
            Ok(age) => age < self.min_age,
            // Negative age (clock skew): younger than any positive minimum
            Err(_) => true,
        }
    }
}
