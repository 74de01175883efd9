use serde::{Deserialize, Serialize};

use super::duration::MinAge;
use crate::github::{FilterPolicy, GitHubSettings, GITHUB_URL};
use crate::hipchat::{HipChatSettings, HIPCHAT_URL};

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// github:
///   token: ghp_xxx
///   repositories: [owner/api, owner/web]
///   filter:
///     minAge: 24h
///     ignoreAssigned: true
/// hipchat:
///   token: xxx
///   room: "1234"
/// ```
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub hipchat: HipChatConfig,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GitHubConfig {
    /// API base URL (default: https://api.github.com)
    pub url: String,
    /// Skip TLS certificate verification
    pub insecure: bool,
    pub token: Option<String>,
    pub repositories: Vec<String>,
    pub filter: FilterConfig,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            url: GITHUB_URL.to_string(),
            insecure: false,
            token: None,
            repositories: Vec::new(),
            filter: FilterConfig::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// "24h", "1h 30m" or integer nanoseconds
    pub min_age: MinAge,
    pub ignore_assigned: bool,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HipChatConfig {
    /// API base URL (default: https://api.hipchat.com/v2)
    pub url: String,
    pub token: Option<String>,
    pub room: String,
}

impl Default for HipChatConfig {
    fn default() -> Self {
        Self {
            url: HIPCHAT_URL.to_string(),
            token: None,
            room: String::new(),
        }
    }
}

impl Config {
    pub fn github_settings(&self) -> GitHubSettings {
        GitHubSettings {
            url: self.github.url.clone(),
            insecure: self.github.insecure,
            token: self.github.token.clone(),
            repositories: self.github.repositories.clone(),
            filter: FilterPolicy {
                min_age: self.github.filter.min_age.0,
                ignore_assigned: self.github.filter.ignore_assigned,
            },
        }
    }

    pub fn hipchat_settings(&self) -> HipChatSettings {
        HipChatSettings {
            url: self.hipchat.url.clone(),
            token: self.hipchat.token.clone(),
            room: self.hipchat.room.clone(),
        }
    }
}
