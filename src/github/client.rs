use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::header::{ACCEPT, AUTHORIZATION};
use http::StatusCode;
use tracing::{debug, info};

use super::filter::FilterPolicy;
use super::types::GitHubPull;
use crate::error::RemindError;
use crate::pull_request::PullRequest;
use crate::remind::PullRequestSource;

/// Default GitHub API endpoint
pub const GITHUB_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "git-remind";

/// Everything needed to poll a set of GitHub repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubSettings {
    pub url: String,
    /// Skip TLS certificate verification (self-hosted / test endpoints)
    pub insecure: bool,
    pub token: Option<String>,
    /// Repositories in "owner/repo" form, polled in this order
    pub repositories: Vec<String>,
    pub filter: FilterPolicy,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            url: GITHUB_URL.to_string(),
            insecure: false,
            token: None,
            repositories: Vec::new(),
            filter: FilterPolicy::default(),
        }
    }
}

/// Lists open pull requests of the configured repositories.
#[derive(Debug, Clone)]
pub struct GitHubRepository {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    repositories: Vec<String>,
    filter: FilterPolicy,
}

impl GitHubRepository {
    /// Validate settings and build the HTTP client.
    ///
    /// # Errors
    /// Returns `RemindError::Configuration` for an empty repository name or
    /// when the HTTP client cannot be built.
    pub fn new(settings: GitHubSettings) -> Result<Self, RemindError> {
        let repositories: Vec<String> = settings
            .repositories
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        if let Some(i) = repositories.iter().position(|n| n.is_empty()) {
            return Err(RemindError::Configuration(format!(
                "github.repositories[{}]: empty repository name",
                i
            )));
        }

        crate::tls::install_crypto_provider();
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(settings.insecure)
            .build()
            .map_err(|e| {
                RemindError::Configuration(format!("failed to build GitHub HTTP client: {}", e))
            })?;

        let url = if settings.url.is_empty() {
            GITHUB_URL
        } else {
            settings.url.as_str()
        };

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            token: settings.token.filter(|t| !t.is_empty()),
            repositories,
            filter: settings.filter,
        })
    }

    /// Fetch the pull requests of every repository, in configuration order.
    ///
    /// Stops at the first repository that fails; nothing fetched so far is
    /// returned in that case.
    pub async fn pull_requests(&self) -> Result<Vec<PullRequest>, RemindError> {
        let now = Utc::now();
        let mut pulls = Vec::new();
        for name in &self.repositories {
            pulls.extend(self.repository_pull_requests(name, now).await?);
        }
        info!(count = pulls.len(), "collected pull requests");
        Ok(pulls)
    }

    fn pulls_url(&self, name: &str) -> String {
        format!("{}/repos/{}/pulls", self.base_url, name)
    }

    async fn repository_pull_requests(
        &self,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<PullRequest>, RemindError> {
        let url = self.pulls_url(name);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        info!(%url, "getting pull requests");
        let response = request
            .send()
            .await
            .map_err(|e| RemindError::network(&url, &e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RemindError::unexpected_status(&url, "github", status));
        }

        // Body read failures are transport errors; only parsing is a protocol error
        let body = response
            .bytes()
            .await
            .map_err(|e| RemindError::network(&url, &e))?;
        let pulls: Vec<GitHubPull> =
            serde_json::from_slice(&body).map_err(|e| RemindError::undecodable(&url, &e))?;

        let mut kept = Vec::with_capacity(pulls.len());
        for pull in pulls {
            if pull.html_url.is_empty() {
                return Err(RemindError::RemoteProtocol {
                    url,
                    message: "pull request without html_url".to_string(),
                });
            }
            if let Some(reason) = self.filter.skip_reason(&pull, now) {
                debug!(url = %pull.html_url, %reason, "skipped pull request");
                continue;
            }
            kept.push(PullRequest::from(pull));
        }
        Ok(kept)
    }
}

#[async_trait]
impl PullRequestSource for GitHubRepository {
    async fn fetch(&self) -> Result<Vec<PullRequest>, RemindError> {
        self.pull_requests().await
    }
}
