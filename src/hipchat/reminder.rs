use async_trait::async_trait;
use chrono::Utc;
use http::header::AUTHORIZATION;
use http::StatusCode;
use serde::Serialize;
use tracing::{debug, info};

use super::message::format_digest;
use crate::error::RemindError;
use crate::pull_request::PullRequest;
use crate::remind::Notifier;

/// Default HipChat API endpoint
pub const HIPCHAT_URL: &str = "https://api.hipchat.com/v2";

/// Sender label shown in the room
pub const NOTIFICATION_FROM: &str = "GitReminder";

const USER_AGENT: &str = "git-remind";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HipChatSettings {
    pub url: String,
    pub token: Option<String>,
    pub room: String,
}

impl Default for HipChatSettings {
    fn default() -> Self {
        Self {
            url: HIPCHAT_URL.to_string(),
            token: None,
            room: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Notification<'a> {
    from: &'a str,
    message: &'a str,
}

/// Posts the reminder digest to a HipChat room.
#[derive(Debug, Clone)]
pub struct HipChatReminder {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    room: String,
}

impl HipChatReminder {
    /// # Errors
    /// Returns `RemindError::Configuration` when the room is empty.
    pub fn new(settings: HipChatSettings) -> Result<Self, RemindError> {
        if settings.room.trim().is_empty() {
            return Err(RemindError::Configuration("empty hipchat room".to_string()));
        }

        crate::tls::install_crypto_provider();
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                RemindError::Configuration(format!("failed to build HipChat HTTP client: {}", e))
            })?;

        let url = if settings.url.is_empty() {
            HIPCHAT_URL
        } else {
            settings.url.as_str()
        };

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            token: settings.token.filter(|t| !t.is_empty()),
            room: settings.room,
        })
    }

    fn notification_url(&self) -> String {
        format!("{}/room/{}/notification", self.base_url, self.room)
    }

    /// Send one notification listing `prs`. Does nothing for an empty list.
    pub async fn remind(&self, prs: &[PullRequest]) -> Result<(), RemindError> {
        if prs.is_empty() {
            debug!("no pull requests to remind about");
            return Ok(());
        }

        let message = format_digest(prs, Utc::now());
        let url = self.notification_url();

        // .json() sets Content-Type: application/json
        let mut request = self.client.post(&url).json(&Notification {
            from: NOTIFICATION_FROM,
            message: &message,
        });
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        info!(%url, count = prs.len(), "sending notification");
        let response = request
            .send()
            .await
            .map_err(|e| RemindError::network(&url, &e))?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(RemindError::unexpected_status(&url, "hipchat", status));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for HipChatReminder {
    async fn send(&self, prs: &[PullRequest]) -> Result<(), RemindError> {
        self.remind(prs).await
    }
}
