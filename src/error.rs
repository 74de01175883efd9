use thiserror::Error;

/// Errors that abort a reminder run.
#[derive(Debug, Error)]
pub enum RemindError {
    /// Invalid setup detected before any network I/O.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure while talking to a remote service.
    #[error("network error calling {url}: {message}")]
    Network { url: String, message: String },

    /// The remote answered, but not with what we expected.
    #[error("unexpected response from {url}: {message}")]
    RemoteProtocol { url: String, message: String },
}

impl RemindError {
    pub(crate) fn network(url: &str, err: &reqwest::Error) -> Self {
        RemindError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn unexpected_status(url: &str, service: &str, status: http::StatusCode) -> Self {
        RemindError::RemoteProtocol {
            url: url.to_string(),
            message: format!("unexpected {} status code: {}", service, status.as_u16()),
        }
    }

    pub(crate) fn undecodable(url: &str, err: &serde_json::Error) -> Self {
        RemindError::RemoteProtocol {
            url: url.to_string(),
            message: format!("failed to decode response body: {}", err),
        }
    }
}
