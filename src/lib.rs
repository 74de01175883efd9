pub mod config;
pub mod error;
pub mod github;
pub mod hipchat;
pub mod pull_request;
pub mod remind;
pub mod tls;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::RemindError;
pub use pull_request::PullRequest;
pub use remind::{run, Notifier, PullRequestSource, RunSummary};
