use async_trait::async_trait;
use tracing::info;

use crate::error::RemindError;
use crate::pull_request::PullRequest;

/// Something that can list the pull requests worth reminding about.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<PullRequest>, RemindError>;
}

/// Something that can deliver a reminder for a batch of pull requests.
///
/// Implementations must treat an empty batch as a no-op.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, prs: &[PullRequest]) -> Result<(), RemindError>;
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub reminded: usize,
}

/// Fetch once, then notify once. The first error aborts the run.
pub async fn run(
    source: &dyn PullRequestSource,
    notifier: &dyn Notifier,
) -> Result<RunSummary, RemindError> {
    let prs = source.fetch().await?;
    notifier.send(&prs).await?;
    if !prs.is_empty() {
        info!(count = prs.len(), "reminder sent");
    }
    Ok(RunSummary {
        reminded: prs.len(),
    })
}
