pub mod client;
pub mod filter;
pub mod types;

pub use client::{GitHubRepository, GitHubSettings, GITHUB_URL};
pub use filter::{FilterPolicy, SkipReason};
pub use types::{GitHubPull, GitHubUser};
