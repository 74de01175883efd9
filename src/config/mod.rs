mod duration;
mod schema;

pub use duration::MinAge;
pub use schema::{Config, FilterConfig, GitHubConfig, HipChatConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "git-remind-config.yaml";

/// Environment variable that overrides `github.token`
pub const ENV_GITHUB_TOKEN: &str = "GIT_REMIND_GITHUB_TOKEN";

/// Environment variable that overrides `hipchat.token`
pub const ENV_HIPCHAT_TOKEN: &str = "GIT_REMIND_HIPCHAT_TOKEN";

/// Load configuration from a YAML (or JSON) file, then apply token
/// overrides from the environment.
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The contents cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if !config_path.exists() {
        anyhow::bail!("Config file not found at {}", config_path.display());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let mut config = parse_config(&config_content)
        .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

    override_token(&mut config.github.token, token_from_env(ENV_GITHUB_TOKEN));
    override_token(&mut config.hipchat.token, token_from_env(ENV_HIPCHAT_TOKEN));

    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}

/// Read a token from `var`. Returns None if unset or blank.
pub fn token_from_env(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(val) => {
            let trimmed = val.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

fn override_token(token: &mut Option<String>, from_env: Option<String>) {
    if from_env.is_some() {
        *token = from_env;
    }
}
