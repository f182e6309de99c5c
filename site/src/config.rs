use std::env;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Repository owner on the hosting API
    pub repo_owner: String,
    /// Repository name on the hosting API
    pub repo_name: String,
    pub github_api_url: String,
    /// Optional token, raises the anonymous rate limit
    pub github_token: Option<String>,
    /// The hosting API rejects requests without a User-Agent
    pub user_agent: String,
    pub per_page: Option<u8>,
    pub request_timeout: Option<Duration>,
    /// Language tag used when a request carries none
    pub default_lang: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo = lookup("RELEASES_REPO").ok_or(ConfigError::Missing("RELEASES_REPO"))?;
        let (repo_owner, repo_name) = parse_repo(&repo)?;

        let per_page = match lookup("RELEASES_PER_PAGE") {
            Some(raw) => Some(parse_per_page(&raw)?),
            None => None,
        };

        let request_timeout = match lookup("RELEASES_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "RELEASES_TIMEOUT_SECS",
                    message: format!("expected whole seconds, got {:?}", raw),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                message: format!("expected a port number, got {:?}", raw),
            })?,
            None => 8080,
        };

        Ok(Self {
            repo_owner,
            repo_name,
            github_api_url: lookup("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            github_token: lookup("GITHUB_TOKEN").filter(|t| !t.is_empty()),
            user_agent: lookup("RELEASES_USER_AGENT")
                .unwrap_or_else(|| format!("release-site/{}", env!("CARGO_PKG_VERSION"))),
            per_page,
            request_timeout,
            default_lang: lookup("DEFAULT_LANG").unwrap_or_else(|| "en".to_string()),
            port,
        })
    }
}

/// Split an `owner/name` slug
fn parse_repo(raw: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::Invalid {
        var: "RELEASES_REPO",
        message: format!("expected owner/name, got {:?}", raw),
    };

    let (owner, name) = raw.trim().split_once('/').ok_or_else(invalid)?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return Err(invalid());
    }

    Ok((owner.to_string(), name.to_string()))
}

fn parse_per_page(raw: &str) -> Result<u8, ConfigError> {
    match raw.trim().parse::<u8>() {
        Ok(n @ 1..=100) => Ok(n),
        _ => Err(ConfigError::Invalid {
            var: "RELEASES_PER_PAGE",
            message: format!("expected 1..=100, got {:?}", raw),
        }),
    }
}
