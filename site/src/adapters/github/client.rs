//! GitHub releases API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::Release;
use crate::domain::ports::ReleaseSource;
use crate::error::ReleaseSourceError;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Implementation of the releases-list client for the GitHub REST API
pub struct GithubReleaseClient {
    http: Client,
    base_url: String,
    owner: String,
    repo: String,
    per_page: Option<u8>,
}

impl GithubReleaseClient {
    pub fn new(config: &Config) -> Result<Self, ReleaseSourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        if let Some(token) = &config.github_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ReleaseSourceError::InvalidHeader("authorization"))?;
            headers.insert(AUTHORIZATION, value);
        }
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ReleaseSourceError::InvalidHeader("user-agent"))?;
        headers.insert(USER_AGENT, user_agent);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
            owner: config.repo_owner.clone(),
            repo: config.repo_name.clone(),
            per_page: config.per_page,
        })
    }

    fn releases_url(&self) -> String {
        let mut url = format!(
            "{}/repos/{}/{}/releases",
            self.base_url,
            encode(&self.owner),
            encode(&self.repo)
        );
        if let Some(per_page) = self.per_page {
            url.push_str(&format!("?per_page={}", per_page));
        }
        url
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<Release>, ReleaseSourceError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ReleaseSourceError::Deserialization(e.to_string()))
        } else if status.as_u16() == 429 || is_exhausted_quota(&response) {
            Err(ReleaseSourceError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ReleaseSourceError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GitHub answers 403 with a zeroed remaining counter when the quota is spent
fn is_exhausted_quota(response: &reqwest::Response) -> bool {
    response.status().as_u16() == 403
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false)
}

#[async_trait]
impl ReleaseSource for GithubReleaseClient {
    async fn list_releases(&self) -> Result<Vec<Release>, ReleaseSourceError> {
        let url = self.releases_url();
        tracing::debug!(%url, "Requesting release list");

        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }
}
