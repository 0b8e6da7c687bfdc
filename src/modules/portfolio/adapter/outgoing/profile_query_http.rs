use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::portfolio::adapter::outgoing::api_config::PortfolioApiConfig;
use crate::portfolio::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::portfolio::domain::raw_profile::RawProfile;

const USER_AGENT: &str = "Portfolio-App/1.0";

/// `{ success, data?, message? }` envelope returned by the portfolio API.
#[derive(Debug, Deserialize)]
struct PortfolioEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Option<RawProfile>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientSetupError {
    #[error("invalid portfolio API URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Reads portfolio records from the upstream HTTP API.
#[derive(Clone)]
pub struct ProfileQueryHttp {
    client: reqwest::Client,
    base_url: Url,
}

impl ProfileQueryHttp {
    pub fn new(config: &PortfolioApiConfig) -> Result<Self, ClientSetupError> {
        let invalid = |reason: String| ClientSetupError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };

        let base_url = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot take path segments".to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base_url}/{username}`, with the username percent-encoded as a single
    /// path segment.
    fn profile_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are checked in `new`, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(username);
        }
        url
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryHttp {
    async fn fetch_by_username(&self, username: &str) -> Result<RawProfile, ProfileQueryError> {
        let url = self.profile_url(username);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Portfolio API request failed");
                ProfileQueryError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read portfolio API response");
            ProfileQueryError::Network(e.to_string())
        })?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(_) => info!(username = %username, "Portfolio fetched"),
            Err(e) => warn!(username = %username, status, error = %e, "Portfolio fetch rejected"),
        }
        result
    }
}

/// Turn a status code and body into a profile or a typed failure.
fn interpret_response(status: u16, body: &str) -> Result<RawProfile, ProfileQueryError> {
    if status == 404 {
        return Err(ProfileQueryError::NotFound);
    }
    if !(200..300).contains(&status) {
        return Err(ProfileQueryError::UpstreamStatus(status));
    }

    let envelope: PortfolioEnvelope = serde_json::from_str(body)
        .map_err(|e| ProfileQueryError::InvalidResponse(format!("invalid JSON: {}", e)))?;

    if envelope.success == Some(false) {
        return Err(ProfileQueryError::InvalidResponse(
            envelope
                .message
                .unwrap_or_else(|| "request was not successful".to_string()),
        ));
    }

    envelope
        .data
        .ok_or_else(|| ProfileQueryError::InvalidResponse("missing data".to_string()))
}
