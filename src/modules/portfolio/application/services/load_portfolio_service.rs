use async_trait::async_trait;
use tracing::{debug, warn};

use crate::portfolio::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::portfolio::application::services::normalizer::transform;
use crate::portfolio::application::use_cases::{
    LoadPortfolioError, LoadPortfolioUseCase, LoadedPortfolio,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct LoadPortfolioService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> LoadPortfolioService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> LoadPortfolioUseCase for LoadPortfolioService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<LoadedPortfolio, LoadPortfolioError> {
        let raw = self
            .query
            .fetch_by_username(username)
            .await
            .map_err(|e| match e {
                ProfileQueryError::NotFound => LoadPortfolioError::NotFound,
                other => LoadPortfolioError::FetchFailed(other.to_string()),
            })?;

        let data = transform(&raw).map_err(|e| {
            warn!(username = %username, error = %e, "Profile normalization failed");
            LoadPortfolioError::MalformedProfile(e.to_string())
        })?;

        let template_key = raw.template_key().map(str::to_string);
        debug!(
            username = %username,
            template = ?template_key,
            "Portfolio loaded"
        );

        Ok(LoadedPortfolio { data, template_key })
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
