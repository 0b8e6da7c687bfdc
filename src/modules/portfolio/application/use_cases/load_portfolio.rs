use async_trait::async_trait;

use crate::portfolio::domain::entities::PortfolioData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadPortfolioError {
    #[error("portfolio not found")]
    NotFound,

    #[error("failed to fetch portfolio: {0}")]
    FetchFailed(String),

    #[error("malformed profile data: {0}")]
    MalformedProfile(String),
}

/// A normalized portfolio plus the template it asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPortfolio {
    pub data: PortfolioData,
    pub template_key: Option<String>,
}

#[async_trait]
pub trait LoadPortfolioUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<LoadedPortfolio, LoadPortfolioError>;
}
