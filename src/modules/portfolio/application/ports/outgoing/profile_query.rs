// application/ports/outgoing/profile_query.rs
use async_trait::async_trait;

use crate::portfolio::domain::raw_profile::RawProfile;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Source of raw portfolio records, keyed by username.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn fetch_by_username(&self, username: &str) -> Result<RawProfile, ProfileQueryError>;
}
