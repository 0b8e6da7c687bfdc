use async_trait::async_trait;

use crate::portfolio::application::use_cases::{
    LoadPortfolioError, LoadPortfolioUseCase, LoadedPortfolio,
};
use crate::tests::support::fixtures::sample_portfolio;

/// Returns a canned result for every username.
#[derive(Clone)]
pub struct StubLoadPortfolioUseCase {
    result: Result<LoadedPortfolio, LoadPortfolioError>,
}

impl StubLoadPortfolioUseCase {
    /// The sample portfolio, asking for `template_key`.
    pub fn loaded(template_key: Option<&str>) -> Self {
        Self {
            result: Ok(LoadedPortfolio {
                data: sample_portfolio(),
                template_key: template_key.map(str::to_string),
            }),
        }
    }

    pub fn failing(err: LoadPortfolioError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl LoadPortfolioUseCase for StubLoadPortfolioUseCase {
    async fn execute(&self, _username: &str) -> Result<LoadedPortfolio, LoadPortfolioError> {
        self.result.clone()
    }
}
