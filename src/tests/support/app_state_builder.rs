use crate::portfolio::application::helpers::SubdomainPolicy;
use crate::portfolio::application::use_cases::LoadPortfolioUseCase;
use crate::template::application::TemplateRegistry;
use crate::tests::support::stubs::StubLoadPortfolioUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    load_portfolio: Arc<dyn LoadPortfolioUseCase + Send + Sync>,
    templates: TemplateRegistry,
    subdomains: SubdomainPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            load_portfolio: Arc::new(StubLoadPortfolioUseCase::loaded(Some("template-01"))),
            templates: TemplateRegistry::builtin(),
            subdomains: SubdomainPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_load_portfolio(
        mut self,
        uc: Arc<dyn LoadPortfolioUseCase + Send + Sync>,
    ) -> Self {
        self.load_portfolio = uc;
        self
    }

    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_subdomains(mut self, subdomains: SubdomainPolicy) -> Self {
        self.subdomains = subdomains;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            load_portfolio_use_case: self.load_portfolio,
            templates: Arc::new(self.templates),
            subdomains: self.subdomains,
        })
    }
}
