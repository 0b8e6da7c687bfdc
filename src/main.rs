pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::portfolio;
pub use modules::template;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::portfolio::adapter::outgoing::ProfileQueryHttp;
use crate::portfolio::application::helpers::SubdomainPolicy;
use crate::portfolio::application::services::LoadPortfolioService;
use crate::portfolio::application::use_cases::LoadPortfolioUseCase;
use crate::template::application::TemplateRegistry;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub load_portfolio_use_case: Arc<dyn LoadPortfolioUseCase + Send + Sync>,
    pub templates: Arc<TemplateRegistry>,
    pub subdomains: SubdomainPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().context("invalid configuration")?;

    let profile_query =
        ProfileQueryHttp::new(&config.api).context("failed to build portfolio API client")?;
    let load_portfolio_use_case = LoadPortfolioService::new(profile_query);
    let templates = TemplateRegistry::builtin();

    info!(
        api = %config.api.base_url,
        base_domains = ?config.subdomains.base_domains(),
        templates = ?templates.available_ids(),
        "Portfolio renderer configured"
    );

    let state = AppState {
        load_portfolio_use_case: Arc::new(load_portfolio_use_case),
        templates: Arc::new(templates),
        subdomains: config.subdomains.clone(),
    };

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await
    .context("server error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    // Portfolio JSON
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_json_handler);
    // Portfolio pages
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_projects_page_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_project_page_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_experiences_page_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_experience_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
