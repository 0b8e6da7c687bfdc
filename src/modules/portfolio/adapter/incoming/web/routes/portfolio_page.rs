use actix_web::{web, HttpResponse};
use tracing::{error, warn};

use crate::portfolio::adapter::incoming::web::error_pages;
use crate::portfolio::application::use_cases::LoadPortfolioError;
use crate::portfolio::domain::entities::PortfolioData;
use crate::template::application::Template;
use crate::AppState;

/// Everything an HTML route needs: the normalized data and the template
/// that should draw it.
pub struct RenderablePortfolio {
    pub data: PortfolioData,
    pub template: Template,
}

/// Fetch, normalize and pick a template, or produce the error page for
/// whichever step failed.
pub async fn load_renderable(
    state: &web::Data<AppState>,
    username: &str,
) -> Result<RenderablePortfolio, HttpResponse> {
    let loaded = match state.load_portfolio_use_case.execute(username).await {
        Ok(loaded) => loaded,

        Err(LoadPortfolioError::NotFound) => {
            warn!(username = %username, "Portfolio not found");
            return Err(error_pages::portfolio_not_found(username));
        }

        Err(LoadPortfolioError::FetchFailed(msg)) => {
            error!(username = %username, error = %msg, "Failed to fetch portfolio");
            return Err(error_pages::portfolio_unavailable(username));
        }

        Err(LoadPortfolioError::MalformedProfile(msg)) => {
            error!(username = %username, error = %msg, "Malformed portfolio data");
            return Err(error_pages::malformed_profile(username));
        }
    };

    let template = match state.templates.resolve(loaded.template_key.as_deref()) {
        Some(template) => template.clone(),
        None => {
            warn!(
                username = %username,
                template = ?loaded.template_key,
                "Template not found"
            );
            return Err(error_pages::template_not_found());
        }
    };

    Ok(RenderablePortfolio {
        data: loaded.data,
        template,
    })
}

/// A template may decline a page; that is a 404 rather than an error.
pub fn page_or_unavailable(page: Option<String>) -> HttpResponse {
    match page {
        Some(html) => crate::shared::web::HtmlResponse::ok(html),
        None => error_pages::page_not_available(),
    }
}
