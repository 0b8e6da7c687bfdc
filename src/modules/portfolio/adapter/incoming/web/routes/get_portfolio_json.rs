use crate::api::schemas::{ErrorResponse, SuccessResponse};
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::portfolio::adapter::incoming::web::extractors::PortfolioHost;
use crate::portfolio::application::use_cases::LoadPortfolioError;
use crate::portfolio::domain::entities::PortfolioData;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    #[schema(example = "template-03")]
    pub template_id: String,
    #[schema(example = "Dock Portfolio")]
    pub template_name: String,
    pub portfolio: PortfolioData,
}

/// Normalized portfolio for the subdomain owner, as JSON.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    params(
        ("Host" = String, Header, description = "Portfolio host, e.g. alice.cofounds.in"),
        ("X-Forwarded-Host" = Option<String>, Header, description = "Host as seen by the proxy; wins over Host")
    ),
    responses(
        (
            status = 200,
            description = "Portfolio loaded",
            body = inline(SuccessResponse<PortfolioResponse>)
        ),
        (
            status = 404,
            description = "No subdomain, unknown user or unknown template",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PORTFOLIO_NOT_FOUND",
                    "message": "Portfolio not found"
                }
            })
        ),
        (
            status = 502,
            description = "Upstream API failed or returned unusable data",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "UPSTREAM_ERROR",
                    "message": "Portfolio service unavailable"
                }
            })
        )
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_json_handler(
    host: Option<PortfolioHost>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(host) = host else {
        return ApiResponse::failure(
            ErrorCode::NoSubdomain,
            "No portfolio subdomain in request host",
        );
    };

    let loaded = match data.load_portfolio_use_case.execute(&host.username).await {
        Ok(loaded) => loaded,

        Err(LoadPortfolioError::NotFound) => {
            return ApiResponse::failure(ErrorCode::PortfolioNotFound, "Portfolio not found");
        }

        Err(LoadPortfolioError::FetchFailed(msg)) => {
            error!(username = %host.username, error = %msg, "Failed to fetch portfolio");
            return ApiResponse::failure(ErrorCode::UpstreamError, "Portfolio service unavailable");
        }

        Err(LoadPortfolioError::MalformedProfile(msg)) => {
            error!(username = %host.username, error = %msg, "Malformed portfolio data");
            return ApiResponse::failure(ErrorCode::MalformedProfile, "Portfolio data is malformed");
        }
    };

    match data.templates.resolve(loaded.template_key.as_deref()) {
        Some(template) => ApiResponse::success(PortfolioResponse {
            template_id: template.config.id.to_string(),
            template_name: template.config.name.to_string(),
            portfolio: loaded.data,
        }),
        None => {
            warn!(
                username = %host.username,
                template = ?loaded.template_key,
                "Template not found"
            );
            ApiResponse::failure(
                ErrorCode::TemplateNotFound,
                "The template you're looking for does not exist.",
            )
        }
    }
}
