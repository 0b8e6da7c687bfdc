use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::portfolio::adapter::incoming::web::routes::PortfolioResponse;
use crate::portfolio::domain::entities::{
    CertificateEntry, Contact, EducationEntry, EntryLink, NavItem, PortfolioData, ProjectEntry,
    SocialLink, WorkEntry,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Renderer API",
        version = "1.0.0",
        description = "Normalized portfolio data served per subdomain"
    ),
    paths(
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_json::get_portfolio_json_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioResponse>,
            ErrorResponse,
            ErrorDetail,

            // Portfolio
            PortfolioResponse,
            PortfolioData,
            NavItem,
            WorkEntry,
            EducationEntry,
            ProjectEntry,
            CertificateEntry,
            EntryLink,
            Contact,
            SocialLink
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio data endpoints"),
    )
)]
pub struct ApiDoc;
