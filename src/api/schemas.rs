// src/api/schemas.rs
//! Documentation-only mirrors of the `ApiResponse` envelope.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ success: true, data }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ success: false, error: { code, message } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `NO_SUBDOMAIN`, `PORTFOLIO_NOT_FOUND`, `UPSTREAM_ERROR`,
    /// `MALFORMED_PROFILE`, `TEMPLATE_NOT_FOUND`.
    #[schema(example = "PORTFOLIO_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Portfolio not found")]
    pub message: String,
}
