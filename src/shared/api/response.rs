// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope: `{ success, data?, error? }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Machine-readable failure codes and the status each one maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NoSubdomain,
    PortfolioNotFound,
    UpstreamError,
    MalformedProfile,
    TemplateNotFound,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NoSubdomain => "NO_SUBDOMAIN",
            ErrorCode::PortfolioNotFound => "PORTFOLIO_NOT_FOUND",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
            ErrorCode::MalformedProfile => "MALFORMED_PROFILE",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NoSubdomain | ErrorCode::PortfolioNotFound | ErrorCode::TemplateNotFound => {
                StatusCode::NOT_FOUND
            }
            ErrorCode::UpstreamError | ErrorCode::MalformedProfile => StatusCode::BAD_GATEWAY,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn failure(code: ErrorCode, message: &str) -> HttpResponse {
        Self::error(code.status(), code.as_str(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn json_of(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_omits_error() {
        let resp = ApiResponse::success(vec![1, 2]);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_of(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][1], 2);
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn failure_uses_code_status() {
        let resp = ApiResponse::failure(ErrorCode::UpstreamError, "down");
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body = json_of(resp).await;
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert_eq!(body["error"]["message"], "down");
    }

    #[test]
    fn not_found_family() {
        for code in [
            ErrorCode::NoSubdomain,
            ErrorCode::PortfolioNotFound,
            ErrorCode::TemplateNotFound,
        ] {
            assert_eq!(code.status(), StatusCode::NOT_FOUND);
        }
        assert_eq!(ErrorCode::MalformedProfile.status(), StatusCode::BAD_GATEWAY);
    }
}
