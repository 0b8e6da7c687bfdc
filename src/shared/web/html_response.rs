// src/shared/web/html_response.rs
use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};

pub struct HtmlResponse;

impl HtmlResponse {
    pub fn ok(body: String) -> HttpResponse {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn not_found(body: String) -> HttpResponse {
        Self::with_status(StatusCode::NOT_FOUND, body)
    }

    pub fn bad_gateway(body: String) -> HttpResponse {
        Self::with_status(StatusCode::BAD_GATEWAY, body)
    }

    pub fn with_status(status: StatusCode, body: String) -> HttpResponse {
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }
}
