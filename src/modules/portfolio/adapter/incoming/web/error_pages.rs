use actix_web::HttpResponse;

use crate::shared::web::markup::{document, escape};
use crate::shared::web::HtmlResponse;

const STYLESHEET: &str = "\
body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}\
.error-page{max-width:32rem;text-align:center;padding:2rem}\
.error-page h1{font-size:1.5rem;margin-bottom:.5rem}\
.error-page p{color:#6b7280}\
";

fn page(title: &str, message: &str) -> String {
    let body = format!(
        "<main class=\"error-page\"><h1>{}</h1><p>{}</p></main>",
        escape(title),
        escape(message)
    );
    document(title, STYLESHEET, "error", &body)
}

pub fn no_subdomain() -> HttpResponse {
    HtmlResponse::not_found(page(
        "No portfolio here",
        "Open a portfolio through its own subdomain, for example username.cofounds.in.",
    ))
}

pub fn portfolio_not_found(username: &str) -> HttpResponse {
    HtmlResponse::not_found(page(
        "Portfolio not found",
        &format!("We couldn't find a portfolio for \"{}\".", username),
    ))
}

pub fn portfolio_unavailable(username: &str) -> HttpResponse {
    HtmlResponse::bad_gateway(page(
        "Portfolio unavailable",
        &format!(
            "The portfolio for \"{}\" could not be loaded right now. Please try again later.",
            username
        ),
    ))
}

pub fn malformed_profile(username: &str) -> HttpResponse {
    HtmlResponse::bad_gateway(page(
        "Portfolio unavailable",
        &format!("The portfolio data for \"{}\" could not be read.", username),
    ))
}

pub fn template_not_found() -> HttpResponse {
    HtmlResponse::not_found(page(
        "Template not found",
        "The template you're looking for does not exist.",
    ))
}

pub fn page_not_available() -> HttpResponse {
    HtmlResponse::not_found(page(
        "Page not available",
        "This page is not available for this portfolio.",
    ))
}

pub fn project_not_found() -> HttpResponse {
    HtmlResponse::not_found(page(
        "Project not found",
        "The project you're looking for does not exist.",
    ))
}

pub fn experience_not_found() -> HttpResponse {
    HtmlResponse::not_found(page(
        "Experience not found",
        "The experience you're looking for does not exist.",
    ))
}

pub fn internal_error() -> HttpResponse {
    HtmlResponse::with_status(
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        page("Something went wrong", "An unexpected error occurred."),
    )
}
