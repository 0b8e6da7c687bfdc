use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::portfolio::adapter::incoming::web::error_pages;
use crate::AppState;

/// Portfolio owner resolved from the request host, e.g. `alice` for
/// `alice.cofounds.in`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioHost {
    pub username: String,
}

fn reject(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name)?.to_str().ok()
}

impl FromRequest for PortfolioHost {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => return ready(Err(reject(error_pages::internal_error()))),
        };

        let host = header_value(req, "Host");
        let forwarded_host = header_value(req, "X-Forwarded-Host");
        let matched = state.subdomains.extract_username(host, forwarded_host);

        if !matched.has_valid_subdomain {
            tracing::debug!(
                host = host.unwrap_or(""),
                forwarded_host = forwarded_host.unwrap_or(""),
                "request without a portfolio subdomain"
            );
            return ready(Err(reject(error_pages::no_subdomain())));
        }

        ready(Ok(PortfolioHost {
            username: matched.username,
        }))
    }
}
