pub mod api_config;
pub mod profile_query_http;

pub use api_config::PortfolioApiConfig;
pub use profile_query_http::ProfileQueryHttp;
