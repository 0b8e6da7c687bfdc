pub mod error_pages;
pub mod extractors;
pub mod routes;
