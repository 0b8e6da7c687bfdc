pub mod load_portfolio_service;
pub mod normalizer;

pub use load_portfolio_service::LoadPortfolioService;
pub use normalizer::{transform, NormalizeError};
