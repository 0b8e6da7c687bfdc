pub mod load_portfolio;

pub use load_portfolio::{LoadPortfolioError, LoadPortfolioUseCase, LoadedPortfolio};
