pub mod portfolio_host;

pub use portfolio_host::PortfolioHost;
