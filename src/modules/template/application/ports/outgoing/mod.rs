pub mod renderer;

pub use renderer::PortfolioRenderer;
