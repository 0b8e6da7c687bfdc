mod get_experience_page;
mod get_experiences_page;
mod get_home_page;
pub mod get_portfolio_json;
mod get_project_page;
mod get_projects_page;
mod portfolio_page;

pub use get_experience_page::get_experience_page_handler;
pub use get_experiences_page::get_experiences_page_handler;
pub use get_home_page::get_home_page_handler;
pub use get_portfolio_json::{get_portfolio_json_handler, PortfolioResponse};
pub use get_project_page::get_project_page_handler;
pub use get_projects_page::get_projects_page_handler;
