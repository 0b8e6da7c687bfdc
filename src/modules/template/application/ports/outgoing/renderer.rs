use crate::portfolio::domain::entities::{PortfolioData, ProjectEntry, WorkEntry};

/// Turns a normalized portfolio into HTML for one visual template.
///
/// Pages other than the home page are optional; a template that has no such
/// page returns `None`.
pub trait PortfolioRenderer: Send + Sync {
    fn render_home(&self, data: &PortfolioData) -> String;

    fn render_projects(&self, _data: &PortfolioData) -> Option<String> {
        None
    }

    fn render_project(&self, _data: &PortfolioData, _project: &ProjectEntry) -> Option<String> {
        None
    }

    fn render_experiences(&self, _data: &PortfolioData) -> Option<String> {
        None
    }

    fn render_experience(&self, _data: &PortfolioData, _work: &WorkEntry) -> Option<String> {
        None
    }
}
