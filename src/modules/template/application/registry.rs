use std::fmt;
use std::sync::Arc;

use crate::template::adapter::outgoing::html::{ClassicRenderer, DockRenderer, SplitRenderer};
use crate::template::application::ports::outgoing::PortfolioRenderer;
use crate::template::domain::TemplateConfig;

/// A registered template: its metadata and the renderer that draws it.
#[derive(Clone)]
pub struct Template {
    pub config: TemplateConfig,
    pub renderer: Arc<dyn PortfolioRenderer>,
}

impl Template {
    pub fn id(&self) -> &'static str {
        self.config.id
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("config", &self.config)
            .field("renderer", &"<dyn PortfolioRenderer>")
            .finish()
    }
}

/// Flat lookup table from template id to [`Template`].
///
/// Registration order is kept; registering an id twice keeps the first entry.
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every template shipped with the service.
    pub fn builtin() -> Self {
        Self::new()
            .register(ClassicRenderer::CONFIG, Arc::new(ClassicRenderer))
            .register(DockRenderer::CONFIG, Arc::new(DockRenderer))
            .register(SplitRenderer::CONFIG, Arc::new(SplitRenderer))
    }

    pub fn register(mut self, config: TemplateConfig, renderer: Arc<dyn PortfolioRenderer>) -> Self {
        if !self.exists(config.id) {
            self.templates.push(Template { config, renderer });
        }
        self
    }

    /// Look a template up by id. Absent, empty and unknown ids all resolve
    /// to `None`.
    pub fn resolve(&self, template_id: Option<&str>) -> Option<&Template> {
        let id = template_id.filter(|id| !id.is_empty())?;
        self.templates.iter().find(|t| t.id() == id)
    }

    pub fn exists(&self, template_id: &str) -> bool {
        self.templates.iter().any(|t| t.id() == template_id)
    }

    pub fn available_ids(&self) -> Vec<&'static str> {
        self.templates.iter().map(Template::id).collect()
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }
}
