use crate::portfolio::domain::entities::{PortfolioData, ProjectEntry, WorkEntry};
use crate::shared::web::markup::{avatar, badges, document, escape, external_link, paragraphs};
use crate::template::application::ports::outgoing::PortfolioRenderer;
use crate::template::domain::TemplateConfig;

use super::components::{
    entry_links, experience_href, footer, kpi_list, mailto, maybe_link, project_card,
    project_href, project_media, work_card,
};

const STYLESHEET: &str = "\
body{margin:0;font-family:'Hanken Grotesk',system-ui,sans-serif;color:#1f2937;background:#fff}\
.wrap{max-width:48rem;margin:0 auto;padding:4rem 1.25rem 6rem}\
section{margin-top:3rem}\
h1{font-size:2.25rem;margin:.5rem 0}\
.dock{position:fixed;bottom:1.5rem;left:50%;transform:translateX(-50%);display:flex;gap:1rem;padding:.6rem 1.2rem;border-radius:1rem;background:rgba(255,255,255,.9);box-shadow:0 4px 24px rgba(0,0,0,.12)}\
.dock a{color:inherit;text-decoration:none}\
.avatar{width:6rem;height:6rem;border-radius:50%;object-fit:cover;display:inline-flex;align-items:center;justify-content:center;background:#f3f4f6;font-weight:700}\
.card{border:1px solid #e5e7eb;border-radius:.75rem;padding:1rem;margin:1rem 0}\
.logo{width:2.5rem;height:2.5rem;border-radius:.5rem}\
.period{color:#6b7280;font-size:.875rem}\
.badges{display:flex;flex-wrap:wrap;gap:.375rem;list-style:none;padding:0}\
.badge{border:1px solid #e5e7eb;border-radius:.375rem;padding:.1rem .5rem;font-size:.75rem}\
.media{width:100%;border-radius:.5rem}\
.back{display:inline-block;margin-bottom:1.5rem}\
.kpis li{margin:.25rem 0}\
.site-footer{text-align:center;padding-bottom:6rem}\
";

/// Dock-navigated layout with project and experience pages.
pub struct DockRenderer;

impl DockRenderer {
    pub const CONFIG: TemplateConfig = TemplateConfig {
        id: "template-03",
        name: "Dock Portfolio",
        description: "Multi-page portfolio with a floating dock and dedicated project and experience pages",
        author: "Cofounds",
        version: "1.0.0",
        tags: &["multi-page", "dock", "modern"],
        features: &[
            "Floating dock navigation",
            "Hero section with avatar",
            "Experience timeline with detail pages",
            "Project listing with detail pages",
            "Project KPIs",
            "GitHub profile link",
            "Cal.com booking section",
        ],
        sections: &["hero", "experience", "projects", "about", "github", "contact"],
    };

    fn page(data: &PortfolioData, title: &str, content: &str) -> String {
        let body = format!(
            "{dock}<div class=\"wrap\">{content}</div>{footer}",
            dock = Self::dock(data),
            content = content,
            footer = footer(),
        );
        document(title, STYLESHEET, "template-03", &body)
    }

    fn dock(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<nav class=\"dock\">",
                "<a href=\"/\">Home</a>",
                "<a href=\"/experiences\">Experience</a>",
                "<a href=\"/projects\">Projects</a>",
                "<a href=\"{}\">Email</a>",
                "</nav>"
            ),
            mailto(data)
        )
    }

    fn hero(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<section id=\"hero\">",
                "{avatar}",
                "<h1>{name}</h1>",
                "<p class=\"lead\">{description}</p>",
                "<p class=\"location\">{location}</p>",
                "</section>"
            ),
            avatar = avatar(&data.avatar_url, &data.name, &data.initials),
            name = escape(&data.name),
            description = escape(&data.description),
            location = maybe_link(&data.location_link, &data.location),
        )
    }

    fn experience(data: &PortfolioData) -> String {
        if data.work.is_empty() {
            return String::new();
        }
        let cards = data
            .work
            .iter()
            .map(|w| work_card(w, experience_href(w).as_deref()))
            .collect::<String>();
        format!("<section id=\"experience\"><h2>Experience</h2>{}</section>", cards)
    }

    fn project_list(projects: &[ProjectEntry]) -> String {
        projects
            .iter()
            .map(|p| project_card(p, project_href(p).as_deref()))
            .collect()
    }

    fn projects(data: &PortfolioData) -> String {
        if data.projects.is_empty() {
            return String::new();
        }
        format!(
            "<section id=\"projects\"><h2>Projects</h2>{}<a href=\"/projects\">View all projects</a></section>",
            Self::project_list(&data.projects)
        )
    }

    fn about(data: &PortfolioData) -> String {
        format!(
            "<section id=\"about\"><h2>About</h2>{}{}</section>",
            paragraphs(&data.summary),
            badges(&data.skills, "badge")
        )
    }

    fn github(data: &PortfolioData) -> String {
        let Some(username) = data.github_username() else {
            return String::new();
        };
        format!(
            "<section id=\"github\"><h2>GitHub</h2>{}</section>",
            external_link(
                &format!("https://github.com/{}", username),
                &format!("@{}", username),
                "github-link"
            )
        )
    }

    fn contact(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<section id=\"contact\" class=\"card\">",
                "{avatar}",
                "<p>Get in touch to discuss opportunities or collaborations</p>",
                "{link}",
                "</section>"
            ),
            avatar = avatar(&data.avatar_url, &data.name, &data.initials),
            link = external_link(
                &format!("https://cal.com/{}", data.cal_link()),
                "Contact Me",
                "button"
            ),
        )
    }
}

impl PortfolioRenderer for DockRenderer {
    fn render_home(&self, data: &PortfolioData) -> String {
        let content = [
            Self::hero(data),
            Self::experience(data),
            Self::projects(data),
            Self::about(data),
            Self::github(data),
            Self::contact(data),
        ]
        .concat();

        Self::page(data, &data.name, &content)
    }

    fn render_projects(&self, data: &PortfolioData) -> Option<String> {
        let list = if data.projects.is_empty() {
            "<p class=\"empty\">No projects yet.</p>".to_string()
        } else {
            Self::project_list(&data.projects)
        };
        let content = format!(
            "<a class=\"back\" href=\"/\">Back</a><section id=\"projects\"><h1>Projects</h1>{}</section>",
            list
        );
        Some(Self::page(data, &format!("Projects | {}", data.name), &content))
    }

    fn render_project(&self, data: &PortfolioData, project: &ProjectEntry) -> Option<String> {
        let related = data
            .projects
            .iter()
            .filter(|p| p.id != project.id)
            .take(2)
            .cloned()
            .collect::<Vec<_>>();
        let related = if related.is_empty() {
            String::new()
        } else {
            format!(
                "<section class=\"related\"><h2>More projects</h2>{}</section>",
                Self::project_list(&related)
            )
        };

        let content = format!(
            concat!(
                "<a class=\"back\" href=\"/projects\">Back to projects</a>",
                "<article class=\"project-detail\">",
                "{media}",
                "<h1>{title}</h1>",
                "<p class=\"meta\"><time>{dates}</time> {role} {status}</p>",
                "{description}",
                "{technologies}",
                "{kpis}",
                "{links}",
                "</article>",
                "{related}"
            ),
            media = project_media(project),
            title = escape(&project.title),
            dates = escape(&project.dates),
            role = escape(&project.role),
            status = escape(&project.status),
            description = paragraphs(&project.description),
            technologies = badges(&project.technologies, "badge"),
            kpis = kpi_list(&project.kpis),
            links = entry_links(&project.links),
            related = related,
        );

        Some(Self::page(
            data,
            &format!("{} | {}", project.title, data.name),
            &content,
        ))
    }

    fn render_experiences(&self, data: &PortfolioData) -> Option<String> {
        let list = if data.work.is_empty() {
            "<p class=\"empty\">No experience yet.</p>".to_string()
        } else {
            data.work
                .iter()
                .map(|w| work_card(w, experience_href(w).as_deref()))
                .collect()
        };
        let content = format!(
            "<a class=\"back\" href=\"/\">Back</a><section id=\"experience\"><h1>Experience</h1>{}</section>",
            list
        );
        Some(Self::page(data, &format!("Experience | {}", data.name), &content))
    }

    fn render_experience(&self, data: &PortfolioData, work: &WorkEntry) -> Option<String> {
        let content = format!(
            concat!(
                "<a class=\"back\" href=\"/experiences\">Back to experience</a>",
                "<article class=\"experience-detail\">",
                "<h1>{title}</h1>",
                "<p class=\"company\">{company}</p>",
                "<p class=\"period\">{period}</p>",
                "{badges}",
                "{description}",
                "</article>"
            ),
            title = escape(&work.title),
            company = maybe_link(&work.href, &work.company),
            period = escape(&work.period()),
            badges = badges(&work.badges, "badge"),
            description = paragraphs(&work.description),
        );
        Some(Self::page(
            data,
            &format!("{} at {} | {}", work.title, work.company, data.name),
            &content,
        ))
    }
}
