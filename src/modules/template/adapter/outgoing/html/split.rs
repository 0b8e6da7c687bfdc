use crate::portfolio::domain::entities::{PortfolioData, ProjectEntry};
use crate::shared::web::markup::{avatar, badges, document, escape, external_link, paragraphs};
use crate::template::application::ports::outgoing::PortfolioRenderer;
use crate::template::domain::TemplateConfig;

use super::components::{
    entry_links, footer, kpi_list, mailto, maybe_link, project_card, project_href,
    project_media, social_links, work_card,
};

const STYLESHEET: &str = "\
:root{--border:#d4d4d8;--link:#2563eb;--muted:#71717a}\
body{margin:0;font-family:Arial,Helvetica,sans-serif;color:#18181b;background:#fafafa}\
.frame{padding:0 60px;border-left:1px dotted var(--border);border-right:1px dotted var(--border)}\
.site-header{display:flex;justify-content:space-between;align-items:center;padding:2rem 0}\
.site-header nav a{margin-left:1rem;color:var(--link)}\
.split{display:flex;gap:3rem}\
.split>.left{flex:1;min-width:0;border-right:1px dashed var(--border);padding-right:3rem}\
.split>.right{flex:1;position:sticky;top:0;align-self:flex-start;padding-top:4rem}\
section{border-top:1px solid var(--border);padding:3rem 0}\
.avatar{width:5rem;height:5rem;border-radius:50%;object-fit:cover;display:inline-flex;align-items:center;justify-content:center;background:#e4e4e7;font-weight:700}\
.profile-card{border:1px solid var(--border);border-radius:1rem;padding:1.5rem;background:#fff}\
.card{margin:1rem 0}\
.period,.meta{color:var(--muted);font-size:.875rem}\
.badges{display:flex;flex-wrap:wrap;gap:.375rem;list-style:none;padding:0}\
.badge{background:#f4f4f5;border-radius:.25rem;padding:.1rem .5rem;font-size:.75rem}\
.media{width:100%;border-radius:.5rem}\
@media (max-width:1024px){.split>.right{display:none}.split>.left{border-right:0;padding-right:0}}\
";

/// Two-column layout with a sticky profile card; projects get their own pages.
pub struct SplitRenderer;

impl SplitRenderer {
    pub const CONFIG: TemplateConfig = TemplateConfig {
        id: "template-04",
        name: "Split Portfolio",
        description: "Two-column portfolio with a sticky profile card and project pages",
        author: "Cofounds",
        version: "1.0.0",
        tags: &["two-column", "minimal", "multi-page"],
        features: &[
            "Sticky profile card",
            "Project listing with detail pages",
            "Work history",
            "Skills showcase",
            "Cal.com contact section",
        ],
        sections: &["hero", "projects", "work", "skills", "contact"],
    };

    fn page(data: &PortfolioData, title: &str, content: &str) -> String {
        let body = format!(
            "<div class=\"frame\">{header}{content}</div>{footer}",
            header = Self::header(data),
            content = content,
            footer = footer(),
        );
        document(title, STYLESHEET, "template-04", &body)
    }

    fn header(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<header class=\"site-header\">",
                "<a class=\"brand\" href=\"/\">{name}</a>",
                "<nav><a href=\"/projects\">Projects</a><a href=\"/#work\">Work</a><a href=\"/#contact\">Contact</a></nav>",
                "</header>"
            ),
            name = escape(&data.name),
        )
    }

    fn hero(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<div id=\"hero\" class=\"hero\">",
                "<h1>{name}</h1>",
                "<p class=\"lead\">{description}</p>",
                "{summary}",
                "</div>"
            ),
            name = escape(&data.name),
            description = escape(&data.description),
            summary = paragraphs(&data.summary),
        )
    }

    fn project_list(projects: &[ProjectEntry]) -> String {
        projects
            .iter()
            .map(|p| project_card(p, project_href(p).as_deref()))
            .collect()
    }

    fn projects(data: &PortfolioData) -> String {
        format!(
            "<section id=\"projects\"><h2>Projects</h2>{}</section>",
            Self::project_list(&data.projects)
        )
    }

    fn work(data: &PortfolioData) -> String {
        let cards = data.work.iter().map(|w| work_card(w, None)).collect::<String>();
        format!("<section id=\"work\"><h2>Work</h2>{}</section>", cards)
    }

    fn skills(data: &PortfolioData) -> String {
        format!(
            "<section id=\"skills\"><h2>Skills</h2>{}</section>",
            badges(&data.skills, "badge")
        )
    }

    fn profile_card(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<aside class=\"profile-card\">",
                "{avatar}",
                "<h2>{name}</h2>",
                "<p class=\"location\">{location}</p>",
                "<p><a href=\"{mailto}\">{email}</a></p>",
                "<div class=\"socials\">{socials}</div>",
                "</aside>"
            ),
            avatar = avatar(&data.avatar_url, &data.name, &data.initials),
            name = escape(&data.name),
            location = maybe_link(&data.location_link, &data.location),
            mailto = mailto(data),
            email = escape(&data.contact.email),
            socials = social_links(data, false),
        )
    }

    fn contact(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<section id=\"contact\">",
                "{avatar}",
                "<h2>Let's work together</h2>",
                "<p>Book a call with {name}.</p>",
                "{link}",
                "</section>"
            ),
            avatar = avatar(&data.avatar_url, &data.name, &data.initials),
            name = escape(data.first_name()),
            link = external_link(
                &format!("https://cal.com/{}", data.cal_link()),
                "Schedule a call",
                "button"
            ),
        )
    }
}

impl PortfolioRenderer for SplitRenderer {
    fn render_home(&self, data: &PortfolioData) -> String {
        let content = format!(
            concat!(
                "<div class=\"split\">",
                "<div class=\"left\">{hero}{projects}{work}{skills}</div>",
                "<div class=\"right\">{card}</div>",
                "</div>",
                "{contact}"
            ),
            hero = Self::hero(data),
            projects = Self::projects(data),
            work = Self::work(data),
            skills = Self::skills(data),
            card = Self::profile_card(data),
            contact = Self::contact(data),
        );
        Self::page(data, &data.name, &content)
    }

    fn render_projects(&self, data: &PortfolioData) -> Option<String> {
        let list = if data.projects.is_empty() {
            "<p class=\"empty\">No projects yet.</p>".to_string()
        } else {
            Self::project_list(&data.projects)
        };
        let content = format!(
            "<section id=\"projects\"><h1>All projects</h1>{}</section>",
            list
        );
        Some(Self::page(data, &format!("Projects | {}", data.name), &content))
    }

    fn render_project(&self, data: &PortfolioData, project: &ProjectEntry) -> Option<String> {
        let content = format!(
            concat!(
                "<a class=\"back\" href=\"/projects\">Back to projects</a>",
                "<article class=\"project-detail\">",
                "<h1>{title}</h1>",
                "<p class=\"meta\"><time>{dates}</time> {role} {status}</p>",
                "{media}",
                "{description}",
                "<h2>Tech stack</h2>{technologies}",
                "{kpis}",
                "{links}",
                "</article>"
            ),
            title = escape(&project.title),
            dates = escape(&project.dates),
            role = escape(&project.role),
            status = escape(&project.status),
            media = project_media(project),
            description = paragraphs(&project.description),
            technologies = badges(&project.technologies, "badge"),
            kpis = kpi_list(&project.kpis),
            links = entry_links(&project.links),
        );
        Some(Self::page(
            data,
            &format!("{} | {}", project.title, data.name),
            &content,
        ))
    }
}
