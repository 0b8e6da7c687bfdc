use crate::portfolio::domain::entities::{CertificateEntry, EducationEntry, PortfolioData};
use crate::shared::web::markup::{avatar, badges, document, escape, image, paragraphs, safe_url};
use crate::template::application::ports::outgoing::PortfolioRenderer;
use crate::template::domain::TemplateConfig;

use super::components::{entry_links, footer, mailto, maybe_link, project_card, social_links, work_card};

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#111;background:#fff}\
main{max-width:42rem;margin:0 auto;padding:2rem 1rem 5rem}\
section{margin-top:2.5rem}\
h1{font-size:2.5rem;margin:0}\
h2{font-size:1.25rem}\
.site-nav{position:fixed;bottom:1rem;left:50%;transform:translateX(-50%);display:flex;gap:.75rem;padding:.5rem 1rem;border:1px solid #ddd;border-radius:999px;background:#fff}\
.hero{display:flex;justify-content:space-between;align-items:flex-start;gap:1rem}\
.avatar{width:7rem;height:7rem;border-radius:50%;object-fit:cover;display:inline-flex;align-items:center;justify-content:center;background:#eee;font-weight:700}\
.card{display:flex;gap:1rem;margin:1rem 0}\
.logo{width:3rem;height:3rem;border-radius:50%}\
.period{color:#666;font-size:.875rem;float:right}\
.badges{display:flex;flex-wrap:wrap;gap:.25rem;list-style:none;padding:0}\
.badge{border-radius:.375rem;background:#111;color:#fff;padding:.1rem .5rem;font-size:.75rem}\
.projects-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:.75rem}\
.project-card{flex-direction:column;border:1px solid #ddd;border-radius:.5rem;overflow:hidden}\
.media{width:100%;height:10rem;object-fit:cover}\
.certificates{border-left:1px solid #ddd;list-style:none;padding-left:1.5rem}\
.section-tag{display:inline-block;border-radius:.5rem;background:#111;color:#fff;padding:.25rem .75rem;font-size:.875rem}\
#contact{text-align:center}\
";

/// Single-page layout: every section on the home page.
pub struct ClassicRenderer;

impl ClassicRenderer {
    pub const CONFIG: TemplateConfig = TemplateConfig {
        id: "template-01",
        name: "Classic Portfolio",
        description: "Clean and professional single-page portfolio with smooth animations",
        author: "Cofounds",
        version: "1.0.0",
        tags: &["minimal", "single-page", "animated", "professional"],
        features: &[
            "Responsive navbar",
            "Hero section with avatar",
            "About section",
            "Work experience timeline",
            "Education history",
            "Skills showcase",
            "Project gallery with media support",
            "Certifications & achievements",
            "Contact section",
        ],
        sections: &[
            "hero",
            "about",
            "work",
            "education",
            "skills",
            "projects",
            "certificates",
            "contact",
        ],
    };

    fn nav(data: &PortfolioData) -> String {
        let items = data
            .navbar
            .iter()
            .map(|item| format!("<a href=\"{}\">{}</a>", safe_url(&item.href), escape(&item.label)))
            .collect::<String>();
        format!(
            "<nav class=\"site-nav\">{}{}</nav>",
            items,
            social_links(data, true)
        )
    }

    fn hero(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<section id=\"hero\" class=\"hero\">",
                "<div><h1>Hi, I'm {first}</h1><p class=\"lead\">{description}</p></div>",
                "{avatar}",
                "</section>"
            ),
            first = escape(data.first_name()),
            description = escape(&data.description),
            avatar = avatar(&data.avatar_url, &data.name, &data.initials),
        )
    }

    fn about(data: &PortfolioData) -> String {
        format!(
            "<section id=\"about\"><h2>About</h2>{}</section>",
            paragraphs(&data.summary)
        )
    }

    fn work(data: &PortfolioData) -> String {
        if data.work.is_empty() {
            return String::new();
        }
        let cards = data.work.iter().map(|w| work_card(w, None)).collect::<String>();
        format!("<section id=\"work\"><h2>Work Experience</h2>{}</section>", cards)
    }

    fn education_card(edu: &EducationEntry) -> String {
        format!(
            concat!(
                "<article class=\"card education-card\">{logo}<div class=\"card-body\">",
                "<header><h3>{school}</h3><span class=\"period\">{period}</span></header>",
                "<p class=\"subtitle\">{degree}</p>",
                "</div></article>"
            ),
            logo = image(&edu.logo_url, &edu.school, "logo"),
            school = maybe_link(&edu.href, &edu.school),
            period = escape(&edu.period()),
            degree = escape(&edu.degree),
        )
    }

    fn education(data: &PortfolioData) -> String {
        if data.education.is_empty() {
            return String::new();
        }
        let cards = data
            .education
            .iter()
            .map(Self::education_card)
            .collect::<String>();
        format!("<section id=\"education\"><h2>Education</h2>{}</section>", cards)
    }

    fn skills(data: &PortfolioData) -> String {
        if data.skills.is_empty() {
            return String::new();
        }
        format!(
            "<section id=\"skills\"><h2>Skills</h2>{}</section>",
            badges(&data.skills, "badge")
        )
    }

    fn projects(data: &PortfolioData) -> String {
        if data.projects.is_empty() {
            return String::new();
        }
        let cards = data
            .projects
            .iter()
            .map(|p| project_card(p, None))
            .collect::<String>();
        format!(
            concat!(
                "<section id=\"projects\">",
                "<span class=\"section-tag\">My Projects</span>",
                "<h2>Check out my latest work</h2>",
                "<div class=\"projects-grid\">{}</div>",
                "</section>"
            ),
            cards
        )
    }

    fn certificate_item(cert: &CertificateEntry) -> String {
        format!(
            concat!(
                "<li class=\"certificate\">{image}<time>{dates}</time><h3>{title}</h3>",
                "<p class=\"location\">{location}</p>{description}{links}</li>"
            ),
            image = image(&cert.image, &cert.title, "logo"),
            dates = escape(&cert.dates),
            title = escape(&cert.title),
            location = escape(&cert.location),
            description = paragraphs(&cert.description),
            links = entry_links(&cert.links),
        )
    }

    fn certificates(data: &PortfolioData) -> String {
        if data.certificates.is_empty() {
            return String::new();
        }
        let items = data
            .certificates
            .iter()
            .map(Self::certificate_item)
            .collect::<String>();
        format!(
            concat!(
                "<section id=\"certificates\">",
                "<span class=\"section-tag\">Co-curricular Activities</span>",
                "<h2>Certifications &amp; Achievements</h2>",
                "<p>Here are some of the {count} certifications and achievements I've earned.</p>",
                "<ul class=\"certificates\">{items}</ul>",
                "</section>"
            ),
            count = data.certificates.len(),
            items = items,
        )
    }

    fn contact(data: &PortfolioData) -> String {
        format!(
            concat!(
                "<section id=\"contact\">",
                "<span class=\"section-tag\">Contact</span>",
                "<h2>Get in Touch</h2>",
                "<p>Want to chat? Just shoot me a mail <a href=\"{}\">with a direct question</a> ",
                "and I'll respond whenever I can.</p>",
                "</section>"
            ),
            mailto(data)
        )
    }
}

impl PortfolioRenderer for ClassicRenderer {
    fn render_home(&self, data: &PortfolioData) -> String {
        let body = [
            Self::nav(data),
            "<main>".to_string(),
            Self::hero(data),
            Self::about(data),
            Self::work(data),
            Self::education(data),
            Self::skills(data),
            Self::projects(data),
            Self::certificates(data),
            Self::contact(data),
            "</main>".to_string(),
            footer(),
        ]
        .concat();

        document(&data.name, STYLESHEET, "template-01", &body)
    }
}
