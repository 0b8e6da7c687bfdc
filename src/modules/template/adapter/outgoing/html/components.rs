use crate::portfolio::domain::entities::{EntryLink, PortfolioData, ProjectEntry, WorkEntry};
use crate::shared::web::markup::{badges, escape, external_link, image, paragraphs, safe_url};

pub fn project_href(project: &ProjectEntry) -> Option<String> {
    (!project.id.is_empty()).then(|| format!("/projects/{}", project.id))
}

pub fn experience_href(work: &WorkEntry) -> Option<String> {
    (!work.id.is_empty()).then(|| format!("/experiences/{}", work.id))
}

/// Link label: the explicit title when present, otherwise the link type.
pub fn link_label(link: &EntryLink) -> &str {
    link.link_title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(&link.kind)
}

pub fn entry_links(links: &[EntryLink]) -> String {
    let inner = links
        .iter()
        .filter(|l| !l.href.is_empty())
        .map(|l| external_link(&l.href, link_label(l), "entry-link"))
        .collect::<String>();

    if inner.is_empty() {
        String::new()
    } else {
        format!("<div class=\"entry-links\">{}</div>", inner)
    }
}

/// Title wrapped in a link when there is somewhere to go.
pub fn maybe_link(href: &str, text: &str) -> String {
    if href.is_empty() {
        escape(text)
    } else {
        external_link(href, text, "")
    }
}

pub fn work_card(work: &WorkEntry, detail_href: Option<&str>) -> String {
    let title = match detail_href {
        Some(href) => format!("<a href=\"{}\">{}</a>", safe_url(href), escape(&work.company)),
        None => maybe_link(&work.href, &work.company),
    };

    format!(
        concat!(
            "<article class=\"card work-card\">",
            "{logo}",
            "<div class=\"card-body\">",
            "<header><h3>{title}</h3><span class=\"period\">{period}</span></header>",
            "<p class=\"subtitle\">{subtitle}</p>",
            "{badges}",
            "{description}",
            "</div>",
            "</article>"
        ),
        logo = image(&work.logo_url, &work.company, "logo"),
        title = title,
        period = escape(&work.period()),
        subtitle = escape(&work.title),
        badges = badges(&work.badges, "badge"),
        description = paragraphs(&work.description),
    )
}

pub fn project_card(project: &ProjectEntry, detail_href: Option<&str>) -> String {
    let title = match detail_href {
        Some(href) => format!("<a href=\"{}\">{}</a>", safe_url(href), escape(&project.title)),
        None => maybe_link(&project.href, &project.title),
    };

    format!(
        concat!(
            "<article class=\"card project-card\">",
            "{media}",
            "<div class=\"card-body\">",
            "<h3>{title}</h3>",
            "<time>{dates}</time>",
            "{description}",
            "{technologies}",
            "{links}",
            "</div>",
            "</article>"
        ),
        media = project_media(project),
        title = title,
        dates = escape(&project.dates),
        description = paragraphs(&project.description),
        technologies = badges(&project.technologies, "badge"),
        links = entry_links(&project.links),
    )
}

/// Video takes precedence over the still image.
pub fn project_media(project: &ProjectEntry) -> String {
    if !project.video.is_empty() {
        format!(
            "<video class=\"media\" src=\"{}\" autoplay loop muted playsinline></video>",
            safe_url(&project.video)
        )
    } else {
        image(&project.image, &project.title, "media")
    }
}

pub fn kpi_list(kpis: &[String]) -> String {
    if kpis.is_empty() {
        return String::new();
    }
    let items = kpis
        .iter()
        .map(|k| format!("<li>{}</li>", escape(k)))
        .collect::<String>();
    format!("<section class=\"kpis\"><h2>Key results</h2><ul>{}</ul></section>", items)
}

pub fn mailto(data: &PortfolioData) -> String {
    if data.contact.email.is_empty() {
        "#".to_string()
    } else {
        safe_url(&format!("mailto:{}", data.contact.email))
    }
}

pub fn social_links(data: &PortfolioData, navbar_only: bool) -> String {
    data.contact
        .social
        .values()
        .filter(|link| !navbar_only || link.navbar)
        .map(|link| external_link(&link.url, &link.name, "social-link"))
        .collect()
}

pub fn footer() -> String {
    "<footer class=\"site-footer\"><p>Design &amp; Developed by <a href=\"https://www.hirewiser.in\" target=\"_blank\" rel=\"noopener noreferrer\">www.hirewiser.in</a></p></footer>".to_string()
}
