// src/shared/web/markup.rs
//! Small HTML building blocks shared by every page renderer.

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a URL for an `href`/`src` attribute. Anything that is not an
/// http(s), mailto, relative or fragment URL is replaced with `#`.
pub fn safe_url(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with('/')
        || lower.starts_with('#');

    if allowed {
        escape(trimmed)
    } else {
        "#".to_string()
    }
}

/// Full HTML document with a page title, inline stylesheet and body markup.
pub fn document(title: &str, stylesheet: &str, body_class: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<style>{stylesheet}</style>\n",
            "</head>\n",
            "<body class=\"{body_class}\">\n",
            "{body}\n",
            "</body>\n",
            "</html>\n"
        ),
        title = escape(title),
        stylesheet = stylesheet,
        body_class = escape(body_class),
        body = body,
    )
}

/// External link that opens in a new tab.
pub fn external_link(href: &str, label: &str, class: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(class),
        safe_url(href),
        escape(label)
    )
}

/// `<img>` tag, or nothing when there is no source.
pub fn image(src: &str, alt: &str, class: &str) -> String {
    if src.is_empty() {
        return String::new();
    }
    format!(
        "<img class=\"{}\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
        escape(class),
        safe_url(src),
        escape(alt)
    )
}

/// Avatar image with an initials fallback.
pub fn avatar(src: &str, name: &str, initials: &str) -> String {
    if src.is_empty() {
        format!(
            "<span class=\"avatar avatar-fallback\" aria-label=\"{}\">{}</span>",
            escape(name),
            escape(initials)
        )
    } else {
        image(src, name, "avatar")
    }
}

pub fn badges(items: &[String], class: &str) -> String {
    if items.is_empty() {
        return String::new();
    }
    let inner = items
        .iter()
        .map(|item| format!("<li class=\"{}\">{}</li>", escape(class), escape(item)))
        .collect::<String>();
    format!("<ul class=\"badges\">{}</ul>", inner)
}

/// Plain text to paragraphs; blank lines separate paragraphs, single newlines
/// become `<br>`.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let lines = p.lines().map(escape).collect::<Vec<_>>().join("<br>");
            format!("<p>{}</p>", lines)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_html_metacharacters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn safe_url_blocks_script_urls() {
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url(" JavaScript:alert(1)"), "#");
        assert_eq!(safe_url("https://x.com/?a=1&b=2"), "https://x.com/?a=1&amp;b=2");
        assert_eq!(safe_url("mailto:a@b.c"), "mailto:a@b.c");
        assert_eq!(safe_url("/projects/1"), "/projects/1");
    }

    #[test]
    fn image_is_empty_without_source() {
        assert_eq!(image("", "alt", "c"), "");
    }

    #[test]
    fn avatar_falls_back_to_initials() {
        let html = avatar("", "Alice Liddell", "AL");
        assert!(html.contains("avatar-fallback"));
        assert!(html.contains(">AL<"));
        assert!(avatar("https://img/a.png", "Alice", "A").starts_with("<img"));
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(
            paragraphs("first line\nsecond\n\n<b>next</b>\n\n\n"),
            "<p>first line<br>second</p><p>&lt;b&gt;next&lt;/b&gt;</p>"
        );
        assert_eq!(paragraphs(""), "");
    }

    #[test]
    fn document_escapes_title() {
        let html = document("A & B", "body{}", "theme", "<main></main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<main></main>"));
    }
}
