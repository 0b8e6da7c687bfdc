use std::collections::BTreeMap;

use crate::portfolio::domain::entities::{
    CertificateEntry, Contact, EducationEntry, EntryLink, NavItem, PortfolioData, ProjectEntry,
    SocialLink, WorkEntry,
};

fn social(name: &str, url: &str, navbar: bool) -> (String, SocialLink) {
    (
        name.to_lowercase(),
        SocialLink {
            name: name.to_string(),
            url: url.to_string(),
            navbar,
        },
    )
}

fn website(href: &str) -> EntryLink {
    EntryLink {
        kind: "Website".to_string(),
        href: href.to_string(),
        link_title: None,
    }
}

/// A fully populated portfolio: two jobs, two projects, one of everything
/// else, plus GitHub and cal.com social links.
pub fn sample_portfolio() -> PortfolioData {
    PortfolioData {
        username: "alice".to_string(),
        name: "Alice Liddell".to_string(),
        initials: "AL".to_string(),
        url: "https://alice.cofounds.in".to_string(),
        location: "Oxford, England".to_string(),
        location_link: String::new(),
        avatar_url: "https://cdn.example.com/alice.png".to_string(),
        description: "Engineer who follows rabbits".to_string(),
        summary: "I build things.\n\nMostly curious ones.".to_string(),
        navbar: vec![NavItem {
            href: "/".to_string(),
            label: "Home".to_string(),
        }],
        skills: vec!["Rust".to_string(), "TypeScript".to_string()],
        work: vec![
            WorkEntry {
                id: "exp-1".to_string(),
                company: "Wonderland Inc".to_string(),
                title: "Senior Engineer".to_string(),
                href: "https://wonderland.example".to_string(),
                logo_url: String::new(),
                badges: vec!["Rust".to_string()],
                start: "2021".to_string(),
                end: None,
                description: "Led the tea-party platform.".to_string(),
            },
            WorkEntry {
                id: "exp-2".to_string(),
                company: "Looking Glass Ltd".to_string(),
                title: "Engineer".to_string(),
                start: "2018".to_string(),
                end: Some("2021".to_string()),
                ..Default::default()
            },
        ],
        education: vec![EducationEntry {
            school: "Oxford".to_string(),
            degree: "BSc Mathematics".to_string(),
            start: "2014".to_string(),
            end: "2018".to_string(),
            ..Default::default()
        }],
        projects: vec![
            ProjectEntry {
                id: "proj-1".to_string(),
                title: "Looking Glass".to_string(),
                description: "A mirror-world renderer.".to_string(),
                dates: "2022 - Present".to_string(),
                technologies: vec!["Rust".to_string(), "WebGPU".to_string()],
                links: vec![website("https://glass.example")],
                href: "https://glass.example".to_string(),
                role: "Lead".to_string(),
                status: "Active".to_string(),
                kpis: vec!["Cut latency by 40%".to_string()],
                ..Default::default()
            },
            ProjectEntry {
                id: "proj-2".to_string(),
                title: "Rabbit Hole".to_string(),
                description: "Deep link explorer.".to_string(),
                dates: "2020 - 2021".to_string(),
                technologies: vec!["TypeScript".to_string()],
                ..Default::default()
            },
        ],
        certificates: vec![CertificateEntry {
            title: "Certified Croquet Player".to_string(),
            description: "Flamingo mallets only.".to_string(),
            location: "Queen's Court".to_string(),
            dates: "2020".to_string(),
            image: String::new(),
            links: vec![EntryLink {
                kind: "Credential".to_string(),
                href: "https://cert.example/1".to_string(),
                link_title: Some("Credential".to_string()),
            }],
        }],
        contact: Contact {
            email: "alice@example.com".to_string(),
            social: BTreeMap::from([
                social("GitHub", "https://github.com/alice", true),
                social("Cal.com", "https://cal.com/alice/intro", false),
                social("LinkedIn", "https://linkedin.com/in/alice", true),
            ]),
        },
    }
}
