use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

static CAL_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cal\.com/(.+)").expect("cal.com path pattern"));

/// Template-agnostic view model every renderer consumes.
///
/// Built fresh from a [`RawProfile`](super::raw_profile::RawProfile) for each
/// request. List fields are never absent: an upstream `null` becomes `[]`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Alice Liddell")]
    pub name: String,
    #[schema(example = "AL")]
    pub initials: String,
    pub url: String,
    #[schema(example = "Oxford, England")]
    pub location: String,
    pub location_link: String,
    pub avatar_url: String,
    /// Short header line.
    pub description: String,
    /// Long-form about text, may contain markdown.
    pub summary: String,
    pub navbar: Vec<NavItem>,
    pub skills: Vec<String>,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certificates: Vec<CertificateEntry>,
    pub contact: Contact,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub href: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: String,
    pub company: String,
    pub title: String,
    pub href: String,
    pub logo_url: String,
    pub badges: Vec<String>,
    #[schema(example = "2021")]
    pub start: String,
    /// `None` means the position is ongoing.
    pub end: Option<String>,
    pub description: String,
}

impl WorkEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end.as_deref().unwrap_or("Present"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub href: String,
    pub logo_url: String,
    pub start: String,
    /// Empty when the upstream has no end date.
    pub end: String,
}

impl EducationEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(example = "2022 - Present")]
    pub dates: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub video: String,
    pub links: Vec<EntryLink>,
    pub href: String,
    pub role: String,
    pub status: String,
    pub kpis: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateEntry {
    pub title: String,
    pub description: String,
    pub location: String,
    pub dates: String,
    pub image: String,
    pub links: Vec<EntryLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryLink {
    #[serde(rename = "type")]
    #[schema(example = "Website")]
    pub kind: String,
    pub href: String,
    pub link_title: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    /// Keyed by lowercased platform title.
    pub social: BTreeMap<String, SocialLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub navbar: bool,
}

impl PortfolioData {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    pub fn social_link(&self, platform: &str) -> Option<&SocialLink> {
        self.contact.social.get(&platform.to_lowercase())
    }

    /// Account name from the GitHub social link, e.g. `octocat` for
    /// `github.com/octocat/`.
    pub fn github_username(&self) -> Option<String> {
        let url = &self.social_link("github")?.url;
        let without_scheme = url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(url.as_str());

        without_scheme
            .split(['/', '?', '#'])
            .skip(1)
            .find(|segment| !segment.is_empty())
            .map(str::to_string)
    }

    /// Booking path on cal.com, falling back to the portfolio username.
    pub fn cal_link(&self) -> String {
        self.contact
            .social
            .values()
            .find(|link| link.url.contains("cal.com"))
            .map(|link| {
                CAL_PATH
                    .captures(&link.url)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| self.username.clone())
            })
            .unwrap_or_else(|| self.username.clone())
    }

    pub fn find_project(&self, id: &str) -> Option<&ProjectEntry> {
        if id.is_empty() {
            return None;
        }
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_work(&self, id: &str) -> Option<&WorkEntry> {
        if id.is_empty() {
            return None;
        }
        self.work.iter().find(|w| w.id == id)
    }
}
