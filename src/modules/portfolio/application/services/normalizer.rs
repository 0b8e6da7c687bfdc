use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::portfolio::domain::entities::{
    CertificateEntry, Contact, EducationEntry, EntryLink, PortfolioData, ProjectEntry, SocialLink,
    WorkEntry,
};
use crate::portfolio::domain::raw_profile::{
    non_empty, RawCertificate, RawEducation, RawExperience, RawLink, RawProfile, RawProject,
    RawSkillsetItem,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("invalid date in {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Map an upstream profile record onto the stable [`PortfolioData`] shape.
///
/// Entries without their primary display field are dropped before any of their
/// dates are read. The only failure is an unreadable date on a kept entry.
pub fn transform(raw: &RawProfile) -> Result<PortfolioData, NormalizeError> {
    let first_name = text(&raw.first_name);
    let last_name = text(&raw.last_name);

    let name = format!("{} {}", first_name, last_name).trim().to_string();
    let initials = first_char(&first_name)
        .chain(first_char(&last_name))
        .flat_map(char::to_uppercase)
        .collect::<String>();

    let skills = skill_names(raw.skillset.as_deref());

    let work = raw
        .experience
        .iter()
        .flatten()
        .filter(|w| has_text(&w.company_name))
        .map(work_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let education = raw
        .education
        .iter()
        .flatten()
        .filter(|e| has_text(&e.edu_from))
        .map(education_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let projects = raw
        .projects
        .iter()
        .flatten()
        .filter(|p| has_text(&p.title))
        .map(project_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let certificates = raw
        .certificates
        .iter()
        .flatten()
        .filter(|c| has_text(&c.title))
        .map(certificate_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let contact = Contact {
        email: text(&raw.email),
        social: social_links(raw.links.as_deref()),
    };

    Ok(PortfolioData {
        username: text(&raw.user_name),
        name,
        initials,
        url: String::new(),
        location: location(raw),
        location_link: String::new(),
        avatar_url: text(&raw.profile_image),
        description: text(&raw.header_text),
        summary: text(&raw.description),
        navbar: Vec::new(),
        skills,
        work,
        education,
        projects,
        certificates,
        contact,
    })
}

fn work_entry(e: &RawExperience) -> Result<WorkEntry, NormalizeError> {
    Ok(WorkEntry {
        id: text(&e.id),
        company: text(&e.company_name),
        title: text(&e.title),
        href: text(&e.company_website),
        logo_url: text(&e.logo_url),
        badges: skill_names(e.user_experience_skillsets.as_deref()),
        start: year_of("experience.startedAt", &e.started_at)?.unwrap_or_default(),
        end: year_of("experience.endAt", &e.end_at)?,
        description: text(&e.description),
    })
}

// Unlike work, a missing end year is an empty string here.
fn education_entry(e: &RawEducation) -> Result<EducationEntry, NormalizeError> {
    Ok(EducationEntry {
        school: text(&e.edu_from),
        degree: e
            .degree
            .as_ref()
            .map(|d| text(&d.name))
            .unwrap_or_default(),
        href: text(&e.edu_from_link),
        logo_url: text(&e.logo_url),
        start: year_of("education.startedAt", &e.started_at)?.unwrap_or_default(),
        end: year_of("education.endAt", &e.end_at)?.unwrap_or_default(),
    })
}

fn project_entry(p: &RawProject) -> Result<ProjectEntry, NormalizeError> {
    let start = year_of("projects.startedAt", &p.started_at)?.unwrap_or_default();
    let end = year_of("projects.endAt", &p.end_at)?.unwrap_or_else(|| "Present".to_string());

    let mut links = p
        .project_links
        .iter()
        .flatten()
        .filter_map(|link| {
            let href = non_empty(link.link_url.as_deref())?;
            let title = non_empty(link.link_title.as_deref());
            Some(EntryLink {
                kind: title.unwrap_or("Website").to_string(),
                href: href.to_string(),
                link_title: title.map(str::to_string),
            })
        })
        .collect::<Vec<_>>();

    if let Some(site) = non_empty(p.link.as_deref()) {
        links.insert(
            0,
            EntryLink {
                kind: "Website".to_string(),
                href: site.to_string(),
                link_title: Some("Website".to_string()),
            },
        );
    }

    let kpis = p
        .project_kpi
        .iter()
        .flatten()
        .filter_map(|kpi| non_empty(kpi.point.as_deref()).map(str::to_string))
        .collect();

    Ok(ProjectEntry {
        id: text(&p.id),
        title: text(&p.title),
        description: text(&p.description),
        dates: format!("{} - {}", start, end),
        technologies: skill_names(p.project_skillset.as_deref()),
        image: text(&p.preview_image_url),
        video: String::new(),
        links,
        href: text(&p.link),
        role: text(&p.role),
        status: text(&p.status),
        kpis,
    })
}

fn certificate_entry(c: &RawCertificate) -> Result<CertificateEntry, NormalizeError> {
    let start = year_of("certificates.startedAt", &c.started_at)?.unwrap_or_default();
    let dates = match year_of("certificates.endAt", &c.end_at)? {
        Some(end) => format!("{} - {}", start, end),
        None => start,
    };

    let links = non_empty(c.link.as_deref())
        .map(|href| {
            let name = non_empty(c.link_name.as_deref());
            vec![EntryLink {
                kind: name.unwrap_or("Open Link").to_string(),
                href: href.to_string(),
                link_title: name.map(str::to_string),
            }]
        })
        .unwrap_or_default();

    Ok(CertificateEntry {
        title: text(&c.title),
        description: text(&c.description),
        location: text(&c.location),
        dates,
        image: text(&c.logo_url),
        links,
    })
}

fn social_links(links: Option<&[RawLink]>) -> BTreeMap<String, SocialLink> {
    let mut social = BTreeMap::new();

    for link in links.unwrap_or_default() {
        let (Some(title), Some(url)) = (
            non_empty(link.link_title.as_deref()),
            non_empty(link.link_url.as_deref()),
        ) else {
            continue;
        };

        // Last one wins on duplicate titles.
        social.insert(
            title.to_lowercase(),
            SocialLink {
                name: title.to_string(),
                url: url.to_string(),
                navbar: true,
            },
        );
    }

    social
}

fn skill_names(items: Option<&[RawSkillsetItem]>) -> Vec<String> {
    items
        .unwrap_or_default()
        .iter()
        .filter_map(RawSkillsetItem::skill_name)
        .map(str::to_string)
        .collect()
}

fn location(raw: &RawProfile) -> String {
    [&raw.city, &raw.state, &raw.country]
        .into_iter()
        .filter_map(|part| non_empty(part.as_deref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn first_char(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().take(1)
}

/// Calendar year (UTC) of an upstream date, `None` when the date is absent.
fn year_of(field: &'static str, value: &Option<String>) -> Result<Option<String>, NormalizeError> {
    let Some(value) = non_empty(value.as_deref()) else {
        return Ok(None);
    };

    parse_year(value.trim())
        .map(|year| Some(year.to_string()))
        .ok_or_else(|| NormalizeError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn parse_year(value: &str) -> Option<i32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).year());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.year());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.year());
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
        return Some(date.year());
    }

    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse().ok();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::raw_profile::{
        RawDegree, RawProjectKpi, RawProjectLink, RawSkill,
    };
    use serde_json::json;

    fn skill(name: Option<&str>) -> RawSkillsetItem {
        RawSkillsetItem {
            id: None,
            skill: Some(RawSkill {
                id: None,
                name: name.map(str::to_string),
            }),
        }
    }

    fn link(title: &str, url: &str) -> RawLink {
        RawLink {
            id: None,
            link_title: Some(title.to_string()),
            link_url: Some(url.to_string()),
        }
    }

    #[test]
    fn empty_profile_yields_empty_lists() {
        let data = transform(&RawProfile::default()).unwrap();

        assert!(data.skills.is_empty());
        assert!(data.work.is_empty());
        assert!(data.education.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.certificates.is_empty());
        assert!(data.navbar.is_empty());
        assert!(data.contact.social.is_empty());
        assert_eq!(data.name, "");
        assert_eq!(data.initials, "");
    }

    #[test]
    fn empty_profile_serializes_lists_as_arrays() {
        let json = serde_json::to_value(transform(&RawProfile::default()).unwrap()).unwrap();

        for key in ["skills", "work", "education", "projects", "certificates", "navbar"] {
            assert!(json[key].is_array(), "{key} should be an array");
        }
    }

    #[test]
    fn name_and_initials_from_both_parts() {
        let raw = RawProfile {
            first_name: Some("alice".into()),
            last_name: Some("liddell".into()),
            ..Default::default()
        };
        let data = transform(&raw).unwrap();

        assert_eq!(data.name, "alice liddell");
        assert_eq!(data.initials, "AL");
    }

    #[test]
    fn name_and_initials_tolerate_missing_last_name() {
        let raw = RawProfile {
            first_name: Some("Bob".into()),
            last_name: None,
            ..Default::default()
        };
        let data = transform(&raw).unwrap();

        assert_eq!(data.name, "Bob");
        assert_eq!(data.initials, "B");
    }

    #[test]
    fn name_tolerates_missing_first_name() {
        let raw = RawProfile {
            last_name: Some("Smith".into()),
            ..Default::default()
        };
        let data = transform(&raw).unwrap();

        assert_eq!(data.name, "Smith");
        assert_eq!(data.initials, "S");
    }

    #[test]
    fn scalar_fields_are_mapped() {
        let raw = RawProfile {
            user_name: Some("alice".into()),
            profile_image: Some("https://img/alice.png".into()),
            header_text: Some("Builder".into()),
            description: Some("Long **bio**".into()),
            email: Some("alice@example.com".into()),
            city: Some("Oxford".into()),
            country: Some("England".into()),
            state: Some(String::new()),
            ..Default::default()
        };
        let data = transform(&raw).unwrap();

        assert_eq!(data.username, "alice");
        assert_eq!(data.avatar_url, "https://img/alice.png");
        assert_eq!(data.description, "Builder");
        assert_eq!(data.summary, "Long **bio**");
        assert_eq!(data.contact.email, "alice@example.com");
        assert_eq!(data.location, "Oxford, England");
        assert_eq!(data.url, "");
    }

    #[test]
    fn skills_skip_entries_without_name() {
        let raw = RawProfile {
            skillset: Some(vec![
                skill(Some("Rust")),
                skill(None),
                RawSkillsetItem::default(),
                skill(Some("")),
                skill(Some("Go")),
            ]),
            ..Default::default()
        };

        assert_eq!(transform(&raw).unwrap().skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn work_without_end_date_is_open() {
        let raw = RawProfile {
            experience: Some(vec![RawExperience {
                id: Some("exp-1".into()),
                company_name: Some("Acme".into()),
                title: Some("Engineer".into()),
                started_at: Some("2021-03-01T00:00:00.000Z".into()),
                end_at: None,
                user_experience_skillsets: Some(vec![skill(Some("Rust"))]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let data = transform(&raw).unwrap();
        let work = &data.work[0];

        assert_eq!(work.start, "2021");
        assert_eq!(work.end, None);
        assert_eq!(work.period(), "2021 - Present");
        assert_eq!(work.badges, vec!["Rust"]);

        let json = serde_json::to_value(&data).unwrap();
        assert!(json["work"][0]["end"].is_null());
    }

    #[test]
    fn education_without_end_date_is_empty_string() {
        let raw = RawProfile {
            education: Some(vec![RawEducation {
                edu_from: Some("MIT".into()),
                degree: Some(RawDegree {
                    id: None,
                    name: Some("BSc".into()),
                }),
                started_at: Some("2015-09-01".into()),
                end_at: None,
                ..Default::default()
            }]),
            ..Default::default()
        };
        let edu = &transform(&raw).unwrap().education[0];

        assert_eq!(edu.school, "MIT");
        assert_eq!(edu.degree, "BSc");
        assert_eq!(edu.start, "2015");
        assert_eq!(edu.end, "");
    }

    #[test]
    fn entries_missing_primary_field_are_dropped() {
        let raw = RawProfile {
            experience: Some(vec![
                RawExperience::default(),
                RawExperience {
                    company_name: Some("Kept".into()),
                    ..Default::default()
                },
            ]),
            education: Some(vec![RawEducation::default()]),
            projects: Some(vec![RawProject {
                title: Some(String::new()),
                ..Default::default()
            }]),
            certificates: Some(vec![RawCertificate::default()]),
            ..Default::default()
        };
        let data = transform(&raw).unwrap();

        assert_eq!(data.work.len(), 1);
        assert_eq!(data.work[0].company, "Kept");
        assert!(data.education.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.certificates.is_empty());
    }

    #[test]
    fn project_link_is_prepended_as_website() {
        let raw = RawProfile {
            projects: Some(vec![RawProject {
                title: Some("Atlas".into()),
                link: Some("https://x.com".into()),
                project_links: Some(vec![
                    RawProjectLink {
                        id: None,
                        link_title: Some("GitHub".into()),
                        link_url: Some("https://github.com/x".into()),
                    },
                    RawProjectLink {
                        id: None,
                        link_title: Some("Broken".into()),
                        link_url: None,
                    },
                ]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let project = &transform(&raw).unwrap().projects[0];

        assert_eq!(project.links.len(), 2);
        assert_eq!(project.links[0].kind, "Website");
        assert_eq!(project.links[0].href, "https://x.com");
        assert_eq!(project.links[1].kind, "GitHub");
        assert_eq!(project.links[1].href, "https://github.com/x");
        assert_eq!(project.href, "https://x.com");
    }

    #[test]
    fn project_link_without_title_defaults_to_website() {
        let raw = RawProfile {
            projects: Some(vec![RawProject {
                title: Some("Atlas".into()),
                project_links: Some(vec![RawProjectLink {
                    id: None,
                    link_title: None,
                    link_url: Some("https://docs.x".into()),
                }]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let project = &transform(&raw).unwrap().projects[0];

        assert_eq!(project.links[0].kind, "Website");
        assert_eq!(project.links[0].link_title, None);
    }

    #[test]
    fn project_dates_kpis_and_technologies() {
        let raw = RawProfile {
            projects: Some(vec![RawProject {
                id: Some("p1".into()),
                title: Some("Atlas".into()),
                started_at: Some("2022-01-10".into()),
                project_skillset: Some(vec![skill(Some("Rust")), skill(None)]),
                project_kpi: Some(vec![
                    RawProjectKpi {
                        id: None,
                        point: Some("2x throughput".into()),
                        kind: None,
                    },
                    RawProjectKpi::default(),
                ]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let project = &transform(&raw).unwrap().projects[0];

        assert_eq!(project.dates, "2022 - Present");
        assert_eq!(project.technologies, vec!["Rust"]);
        assert_eq!(project.kpis, vec!["2x throughput"]);
        assert_eq!(project.id, "p1");
        assert!(project.links.is_empty());
    }

    #[test]
    fn project_without_any_dates() {
        let raw = RawProfile {
            projects: Some(vec![RawProject {
                title: Some("Atlas".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert_eq!(transform(&raw).unwrap().projects[0].dates, " - Present");
    }

    #[test]
    fn certificate_link_and_dates() {
        let raw = RawProfile {
            certificates: Some(vec![
                RawCertificate {
                    title: Some("AWS".into()),
                    link: Some("https://cert/1".into()),
                    link_name: None,
                    started_at: Some("2020-05-05".into()),
                    end_at: Some("2023-05-05".into()),
                    ..Default::default()
                },
                RawCertificate {
                    title: Some("CKA".into()),
                    link: Some("https://cert/2".into()),
                    link_name: Some("Credential".into()),
                    started_at: Some("2021-01-01".into()),
                    ..Default::default()
                },
                RawCertificate {
                    title: Some("No link".into()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        let certs = transform(&raw).unwrap().certificates;

        assert_eq!(certs[0].dates, "2020 - 2023");
        assert_eq!(certs[0].links[0].kind, "Open Link");
        assert_eq!(certs[0].links[0].link_title, None);
        assert_eq!(certs[1].dates, "2021");
        assert_eq!(certs[1].links[0].kind, "Credential");
        assert!(certs[2].links.is_empty());
        assert_eq!(certs[2].dates, "");
    }

    #[test]
    fn social_links_are_keyed_by_lowercased_title_last_wins() {
        let raw = RawProfile {
            links: Some(vec![
                link("GitHub", "https://github.com/first"),
                link("LinkedIn", "https://linkedin.com/in/a"),
                link("github", "https://github.com/second"),
                link("", "https://nowhere"),
                link("Blog", ""),
            ]),
            ..Default::default()
        };
        let social = transform(&raw).unwrap().contact.social;

        assert_eq!(social.len(), 2);
        let github = &social["github"];
        assert_eq!(github.url, "https://github.com/second");
        assert_eq!(github.name, "github");
        assert!(github.navbar);
        assert!(social.contains_key("linkedin"));
    }

    #[test]
    fn unparseable_date_is_an_error() {
        let raw = RawProfile {
            experience: Some(vec![RawExperience {
                company_name: Some("Acme".into()),
                started_at: Some("not-a-date".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        assert_eq!(
            transform(&raw),
            Err(NormalizeError::InvalidDate {
                field: "experience.startedAt",
                value: "not-a-date".to_string(),
            })
        );
    }

    #[test]
    fn dropped_entries_never_fail_on_their_dates() {
        let raw = RawProfile {
            experience: Some(vec![
                RawExperience {
                    company_name: Some("Acme".into()),
                    started_at: Some("2020-01-01".into()),
                    ..Default::default()
                },
                RawExperience {
                    company_name: None,
                    started_at: Some("garbage".into()),
                    ..Default::default()
                },
            ]),
            education: Some(vec![RawEducation {
                edu_from: Some(String::new()),
                end_at: Some("garbage".into()),
                ..Default::default()
            }]),
            projects: Some(vec![RawProject {
                title: None,
                started_at: Some("garbage".into()),
                ..Default::default()
            }]),
            certificates: Some(vec![RawCertificate {
                title: None,
                end_at: Some("garbage".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let data = transform(&raw).unwrap();

        assert_eq!(data.work.len(), 1);
        assert_eq!(data.work[0].company, "Acme");
        assert!(data.education.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.certificates.is_empty());
    }

    #[test]
    fn accepted_date_formats() {
        for (input, year) in [
            ("2021-03-01T00:00:00.000Z", 2021),
            ("2021-12-31T23:30:00-05:00", 2022),
            ("2019-06-15T08:00:00", 2019),
            ("2019-06-15 08:00:00", 2019),
            ("2018-02-03", 2018),
            ("2017-11", 2017),
            ("2016", 2016),
        ] {
            assert_eq!(parse_year(input), Some(year), "input {input}");
        }
        assert_eq!(parse_year("March 2020"), None);
    }

    #[test]
    fn transforms_realistic_payload() {
        let raw: RawProfile = serde_json::from_value(json!({
            "userName": "alice",
            "firstName": "Alice",
            "lastName": null,
            "skillset": [{ "skill": { "name": "Rust" } }, { "skill": null }],
            "experience": null,
            "projects": [{
                "id": "p1",
                "title": "Atlas",
                "link": "https://atlas.dev",
                "projectLinks": [{ "linkTitle": "GitHub", "linkUrl": "https://github.com/a/atlas" }],
                "startedAt": "2023-01-01T00:00:00.000Z",
                "endAt": "2024-02-01T00:00:00.000Z"
            }],
            "links": [{ "linkTitle": "GitHub", "linkUrl": "https://github.com/a" }]
        }))
        .unwrap();
        let data = transform(&raw).unwrap();

        assert_eq!(data.name, "Alice");
        assert_eq!(data.skills, vec!["Rust"]);
        assert!(data.work.is_empty());
        assert_eq!(data.projects[0].dates, "2023 - 2024");
        assert_eq!(data.projects[0].links[0].href, "https://atlas.dev");
        assert_eq!(data.github_username().as_deref(), Some("a"));
    }
}
