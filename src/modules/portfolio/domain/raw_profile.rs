use serde::{Deserialize, Serialize};

// Wire shape of the upstream portfolio API. Every field is optional because the
// upstream omits, nulls or blanks fields freely.

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProfile {
    pub id: Option<String>,
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub header_text: Option<String>,
    pub header_image: Option<String>,
    pub profile_image: Option<String>,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub template: Option<RawTemplate>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub skillset: Option<Vec<RawSkillsetItem>>,
    pub projects: Option<Vec<RawProject>>,
    pub experience: Option<Vec<RawExperience>>,
    pub education: Option<Vec<RawEducation>>,
    pub certificates: Option<Vec<RawCertificate>>,
    pub links: Option<Vec<RawLink>>,
}

impl RawProfile {
    /// Identifier used to pick a template: `template.name`, else `templateId`.
    pub fn template_key(&self) -> Option<&str> {
        self.template
            .as_ref()
            .and_then(|t| non_empty(t.name.as_deref()))
            .or_else(|| non_empty(self.template_id.as_deref()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTemplate {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSkill {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Any `{ skill: { name } }` wrapper: user skillset, project skillset and
/// experience skillset entries all share it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSkillsetItem {
    pub id: Option<String>,
    pub skill: Option<RawSkill>,
}

impl RawSkillsetItem {
    pub fn skill_name(&self) -> Option<&str> {
        self.skill
            .as_ref()
            .and_then(|s| non_empty(s.name.as_deref()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawExperience {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_website: Option<String>,
    pub description: Option<String>,
    pub started_at: Option<String>,
    pub end_at: Option<String>,
    #[serde(rename = "logoURL")]
    pub logo_url: Option<String>,
    pub user_experience_skillsets: Option<Vec<RawSkillsetItem>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDegree {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEducation {
    pub id: Option<String>,
    pub edu_from: Option<String>,
    pub edu_from_link: Option<String>,
    pub started_at: Option<String>,
    pub end_at: Option<String>,
    #[serde(rename = "logoURL")]
    pub logo_url: Option<String>,
    pub degree: Option<RawDegree>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProjectLink {
    pub id: Option<String>,
    pub link_url: Option<String>,
    pub link_title: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProjectKpi {
    pub id: Option<String>,
    pub point: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProject {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub link_name: Option<String>,
    pub started_at: Option<String>,
    pub end_at: Option<String>,
    pub preview_image_url: Option<String>,
    pub role: Option<String>,
    pub team: Option<String>,
    pub status: Option<String>,
    pub project_links: Option<Vec<RawProjectLink>>,
    pub project_skillset: Option<Vec<RawSkillsetItem>>,
    #[serde(rename = "projectKPI")]
    pub project_kpi: Option<Vec<RawProjectKpi>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCertificate {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub link_name: Option<String>,
    pub started_at: Option<String>,
    pub end_at: Option<String>,
    #[serde(rename = "logoURL")]
    pub logo_url: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLink {
    pub id: Option<String>,
    pub link_url: Option<String>,
    pub link_title: Option<String>,
}

/// Upstream treats `""` and `null` the same way; so do we.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
