use serde::Serialize;

/// Display metadata for a built-in template.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub tags: &'static [&'static str],
    pub features: &'static [&'static str],
    /// Section anchors in page order.
    pub sections: &'static [&'static str],
}
