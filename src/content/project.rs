use crate::i18n::Locale;
use crate::routing::Slugged;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A string with one value per locale tag.
///
/// Stored by tag rather than by `Locale` so content files may carry
/// languages the site does not publish yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Value for `locale`, falling back to the default locale, then "".
    pub fn get(&self, locale: Locale) -> &str {
        self.0
            .get(locale.code())
            .or_else(|| self.0.get(Locale::DEFAULT.code()))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl<const N: usize> From<[(Locale, &str); N]> for LocalizedText {
    fn from(values: [(Locale, &str); N]) -> Self {
        Self(
            values
                .into_iter()
                .map(|(locale, text)| (locale.code().to_string(), text.to_string()))
                .collect(),
        )
    }
}

/// A list of strings per locale tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedList(BTreeMap<String, Vec<String>>);

impl LocalizedList {
    pub fn get(&self, locale: Locale) -> &[String] {
        self.0
            .get(locale.code())
            .or_else(|| self.0.get(Locale::DEFAULT.code()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    #[serde(alias = "inProgress")]
    InProgress,
}

impl ProjectStatus {
    /// Translation key for the status badge.
    pub fn label_key(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "projects.status.completed",
            ProjectStatus::InProgress => "projects.status.inProgress",
        }
    }
}

/// One entry of the project index (`projects/projects.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub name: LocalizedText,
    pub short_description: LocalizedText,
    pub status: ProjectStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Slugged for Project {
    fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectIndex {
    pub projects: Vec<Project>,
}

/// Optional long-form content for a project (`projects/{slug}.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub full_description: LocalizedText,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<LocalizedText>,
    #[serde(default)]
    pub results: Option<LocalizedList>,
}
