use crate::content::project::ProjectIndex;
use crate::content::{ContentError, Project, ProjectDetail};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

const INDEX_FILE: &str = "projects.json";

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

/// The loaded project collection.
#[derive(Debug, Clone)]
pub struct ContentStore {
    projects: Vec<Project>,
    projects_dir: PathBuf,
}

impl ContentStore {
    /// Load `data_dir/projects/projects.json`.
    pub fn load(data_dir: &Path) -> Result<Self, ContentError> {
        let projects_dir = data_dir.join("projects");
        let index_path = projects_dir.join(INDEX_FILE);

        let raw = std::fs::read_to_string(&index_path).map_err(|source| ContentError::Read {
            path: index_path.clone(),
            source,
        })?;
        let index: ProjectIndex =
            serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
                path: index_path.clone(),
                source,
            })?;

        if index.projects.is_empty() {
            return Err(ContentError::Empty(index_path));
        }

        let store = Self::from_projects(index.projects, projects_dir)?;
        info!("Loaded {} projects from {}", store.projects.len(), index_path.display());
        Ok(store)
    }

    /// Build a store from already-parsed projects.
    ///
    /// Slugs must be unique and filesystem-safe since each becomes a
    /// directory in the build output.
    pub fn from_projects(
        projects: Vec<Project>,
        projects_dir: impl Into<PathBuf>,
    ) -> Result<Self, ContentError> {
        let slug_regex =
            SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid regex"));

        let mut seen = HashSet::new();
        for project in &projects {
            if !slug_regex.is_match(&project.slug) {
                return Err(ContentError::InvalidSlug(project.slug.clone()));
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(project.slug.clone()));
            }
        }

        Ok(Self {
            projects,
            projects_dir: projects_dir.into(),
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find_project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Load the optional detail file for a known project.
    ///
    /// Unknown slugs, missing files and malformed files all yield `None`;
    /// the page then renders without its long-form sections.
    pub fn detail(&self, slug: &str) -> Option<ProjectDetail> {
        let project = self.find_project(slug)?;
        let path = self.projects_dir.join(format!("{}.json", project.slug));

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("No detail file for '{}' ({}): {}", slug, path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!("Ignoring malformed detail file {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LocalizedText, ProjectStatus};
    use crate::i18n::Locale;
    use tempfile::TempDir;

    // ==================== Helper Functions ====================

    fn project(slug: &str) -> Project {
        Project {
            id: slug.to_string(),
            slug: slug.to_string(),
            name: LocalizedText::from([(Locale::Ja, "名前"), (Locale::En, "Name")]),
            short_description: LocalizedText::default(),
            status: ProjectStatus::Completed,
            tags: vec![],
            icon: None,
        }
    }

    fn write_index(dir: &TempDir, json: &str) {
        let projects_dir = dir.path().join("projects");
        std::fs::create_dir_all(&projects_dir).unwrap();
        std::fs::write(projects_dir.join("projects.json"), json).unwrap();
    }

    const INDEX: &str = r#"{"projects": [
        {"id": "1", "slug": "alpha", "name": {"ja": "アルファ", "en": "Alpha"},
         "shortDescription": {"ja": "a", "en": "a"}, "status": "completed"},
        {"id": "2", "slug": "beta", "name": {"ja": "ベータ", "en": "Beta"},
         "shortDescription": {"ja": "b", "en": "b"}, "status": "in-progress"}
    ]}"#;

    // ==================== Load Tests ====================

    #[test]
    fn test_load_index() {
        let dir = TempDir::new().unwrap();
        write_index(&dir, INDEX);

        let store = ContentStore::load(dir.path()).expect("Should load");
        assert_eq!(store.projects().len(), 2);
        assert_eq!(
            store.find_project("beta").unwrap().name.get(Locale::En),
            "Beta"
        );
    }

    #[test]
    fn test_load_missing_index_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = ContentStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_index_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_index(&dir, r#"{"projects": [ {"slug": }"#);
        let err = ContentStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_load_empty_index_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_index(&dir, r#"{"projects": []}"#);
        let err = ContentStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Empty(_)));
    }

    // ==================== Slug Validation Tests ====================

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = ContentStore::from_projects(vec![project("alpha"), project("alpha")], "x")
            .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(s) if s == "alpha"));
    }

    #[test]
    fn test_unsafe_slug_rejected() {
        for slug in ["../etc", "a/b", "", "Alpha", "-lead"] {
            let result = ContentStore::from_projects(vec![project(slug)], "x");
            assert!(
                matches!(result, Err(ContentError::InvalidSlug(_))),
                "{:?} should be rejected",
                slug
            );
        }
    }

    #[test]
    fn test_find_project_unknown() {
        let store = ContentStore::from_projects(vec![project("alpha")], "x").unwrap();
        assert!(store.find_project("gamma").is_none());
    }

    // ==================== Detail Tests ====================

    #[test]
    fn test_detail_loaded_when_present() {
        let dir = TempDir::new().unwrap();
        write_index(&dir, INDEX);
        std::fs::write(
            dir.path().join("projects").join("alpha.json"),
            r#"{"fullDescription": {"ja": "詳細", "en": "Details"}, "techStack": ["Rust"]}"#,
        )
        .unwrap();

        let store = ContentStore::load(dir.path()).unwrap();
        let detail = store.detail("alpha").expect("detail present");
        assert_eq!(detail.full_description.get(Locale::En), "Details");
    }

    #[test]
    fn test_detail_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        write_index(&dir, INDEX);
        let store = ContentStore::load(dir.path()).unwrap();
        assert!(store.detail("beta").is_none());
    }

    #[test]
    fn test_detail_malformed_file_is_none() {
        let dir = TempDir::new().unwrap();
        write_index(&dir, INDEX);
        std::fs::write(dir.path().join("projects").join("alpha.json"), "oops").unwrap();
        let store = ContentStore::load(dir.path()).unwrap();
        assert!(store.detail("alpha").is_none());
    }

    #[test]
    fn test_detail_unknown_slug_is_none() {
        let dir = TempDir::new().unwrap();
        write_index(&dir, INDEX);
        let store = ContentStore::load(dir.path()).unwrap();
        assert!(store.detail("projects").is_none());
    }
}
