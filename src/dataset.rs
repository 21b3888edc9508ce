//! JSON datasets of cases, projects and the records quick search reaches.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::{Artefact, Bookmark, LegalCase, Project, User};
use crate::errors::{Error, Result, ResultExt};
use crate::repository::InMemoryRepository;

const SAMPLE: &str = include_str!("../data/sample.json");

/// Every collection, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub cases: Vec<LegalCase>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub artefacts: Vec<Artefact>,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Dataset {
    /// The built-in sample collection.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE).context("Built-in sample dataset")
    }

    /// Read a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading dataset");
        let content = fs::read_to_string(path)
            .map_err(Error::from)
            .context(format!("Failed to read dataset {}", path.display()))?;
        Self::from_json(&content).context(format!("Invalid dataset {}", path.display()))
    }

    /// Parse and validate a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Ids must be unique within each collection.
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids("case", self.cases.iter().map(|c| c.id.as_str()))?;
        ensure_unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("artefact", self.artefacts.iter().map(|a| a.id.as_str()))?;
        ensure_unique_ids("bookmark", self.bookmarks.iter().map(|b| b.id.as_str()))?;
        ensure_unique_ids("user", self.users.iter().map(|u| u.id.as_str()))
    }

    /// Display name of a user, if known.
    pub fn user_name(&self, id: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .map(|user| user.name.as_str())
    }

    /// Split into one repository per collection.
    pub fn into_repositories(
        self,
    ) -> Result<(InMemoryRepository<LegalCase>, InMemoryRepository<Project>)> {
        Ok((
            InMemoryRepository::from_records(self.cases)?,
            InMemoryRepository::from_records(self.projects)?,
        ))
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::Dataset(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use indoc::indoc;

    #[test]
    fn test_sample_loads() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.cases.len(), 10);
        assert!(!dataset.projects.is_empty());
        assert!(dataset.projects.iter().any(|p| p.case_number.is_none()));
        assert_eq!(dataset.artefacts.len(), 3);
        assert_eq!(dataset.bookmarks.len(), 2);
        assert_eq!(dataset.user_name("jurist-1"), Some("Erik Jurist"));
        assert_eq!(dataset.user_name("okänd"), None);
    }

    #[test]
    fn test_sample_artefacts_belong_to_listed_projects() {
        let dataset = Dataset::sample().unwrap();
        for artefact in &dataset.artefacts {
            let project = dataset
                .projects
                .iter()
                .find(|p| p.id == artefact.project_id)
                .unwrap();
            assert!(project.artefacts.contains(&artefact.id));
        }
    }

    #[test]
    fn test_duplicate_bookmark_ids_rejected() {
        let json = indoc! {r#"
            {"bookmarks": [
              {"id": "bm", "url": "https://a.se", "title": "A", "createdBy": "u", "createdAt": "2024-01-01"},
              {"id": "bm", "url": "https://b.se", "title": "B", "createdBy": "u", "createdAt": "2024-01-02"}
            ]}
        "#};
        let err = Dataset::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate bookmark id 'bm'"));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let dataset = Dataset::from_json("{}").unwrap();
        assert!(dataset.cases.is_empty());
        assert!(dataset.projects.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = indoc! {r#"
            {
              "projects": [
                {"id": "p", "name": "A", "status": "active", "priority": "normal",
                 "ownerId": "u", "createdAt": "2024-01-01", "updatedAt": "2024-01-01"},
                {"id": "p", "name": "B", "status": "pending", "priority": "normal",
                 "ownerId": "u", "createdAt": "2024-01-02", "updatedAt": "2024-01-02"}
              ]
            }
        "#};
        let err = Dataset::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate project id 'p'"));
    }

    #[test]
    fn test_unknown_priority_is_a_parse_error() {
        let json = indoc! {r#"
            {"projects": [{"id": "p", "name": "A", "status": "active", "priority": "akut",
              "ownerId": "u", "createdAt": "2024-01-01", "updatedAt": "2024-01-01"}]}
        "#};
        assert!(matches!(Dataset::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_into_repositories() {
        let (cases, projects) = Dataset::sample().unwrap().into_repositories().unwrap();
        assert_eq!(cases.len(), 10);
        assert!(projects.get("proj-1").is_some());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(Dataset::load(&path).unwrap().cases.len(), 10);

        let missing = dir.path().join("missing.json");
        assert!(Dataset::load(&missing).is_err());
    }
}
