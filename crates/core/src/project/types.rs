//! Project record types.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::keys;

/// A submitted project. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub repo_url: String,
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub description: String,
    pub submitter: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Project {
    /// Builds a new project from validated inputs.
    ///
    /// Generates a fresh v4 UUID and stamps the current epoch seconds.
    /// An empty title defaults to the repository name.
    pub fn new(
        repo_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        title: impl Into<String>,
        submitter: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let repo = repo.into();
        let title = title.into();

        Self {
            id: Uuid::new_v4(),
            repo_url: repo_url.into(),
            owner: owner.into(),
            title: if title.is_empty() { repo.clone() } else { title },
            repo,
            description: description.into(),
            submitter: submitter.into(),
            created_at: Utc::now().timestamp(),
        }
    }

    /// The composite sort key for this project.
    pub fn sort_key(&self) -> String {
        keys::project_sk(self.created_at, self.id)
    }
}

/// Payload accepted by the create endpoint.
///
/// Every field tolerates being absent or `null`; `repo_url` is the only one
/// that must survive validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub submitter: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateProject {
    fn field(value: &Option<String>) -> String {
        value.as_deref().unwrap_or_default().trim().to_string()
    }

    /// The trimmed repository URL, or an empty string when absent.
    pub fn repo_url(&self) -> String {
        Self::field(&self.repo_url)
    }

    /// The trimmed title, or an empty string when absent.
    pub fn title(&self) -> String {
        Self::field(&self.title)
    }

    /// The trimmed submitter, or an empty string when absent.
    pub fn submitter(&self) -> String {
        Self::field(&self.submitter)
    }

    /// The trimmed description, or an empty string when absent.
    pub fn description(&self) -> String {
        Self::field(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_title_to_repo() {
        let project = Project::new(
            "https://github.com/acme/widget",
            "acme",
            "widget",
            "",
            "",
            "",
        );

        assert_eq!(project.title, "widget");
        assert_eq!(project.owner, "acme");
        assert_eq!(project.repo, "widget");
    }

    #[test]
    fn test_new_keeps_explicit_title() {
        let project = Project::new(
            "https://github.com/acme/widget",
            "acme",
            "widget",
            "The Widget",
            "jo",
            "a widget",
        );

        assert_eq!(project.title, "The Widget");
        assert_eq!(project.submitter, "jo");
        assert_eq!(project.description, "a widget");
    }

    #[test]
    fn test_sort_key_uses_created_at_and_id() {
        let project = Project::new("https://github.com/acme/widget", "acme", "widget", "", "", "");
        assert_eq!(
            project.sort_key(),
            format!("{}#{}", project.created_at, project.id)
        );
    }

    #[test]
    fn test_serializes_created_at_as_camel_case() {
        let project = Project::new("https://github.com/acme/widget", "acme", "widget", "", "", "");
        let value = serde_json::to_value(&project).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_create_project_trims_and_defaults() {
        let payload: CreateProject =
            serde_json::from_str(r#"{"repo_url":"  https://github.com/a/b  ","title":null}"#)
                .unwrap();

        assert_eq!(payload.repo_url(), "https://github.com/a/b");
        assert_eq!(payload.title(), "");
        assert_eq!(payload.submitter(), "");
        assert_eq!(payload.description(), "");
    }
}
