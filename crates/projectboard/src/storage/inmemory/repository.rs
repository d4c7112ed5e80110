//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use projectboard_core::cursor::ContinuationKey;
use projectboard_core::project::{keys, Project};
use projectboard_core::storage::{ProjectPage, ProjectRepository, RepositoryError, Result};

/// In-memory storage backend for tests and local development.
///
/// Projects are held in a `BTreeMap` keyed by sort key, so the ordered map
/// stands in for the store's sort-key index. Data is lost when the
/// repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    projects: Arc<RwLock<BTreeMap<String, Project>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Continuation key shaped like the real store's: the fixed partition value
/// plus the sort key of the last item served.
fn continuation_key(sort_key: &str) -> ContinuationKey {
    let mut key = ContinuationKey::new();
    key.insert(
        "pk".to_string(),
        Value::String(keys::PARTITION_VALUE.to_string()),
    );
    key.insert("sk".to_string(), Value::String(sort_key.to_string()));
    key
}

/// Extracts the sort-key bound from a continuation key, if usable.
fn start_bound(exclusive_start: &Option<ContinuationKey>) -> Option<String> {
    exclusive_start
        .as_ref()?
        .get("sk")?
        .as_str()
        .map(String::from)
}

fn project_item(project: &Project) -> Result<Value> {
    serde_json::to_value(project).map_err(|e| RepositoryError::InvalidData(e.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryRepository {
    async fn create_project(&self, project: &Project) -> Result<()> {
        let mut projects = self.projects.write().await;
        projects.insert(project.sort_key(), project.clone());
        Ok(())
    }

    async fn query_projects(
        &self,
        limit: u32,
        exclusive_start: Option<ContinuationKey>,
    ) -> Result<ProjectPage> {
        let bound = start_bound(&exclusive_start);
        let projects = self.projects.read().await;

        let mut items = Vec::new();
        let mut last_sort_key = None;
        let mut more = false;

        let newest_first = projects.iter().rev().filter(|(sort_key, _)| match &bound {
            Some(bound) => sort_key.as_str() < bound.as_str(),
            None => true,
        });

        for (sort_key, project) in newest_first {
            if items.len() == limit as usize {
                more = true;
                break;
            }
            items.push(project_item(project)?);
            last_sort_key = Some(sort_key.clone());
        }

        let last_evaluated_key = match (more, last_sort_key) {
            (true, Some(sort_key)) => Some(continuation_key(&sort_key)),
            _ => None,
        };

        Ok(ProjectPage {
            items,
            last_evaluated_key,
        })
    }

    async fn scan_projects(
        &self,
        limit: u32,
        exclusive_start: Option<ContinuationKey>,
    ) -> Result<ProjectPage> {
        let bound = start_bound(&exclusive_start);
        let projects = self.projects.read().await;

        let mut items = Vec::new();
        let mut last_sort_key = None;
        let mut more = false;

        // Scans walk the map in key order, which is oldest first; the caller
        // is responsible for sorting.
        let in_scan_order = projects.iter().filter(|(sort_key, _)| match &bound {
            Some(bound) => sort_key.as_str() > bound.as_str(),
            None => true,
        });

        for (sort_key, project) in in_scan_order {
            if items.len() == limit as usize {
                more = true;
                break;
            }
            items.push(project_item(project)?);
            last_sort_key = Some(sort_key.clone());
        }

        let last_evaluated_key = match (more, last_sort_key) {
            (true, Some(sort_key)) => Some(continuation_key(&sort_key)),
            _ => None,
        };

        Ok(ProjectPage {
            items,
            last_evaluated_key,
        })
    }
}
