use async_trait::async_trait;

use crate::cursor::ContinuationKey;
use crate::project::Project;

use super::{ProjectPage, Result};

/// Repository for project record operations.
///
/// Writes take the typed domain record; reads return raw normalized item
/// maps because the listing path tolerates records with extra or missing
/// attributes. Read errors are returned as-is: the caller decides whether a
/// failed read should surface or degrade to an empty page.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Writes a project unconditionally. Projects are never updated, so no
    /// existence check is made.
    async fn create_project(&self, project: &Project) -> Result<()>;

    /// Returns up to `limit` projects ordered by sort key descending
    /// (newest first), resuming after `exclusive_start` when present.
    ///
    /// A key-schema mismatch with the underlying table yields zero items,
    /// not an error; the store silently returns an empty result set for a
    /// non-matching key condition.
    async fn query_projects(
        &self,
        limit: u32,
        exclusive_start: Option<ContinuationKey>,
    ) -> Result<ProjectPage>;

    /// Returns up to `limit` projects from a filtered full-collection scan.
    /// The store gives no ordering guarantee; callers sort by `createdAt`
    /// themselves.
    async fn scan_projects(
        &self,
        limit: u32,
        exclusive_start: Option<ContinuationKey>,
    ) -> Result<ProjectPage>;
}
