use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use projectboard_core::cursor::{decode_cursor, encode_cursor};
use projectboard_core::project::{parse_repo_url, CreateProject, Project};
use projectboard_core::storage::ProjectPage;

use crate::{error::ApiError, state::AppState};

/// Default page size when `limit` is absent or unparseable.
const DEFAULT_LIMIT: i64 = 50;
/// Allowed page size range.
const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 100;

/// CORS preflight acknowledgment (OPTIONS /).
pub async fn preflight() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// Catch-all for unsupported methods on `/`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Submit a project (POST /).
///
/// Accepts `{repo_url, title?, submitter?, description?}`. String fields are
/// trimmed; the title defaults to the repository name. An empty body is
/// treated as an empty object so it fails validation rather than JSON
/// parsing.
pub async fn create_project(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let bytes: &[u8] = if body.is_empty() { b"{}" } else { &body };
    let payload: CreateProject =
        serde_json::from_slice(bytes).map_err(|_| ApiError::InvalidJson)?;

    let repo_url = payload.repo_url();
    let (owner, repo) = parse_repo_url(&repo_url)?;

    let project = Project::new(
        repo_url,
        owner,
        repo,
        payload.title(),
        payload.submitter(),
        payload.description(),
    );

    state.repository.create_project(&project).await?;

    tracing::info!(project_id = %project.id, repo = %project.repo, "created project");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "ok": true,
            "id": project.id,
            "createdAt": project.created_at,
        })),
    ))
}

/// Query parameters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub cursor: Option<String>,
}

/// List projects newest-first (GET /?limit=&cursor=).
///
/// Queries the partition index first; when that yields zero items (genuinely
/// empty or key-schema mismatch) it falls back to a filtered scan sorted
/// best-effort by `createdAt`. Read errors degrade to an empty page rather
/// than failing the request; availability is preferred over signaling here,
/// so a total read outage looks identical to an empty collection.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = effective_limit(params.limit.as_deref());

    let exclusive_start = match params.cursor.as_deref() {
        Some(cursor) => Some(decode_cursor(cursor)?),
        None => None,
    };

    let mut page = match state
        .repository
        .query_projects(limit, exclusive_start.clone())
        .await
    {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!(error = %err, "query failed, treating as empty");
            ProjectPage::default()
        }
    };

    if page.items.is_empty() {
        page = match state.repository.scan_projects(limit, exclusive_start).await {
            Ok(mut page) => {
                page.sort_newest_first();
                page
            }
            Err(err) => {
                tracing::warn!(error = %err, "fallback scan failed, returning empty page");
                ProjectPage::default()
            }
        };
    }

    let next_cursor = page.last_evaluated_key.as_ref().map(encode_cursor);

    Ok(Json(json!({
        "items": page.items,
        "next_cursor": next_cursor,
    })))
}

/// Parses the `limit` query parameter, clamping to [1, 100] and defaulting
/// to 50 when absent or unparseable.
fn effective_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(MIN_LIMIT, MAX_LIMIT) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit_defaults() {
        assert_eq!(effective_limit(None), 50);
        assert_eq!(effective_limit(Some("")), 50);
        assert_eq!(effective_limit(Some("abc")), 50);
        assert_eq!(effective_limit(Some("5.5")), 50);
    }

    #[test]
    fn test_effective_limit_clamps() {
        assert_eq!(effective_limit(Some("0")), 1);
        assert_eq!(effective_limit(Some("-3")), 1);
        assert_eq!(effective_limit(Some("101")), 100);
        assert_eq!(effective_limit(Some("100000")), 100);
    }

    #[test]
    fn test_effective_limit_passes_valid_values() {
        assert_eq!(effective_limit(Some("1")), 1);
        assert_eq!(effective_limit(Some("42")), 42);
        assert_eq!(effective_limit(Some("100")), 100);
        assert_eq!(effective_limit(Some(" 25 ")), 25);
    }
}
