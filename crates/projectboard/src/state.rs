use std::sync::Arc;

use projectboard_core::storage::ProjectRepository;

/// Shared application state.
///
/// The repository is constructed once per process and injected here; handlers
/// never reach for a module-level client.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProjectRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }
}
