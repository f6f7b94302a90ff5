use async_trait::async_trait;

use crate::modules::project::application::domain::Project;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// All projects in display order. Store failures are logged and read as an
/// empty list.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Project>;
}
