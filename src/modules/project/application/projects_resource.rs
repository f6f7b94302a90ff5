// src/modules/project/application/projects_resource.rs
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use utoipa::ToSchema;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectsSnapshot {
    pub data: Vec<Project>,
    pub loading: bool,
}

#[derive(Debug)]
struct ResourceState {
    data: Vec<Project>,
    loading: bool,
    /// Sequence number of the read whose result `data` holds.
    applied: u64,
}

/// Fetch-on-mount project list with an explicit `refetch`.
///
/// No caching and no optimistic updates. Reads may overlap: a result is
/// dropped when a newer read has already been applied, so `data` always comes
/// from the latest issued read that finished.
pub struct ProjectsResource {
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    state: RwLock<ResourceState>,
    issued: AtomicU64,
}

impl ProjectsResource {
    /// Unmounted resource: empty and loading until the first read completes.
    pub fn new(get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>) -> Self {
        Self {
            get_projects,
            state: RwLock::new(ResourceState {
                data: Vec::new(),
                loading: true,
                applied: 0,
            }),
            issued: AtomicU64::new(0),
        }
    }

    pub async fn mount(get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>) -> Self {
        let resource = Self::new(get_projects);
        resource.refetch().await;
        resource
    }

    /// Re-run the list read and return the data now held.
    pub async fn refetch(&self) -> Vec<Project> {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.loading = true;

        let fresh = self.get_projects.execute().await;

        let mut state = self.state.write().await;
        if seq > state.applied {
            state.data = fresh;
            state.applied = seq;
        } else {
            debug!(seq, applied = state.applied, "dropping stale project list");
        }
        if seq == self.issued.load(Ordering::SeqCst) {
            state.loading = false;
        }
        state.data.clone()
    }

    pub async fn snapshot(&self) -> ProjectsSnapshot {
        let state = self.state.read().await;
        ProjectsSnapshot {
            data: state.data.clone(),
            loading: state.loading,
        }
    }

    pub async fn data(&self) -> Vec<Project> {
        self.state.read().await.data.clone()
    }

    pub async fn count(&self) -> usize {
        self.state.read().await.data.len()
    }
}
