use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ResumeDownload,
    ProjectView,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::ResumeDownload => "resume_download",
            EventType::ProjectView => "project_view",
        }
    }
}

/// One append-only analytics row. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
}

impl AnalyticsEvent {
    pub fn resume_download() -> Self {
        Self {
            event_type: EventType::ResumeDownload,
            project_id: None,
        }
    }

    pub fn project_view(project_id: Uuid) -> Self {
        Self {
            event_type: EventType::ProjectView,
            project_id: Some(project_id),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnalyticsStats {
    pub resume_downloads: u64,
    pub project_views: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resume_download_row_has_no_project_id() {
        assert_eq!(
            serde_json::to_value(AnalyticsEvent::resume_download()).unwrap(),
            json!({ "event_type": "resume_download" })
        );
    }

    #[test]
    fn test_project_view_row() {
        let id = Uuid::new_v4();
        assert_eq!(
            serde_json::to_value(AnalyticsEvent::project_view(id)).unwrap(),
            json!({ "event_type": "project_view", "project_id": id })
        );
    }
}
