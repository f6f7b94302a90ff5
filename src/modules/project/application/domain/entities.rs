// src/modules/project/application/domain/entities.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Category values offered by the admin editor. Any other text is accepted.
pub const SUGGESTED_CATEGORIES: [&str; 6] =
    ["Branding", "Video", "Print", "Social Media", "UI/UX", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct CaseStudy {
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub process: Vec<String>,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A portfolio project as stored in the `projects` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub pdf_url: Option<String>,
    pub description: Option<String>,
    pub case_study: Option<CaseStudy>,
    #[serde(default)]
    pub is_featured: bool,
    /// Ascending display position. Rows without one sort last.
    pub order_index: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Everything but the server-assigned `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub pdf_url: Option<String>,
    pub description: Option<String>,
    pub case_study: Option<CaseStudy>,
    pub is_featured: bool,
    pub order_index: Option<i32>,
}

impl NewProject {
    /// Materialize a stored row, as an in-process store would.
    pub fn into_project(self, id: Uuid, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            slug: self.slug,
            category: self.category,
            thumbnail_url: self.thumbnail_url,
            video_url: self.video_url,
            pdf_url: self.pdf_url,
            description: self.description,
            case_study: self.case_study,
            is_featured: self.is_featured,
            order_index: self.order_index,
            created_at,
        }
    }
}

/// Sort in display order: `order_index` ascending, rows without one last.
pub fn sort_for_display(projects: &mut [Project]) {
    projects.sort_by(|a, b| match (a.order_index, b.order_index) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
