use chrono::Utc;
use uuid::Uuid;

use crate::modules::project::application::domain::{NewProject, Project};

pub const SAMPLE_THUMBNAIL_URL: &str =
    "https://cdn.example.com/storage/v1/object/public/project-images/a.png";

pub fn sample_new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        slug: title.trim().to_lowercase().replace(' ', "-"),
        category: "Branding".to_string(),
        thumbnail_url: None,
        video_url: None,
        pdf_url: None,
        description: Some(format!("About {}", title)),
        case_study: None,
        is_featured: false,
        order_index: None,
    }
}

/// A stored project with a thumbnail in the `project-images` bucket.
pub fn sample_project(slug: &str, order_index: Option<i32>) -> Project {
    NewProject {
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        category: "Branding".to_string(),
        thumbnail_url: Some(SAMPLE_THUMBNAIL_URL.to_string()),
        video_url: None,
        pdf_url: None,
        description: Some("Sample project".to_string()),
        case_study: None,
        is_featured: false,
        order_index,
    }
    .into_project(Uuid::new_v4(), Utc::now())
}
