pub mod entities;
pub mod slug;

pub use entities::{sort_for_display, CaseStudy, NewProject, Project, SUGGESTED_CATEGORIES};
pub use slug::derive_slug;
