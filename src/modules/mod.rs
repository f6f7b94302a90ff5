pub mod analytics;
pub mod auth;
pub mod contact;
pub mod multimedia;
pub mod project;
pub mod resume;
