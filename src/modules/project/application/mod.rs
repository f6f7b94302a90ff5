pub mod domain;
pub mod editor;
pub mod ports;
pub mod project_use_cases;
pub mod projects_resource;
pub mod service;
