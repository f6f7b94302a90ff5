pub mod resume_store;

pub use resume_store::ResumeStore;
