mod resume_store_disabled;
mod resume_store_remote;

pub use resume_store_disabled::ResumeStoreDisabled;
pub use resume_store_remote::ResumeStoreRemote;
