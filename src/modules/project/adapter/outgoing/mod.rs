mod project_store_disabled;
mod project_store_remote;

pub use project_store_disabled::ProjectStoreDisabled;
pub use project_store_remote::ProjectStoreRemote;
