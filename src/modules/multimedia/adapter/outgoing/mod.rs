mod media_storage_disabled;
mod media_storage_remote;

pub use media_storage_disabled::MediaStorageDisabled;
pub use media_storage_remote::MediaStorageRemote;
