mod contact_store_disabled;
mod contact_store_remote;

pub use contact_store_disabled::ContactStoreDisabled;
pub use contact_store_remote::ContactStoreRemote;
