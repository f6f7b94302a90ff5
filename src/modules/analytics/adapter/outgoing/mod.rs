mod analytics_store_local;
mod analytics_store_remote;

pub use analytics_store_local::AnalyticsStoreLocal;
pub use analytics_store_remote::AnalyticsStoreRemote;
