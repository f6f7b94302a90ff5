pub mod analytics_store;

pub use analytics_store::AnalyticsStore;
