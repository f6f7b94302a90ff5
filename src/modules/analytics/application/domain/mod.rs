pub mod event;

pub use event::{AnalyticsEvent, AnalyticsStats, EventType};
