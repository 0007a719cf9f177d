// Core business logic module

pub mod config;
pub mod wifi;

// Re-export commonly used items
pub use config::Config;
pub use wifi::{HotspotRecord, StatsSnapshot, WifiCollector};
