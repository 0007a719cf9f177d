//! Wifi hotspot collection.
//!
//! This module provides the business logic for discovering nearby wireless
//! access points per interface and publishing them as per-cycle snapshots.

mod collector;
mod hotspot;
mod iw;
mod runtime;
mod scanner;

pub use collector::WifiCollector;
pub use hotspot::{CollectionMode, HotspotRecord, StatsSnapshot};
pub use iw::IwScanner;
pub use runtime::ScanRuntime;
pub use scanner::{HotspotCell, HotspotScanner, ScanError};
