use serde::{Deserialize, Serialize};

/// One observed access point on one interface.
///
/// Records are valid for a single collection cycle only; the next cycle
/// replaces the whole list. The lookup key is `ssid`, and duplicate SSIDs
/// seen on different interfaces stay as separate entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotspotRecord {
    pub ssid: String,
    /// Signal level in dBm, informational only
    pub signal: i32,
    /// Quality indicator, displayed verbatim
    pub quality: String,
    pub encrypted: bool,
    /// Meaningful only when `encrypted` is true
    pub encryption_type: Option<String>,
}

/// Ordered hotspot list produced by one collection cycle.
pub type StatsSnapshot = Vec<HotspotRecord>;

/// How hotspot stats are collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectionMode {
    /// Scan local wireless interfaces
    #[default]
    Local,
    /// Remote SNMP collection; not implemented, yields an empty snapshot
    Snmp,
}
