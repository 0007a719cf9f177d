use thiserror::Error;

/// Raw access-point observation reported by a scanner backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotspotCell {
    pub ssid: String,
    /// Signal level in dBm
    pub signal: i32,
    pub quality: String,
    pub encrypted: bool,
    /// Encryption type as reported by the backend, whether or not the cell
    /// is actually encrypted
    pub encryption_type: Option<String>,
}

/// Per-interface failure reported by a scanner backend.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The interface is not a wireless interface. Most system interfaces
    /// trigger this; callers skip them silently.
    #[error("{0} is not a wireless interface")]
    NotWireless(String),

    /// The scan could not be completed this cycle.
    #[error("scan failed: {0}")]
    Failed(String),
}

/// Trait for wireless scanning backends.
///
/// This trait abstracts hotspot discovery on a single interface.
/// Implementations are probed once at startup; a host without a usable
/// backend runs with no scanner at all.
pub trait HotspotScanner: Send {
    /// Scan one interface and report every visible hotspot.
    fn scan(&self, interface: &str) -> Result<Vec<HotspotCell>, ScanError>;
}
