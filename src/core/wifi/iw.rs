//! `iw`-based wireless scanner backend (Linux).

use std::process::Command;

use crate::error::{Result, WifiMonError};

use super::scanner::{HotspotCell, HotspotScanner, ScanError};

/// Scanner backend that shells out to `iw dev <interface> scan`.
pub struct IwScanner;

impl IwScanner {
    /// Probe for a usable `iw` binary.
    ///
    /// Called once at startup; a missing binary means wifi stats stay
    /// permanently unavailable on this host.
    pub fn probe() -> Result<Self> {
        let output = Command::new("iw")
            .arg("--version")
            .output()
            .map_err(|e| WifiMonError::scan(format!("iw not available: {e}")))?;

        if !output.status.success() {
            return Err(WifiMonError::scan("iw --version reported failure"));
        }

        Ok(Self)
    }
}

impl HotspotScanner for IwScanner {
    fn scan(&self, interface: &str) -> std::result::Result<Vec<HotspotCell>, ScanError> {
        let output = Command::new("iw")
            .args(["dev", interface, "scan"])
            .output()
            .map_err(|e| ScanError::Failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // nl80211 rejects non-wireless interfaces with ENODEV/EOPNOTSUPP
            if stderr.contains("No such device")
                || stderr.contains("Operation not supported")
                || stderr.contains("not a wireless device")
            {
                return Err(ScanError::NotWireless(interface.to_string()));
            }
            return Err(ScanError::Failed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_scan_output(&stdout))
    }
}

/// Parse the BSS blocks of an `iw dev <interface> scan` dump.
///
/// Blocks with no parseable fields still yield a cell (hotspots with an
/// empty SSID are collected; the renderer is the one that drops them).
fn parse_scan_output(scan_output: &str) -> Vec<HotspotCell> {
    let mut cells = Vec::new();
    let mut current: Option<BssBlock> = None;

    for line in scan_output.lines() {
        let line = line.trim();

        if line.starts_with("BSS ") {
            if let Some(block) = current.take() {
                cells.push(block.into_cell());
            }
            current = Some(BssBlock::default());
        } else if let Some(block) = &mut current {
            if let Some(signal_str) = line.strip_prefix("signal: ") {
                // Format is like "-76.00 dBm"
                if let Some(value) = signal_str.split_whitespace().next() {
                    if let Ok(signal) = value.parse::<f64>() {
                        block.signal = signal as i32;
                    }
                }
            } else if let Some(ssid) = line.strip_prefix("SSID: ") {
                block.ssid = ssid.trim().to_string();
            } else if let Some(flags) = line.strip_prefix("capability: ") {
                block.privacy = flags.contains("Privacy");
            } else if line.starts_with("RSN:") {
                block.rsn = true;
            } else if line.starts_with("WPA:") {
                block.wpa = true;
            }
        }
    }

    if let Some(block) = current {
        cells.push(block.into_cell());
    }

    cells
}

/// Fields accumulated while walking one BSS block.
#[derive(Debug, Default)]
struct BssBlock {
    ssid: String,
    signal: i32,
    privacy: bool,
    wpa: bool,
    rsn: bool,
}

impl BssBlock {
    fn into_cell(self) -> HotspotCell {
        let encrypted = self.privacy || self.wpa || self.rsn;
        let encryption_type = if self.rsn {
            Some("WPA2".to_string())
        } else if self.wpa {
            Some("WPA".to_string())
        } else if self.privacy {
            Some("WEP".to_string())
        } else {
            None
        };

        HotspotCell {
            quality: quality_from_signal(self.signal),
            ssid: self.ssid,
            signal: self.signal,
            encrypted,
            encryption_type,
        }
    }
}

/// Map a dBm signal level onto a 0-100 quality figure.
///
/// Uses the common linear approximation (-100 dBm -> 0, -50 dBm -> 100).
fn quality_from_signal(signal: i32) -> String {
    let quality = (2 * (signal + 100)).clamp(0, 100);
    quality.to_string()
}
