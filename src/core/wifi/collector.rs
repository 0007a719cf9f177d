use sysinfo::Networks;

use crate::core::config::Config;

use super::hotspot::{CollectionMode, HotspotRecord, StatsSnapshot};
use super::iw::IwScanner;
use super::scanner::{HotspotScanner, ScanError};

/// Collects wifi hotspot stats from the system's wireless interfaces.
///
/// The collector is the only owner and mutator of the snapshot: `update`
/// replaces it wholesale at the end of a cycle, readers only ever see a
/// complete list.
pub struct WifiCollector {
    snapshot: StatsSnapshot,
    scanner: Option<Box<dyn HotspotScanner>>,
    networks: Networks,
    mode: CollectionMode,
    config: Config,
}

impl WifiCollector {
    /// Create a new WifiCollector, probing the scanning backend once.
    pub fn new(config: &Config) -> Self {
        // A host without `iw` is a normal outcome, not an error; the panel
        // just stays empty.
        let scanner: Option<Box<dyn HotspotScanner>> = match IwScanner::probe() {
            Ok(scanner) => Some(Box::new(scanner)),
            Err(err) => {
                log::info!("wireless scanning unavailable: {err}");
                None
            }
        };

        Self::with_scanner(scanner, config)
    }

    /// Create a WifiCollector with an explicit scanning backend (or none).
    pub fn with_scanner(scanner: Option<Box<dyn HotspotScanner>>, config: &Config) -> Self {
        Self {
            snapshot: StatsSnapshot::new(),
            scanner,
            networks: Networks::new_with_refreshed_list(),
            mode: CollectionMode::Local,
            config: config.clone(),
        }
    }

    /// Whether a scanning backend was found on this host.
    pub fn scanner_available(&self) -> bool {
        self.scanner.is_some()
    }

    pub fn set_mode(&mut self, mode: CollectionMode) {
        self.mode = mode;
    }

    /// The snapshot built by the last `update` call.
    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    /// Reset the stats to an empty list.
    pub fn reset(&mut self) {
        self.snapshot = StatsSnapshot::new();
    }

    /// Run one collection cycle and return the new snapshot.
    ///
    /// Collaborator failures never escape this method: an absent backend, a
    /// failed scan or a non-wireless interface all degrade to fewer (or
    /// zero) records for this cycle, and the next cycle starts fresh.
    pub fn update(&mut self) -> &StatsSnapshot {
        self.reset();

        if self.scanner.is_none() {
            return &self.snapshot;
        }

        match self.mode {
            CollectionMode::Local => {
                self.networks.refresh(true);
                let names: Vec<String> = self
                    .networks
                    .iter()
                    .map(|(name, _)| name.clone())
                    .collect();
                self.collect_interfaces(&names);
            }
            CollectionMode::Snmp => {
                // Remote SNMP collection is not implemented; the snapshot
                // stays empty.
            }
        }

        &self.snapshot
    }

    /// Scan every eligible interface and accumulate hotspot records.
    fn collect_interfaces(&mut self, names: &[String]) {
        let Some(scanner) = &self.scanner else {
            return;
        };

        for name in names {
            // Do not take hidden interfaces into account
            if self.config.is_hide(name) {
                continue;
            }

            match scanner.scan(name) {
                Ok(cells) => {
                    for cell in cells {
                        self.snapshot.push(HotspotRecord {
                            ssid: cell.ssid,
                            signal: cell.signal,
                            quality: cell.quality,
                            encrypted: cell.encrypted,
                            encryption_type: if cell.encrypted {
                                cell.encryption_type
                            } else {
                                None
                            },
                        });
                    }
                }
                Err(ScanError::NotWireless(_)) => {
                    // Expected for most system interfaces
                }
                Err(ScanError::Failed(err)) => {
                    log::debug!("wifi scan on {name} failed: {err}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::wifi::HotspotCell;

    /// Backend stub: records scanned interfaces, answers from a fixed table.
    struct MockScanner {
        cells_by_interface: Vec<(String, Vec<HotspotCell>)>,
        scanned: Arc<Mutex<Vec<String>>>,
    }

    impl MockScanner {
        fn new(cells_by_interface: Vec<(String, Vec<HotspotCell>)>) -> Self {
            Self {
                cells_by_interface,
                scanned: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl HotspotScanner for MockScanner {
        fn scan(&self, interface: &str) -> Result<Vec<HotspotCell>, ScanError> {
            self.scanned.lock().unwrap().push(interface.to_string());
            self.cells_by_interface
                .iter()
                .find(|(name, _)| name == interface)
                .map(|(_, cells)| cells.clone())
                .ok_or_else(|| ScanError::NotWireless(interface.to_string()))
        }
    }

    fn cell(ssid: &str) -> HotspotCell {
        HotspotCell {
            ssid: ssid.to_string(),
            signal: -60,
            quality: "80".to_string(),
            encrypted: false,
            encryption_type: None,
        }
    }

    fn collector_with(
        cells_by_interface: Vec<(String, Vec<HotspotCell>)>,
        config: &Config,
    ) -> WifiCollector {
        WifiCollector::with_scanner(Some(Box::new(MockScanner::new(cells_by_interface))), config)
    }

    #[test]
    fn test_hidden_interfaces_are_skipped() {
        let config = Config {
            hidden_interfaces: vec!["eth0".to_string()],
            ..Default::default()
        };
        let scanner = MockScanner::new(vec![
            ("eth0".to_string(), vec![cell("ShouldNotAppear")]),
            ("wlan0".to_string(), vec![cell("HomeNet")]),
        ]);
        let scanned = scanner.scanned.clone();
        let mut collector = WifiCollector::with_scanner(Some(Box::new(scanner)), &config);

        collector.collect_interfaces(&["eth0".to_string(), "wlan0".to_string()]);

        let snapshot = collector.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].ssid, "HomeNet");

        // Hidden interfaces never reach the scanning backend at all
        assert_eq!(*scanned.lock().unwrap(), vec!["wlan0".to_string()]);
    }

    #[test]
    fn test_non_wireless_interfaces_skip_silently() {
        let config = Config::default();
        let mut collector = collector_with(
            vec![("wlan0".to_string(), vec![cell("HomeNet")])],
            &config,
        );

        // "lo" and "eth0" answer NotWireless; the cycle must keep going
        collector.collect_interfaces(&[
            "lo".to_string(),
            "eth0".to_string(),
            "wlan0".to_string(),
        ]);

        assert_eq!(collector.snapshot().len(), 1);
    }

    /// Backend stub whose scans fail for every interface but wlan0.
    struct FlakyScanner;

    impl HotspotScanner for FlakyScanner {
        fn scan(&self, interface: &str) -> Result<Vec<HotspotCell>, ScanError> {
            if interface == "wlan0" {
                Ok(vec![cell("HomeNet")])
            } else {
                Err(ScanError::Failed("scan ioctl failed".to_string()))
            }
        }
    }

    #[test]
    fn test_failed_scans_recover_locally() {
        let config = Config::default();
        let mut collector = WifiCollector::with_scanner(Some(Box::new(FlakyScanner)), &config);

        collector.collect_interfaces(&["wlan1".to_string(), "wlan0".to_string()]);

        // The failing interface contributes nothing; the cycle still completes
        let snapshot = collector.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].ssid, "HomeNet");
    }

    #[test]
    fn test_update_without_scanner_returns_empty() {
        let config = Config::default();
        let mut collector = WifiCollector::with_scanner(None, &config);

        assert!(collector.update().is_empty());
    }

    #[test]
    fn test_snmp_mode_yields_empty_snapshot() {
        let config = Config::default();
        let mut collector = collector_with(
            vec![("wlan0".to_string(), vec![cell("HomeNet")])],
            &config,
        );
        collector.set_mode(CollectionMode::Snmp);

        assert!(collector.update().is_empty());
    }

    #[test]
    fn test_encryption_type_gated_on_encrypted_flag() {
        let config = Config::default();
        let open = HotspotCell {
            ssid: "OpenNet".to_string(),
            encrypted: false,
            encryption_type: Some("WPA2".to_string()),
            ..Default::default()
        };
        let secured = HotspotCell {
            ssid: "SecureNet".to_string(),
            encrypted: true,
            encryption_type: Some("WPA2".to_string()),
            ..Default::default()
        };
        let mut collector = collector_with(
            vec![("wlan0".to_string(), vec![open, secured])],
            &config,
        );

        collector.collect_interfaces(&["wlan0".to_string()]);

        let snapshot = collector.snapshot();
        assert_eq!(snapshot[0].encryption_type, None);
        assert_eq!(snapshot[1].encryption_type.as_deref(), Some("WPA2"));
    }

    #[test]
    fn test_duplicate_ssids_across_interfaces_are_kept() {
        let config = Config::default();
        let mut collector = collector_with(
            vec![
                ("wlan0".to_string(), vec![cell("Mesh")]),
                ("wlan1".to_string(), vec![cell("Mesh")]),
            ],
            &config,
        );

        collector.collect_interfaces(&["wlan0".to_string(), "wlan1".to_string()]);

        assert_eq!(collector.snapshot().len(), 2);
    }

    #[test]
    fn test_reset_between_cycles() {
        let config = Config::default();
        let mut collector = collector_with(
            vec![("wlan0".to_string(), vec![cell("HomeNet")])],
            &config,
        );

        collector.collect_interfaces(&["wlan0".to_string()]);
        assert_eq!(collector.snapshot().len(), 1);

        collector.reset();
        collector.collect_interfaces(&["wlan0".to_string()]);

        // A new cycle fully replaces the list, it never accumulates
        assert_eq!(collector.snapshot().len(), 1);
    }
}
