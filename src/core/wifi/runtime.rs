//! Tokio runtime for background wifi collection.
//!
//! Collection can block for seconds while `iw` scans, so it runs on its own
//! runtime and hands whole snapshots to the UI over a watch channel.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tokio::time::{interval, Duration, MissedTickBehavior};

use super::collector::WifiCollector;
use super::hotspot::StatsSnapshot;

const MIN_REFRESH_MS: u64 = 250;

/// Wrapper around the Tokio runtime for wifi collection.
pub struct ScanRuntime {
    /// Receiver for published snapshots
    pub snapshot_rx: watch::Receiver<Arc<StatsSnapshot>>,

    /// Shutdown signal sender
    shutdown_tx: broadcast::Sender<()>,

    /// Handle to the runtime (for shutdown)
    _runtime_handle: tokio::runtime::Runtime,
}

impl ScanRuntime {
    /// Create a new ScanRuntime with the scan task spawned.
    pub fn new(collector: WifiCollector, refresh_ms: u64) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("wifi-scan")
            .build()?;

        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(StatsSnapshot::new()));
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let shutdown_rx = shutdown_tx.subscribe();
        runtime.spawn(scan_task(collector, snapshot_tx, shutdown_rx, refresh_ms));

        Ok(Self {
            snapshot_rx,
            shutdown_tx,
            _runtime_handle: runtime,
        })
    }

    /// Shutdown the runtime gracefully.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        // Runtime will shutdown when dropped
    }
}

/// Task that runs collection cycles on a fixed interval.
///
/// Each tick publishes a complete snapshot; readers never observe a cycle
/// mid-accumulation. Ticks missed behind a slow scan are skipped, the next
/// cycle is the implicit retry.
async fn scan_task(
    mut collector: WifiCollector,
    snapshot_tx: watch::Sender<Arc<StatsSnapshot>>,
    mut shutdown: broadcast::Receiver<()>,
    refresh_ms: u64,
) {
    let mut ticker = interval(Duration::from_millis(refresh_ms.max(MIN_REFRESH_MS)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                collector.update();

                // watch::send() only fails if there are no receivers (which is fine)
                let _ = snapshot_tx.send(Arc::new(collector.snapshot().clone()));
            }
            _ = shutdown.recv() => {
                break;
            }
        }
    }
}
