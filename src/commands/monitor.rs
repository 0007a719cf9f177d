//! Live monitor command handler.
//!
//! Provides real-time wifi hotspot monitoring in a TUI dashboard.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::Config;
use crate::ui::monitor_tui::{run_monitor_app, MonitorAppConfig};

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;
    if matches.get_flag("disable-wifi") {
        config.disable_wifi = true;
    }

    let interval_ms = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or(config.refresh_ms);

    let app_config = MonitorAppConfig {
        interval_ms,
        config,
    };

    run_monitor_app(app_config).context("Failed to run wifi monitor")
}
