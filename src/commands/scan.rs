//! One-shot scan command handler.
//!
//! Runs a single collection cycle and prints the hotspot panel (or the raw
//! snapshot as JSON) to stdout.

use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

use crate::core::config::Config;
use crate::core::wifi::{StatsSnapshot, WifiCollector};
use crate::ui::panel::{render_wifi_panel, PanelItem, PanelStyle};

/// Execute the scan command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;
    if matches.get_flag("disable-wifi") {
        config.disable_wifi = true;
    }

    let width = matches.get_one::<u16>("width").copied();
    let json_output = matches.get_flag("json");

    let mut collector = WifiCollector::new(&config);
    let scanner_available = collector.scanner_available();
    collector.update();

    if json_output {
        return print_json(collector.snapshot());
    }

    let items = render_wifi_panel(
        collector.snapshot(),
        width,
        !config.disable_wifi,
        scanner_available,
    );

    if items.is_empty() {
        println!("{}", "no wifi hotspots to display".dimmed());
        return Ok(());
    }

    print_panel(&items);
    Ok(())
}

/// Print panel tokens to stdout, honoring their style tags.
fn print_panel(items: &[PanelItem]) {
    let mut line = String::new();

    for item in items {
        match item {
            PanelItem::Cell { text, style } => match style {
                PanelStyle::Title => line.push_str(&text.cyan().bold().to_string()),
                PanelStyle::Default => line.push_str(text),
            },
            PanelItem::NewLine => {
                println!("{line}");
                line.clear();
            }
        }
    }

    if !line.is_empty() {
        println!("{line}");
    }
}

/// Print the snapshot as JSON (for scripting)
fn print_json(snapshot: &StatsSnapshot) -> Result<()> {
    let payload = serde_json::json!({
        "timestamp": chrono::Utc::now().timestamp(),
        "hotspots": snapshot,
    });

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
