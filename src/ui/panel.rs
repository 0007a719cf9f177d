//! Fixed-width wifi hotspot panel.
//!
//! Renders a snapshot into display tokens that a compositor (the TUI, or a
//! plain stdout printer) turns into terminal output.

use crate::core::wifi::HotspotRecord;

/// Style tag attached to a panel cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStyle {
    Default,
    Title,
}

/// One display token: a text cell or an explicit line break.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelItem {
    Cell { text: String, style: PanelStyle },
    NewLine,
}

impl PanelItem {
    pub fn cell<S: Into<String>>(text: S) -> Self {
        PanelItem::Cell {
            text: text.into(),
            style: PanelStyle::Default,
        }
    }

    pub fn title<S: Into<String>>(text: S) -> Self {
        PanelItem::Cell {
            text: text.into(),
            style: PanelStyle::Title,
        }
    }

    pub fn new_line() -> Self {
        PanelItem::NewLine
    }
}

/// Column width reserved for the quality/encryption annotation.
const ANNOTATION_WIDTH: u16 = 5;
/// Name column width used when no usable max width is supplied.
const DEFAULT_NAME_WIDTH: usize = 16;
/// Narrowest max width the name column still adapts to.
const MIN_ADAPTIVE_WIDTH: u16 = 23;

/// Render the wifi hotspot panel.
///
/// Produces nothing when the snapshot is empty, when the wifi panel is
/// disabled, or when no scanning backend exists on this host - in that
/// order. Hotspots are listed sorted by SSID; entries broadcasting no SSID
/// are collected but never displayed.
pub fn render_wifi_panel(
    snapshot: &[HotspotRecord],
    max_width: Option<u16>,
    wifi_enabled: bool,
    scanner_available: bool,
) -> Vec<PanelItem> {
    let mut ret = Vec::new();

    // Only process if stats exist and the display is enabled
    if snapshot.is_empty() || !wifi_enabled || !scanner_available {
        return ret;
    }

    let name_width = match max_width {
        Some(width) if width >= MIN_ADAPTIVE_WIDTH => (width - ANNOTATION_WIDTH) as usize,
        _ => DEFAULT_NAME_WIDTH,
    };

    // Header
    ret.push(PanelItem::title(format!("{:<name_width$}", "WIFI")));
    ret.push(PanelItem::cell(format!("{:>6}", "Quality")));
    ret.push(PanelItem::new_line());

    // Hotspot list (sorted by name; stable, so duplicate SSIDs keep their
    // accumulation order)
    let mut hotspots: Vec<_> = snapshot.iter().collect();
    hotspots.sort_by(|a, b| a.ssid.cmp(&b.ssid));

    for hotspot in hotspots {
        // Do not display hotspots with no name (ssid)
        if hotspot.ssid.is_empty() {
            continue;
        }

        let mut name = hotspot.ssid.clone();
        if hotspot.encrypted {
            if let Some(encryption) = &hotspot.encryption_type {
                name.push(' ');
                name.push_str(encryption);
            }
        }
        let name = truncate_left(&name, name_width);

        ret.push(PanelItem::cell(format!("{name:<name_width$}")));
        ret.push(PanelItem::cell(format!("{:>7}", hotspot.quality)));
        ret.push(PanelItem::new_line());
    }

    ret
}

/// Cut a display name that exceeds the column, keeping the tail.
///
/// The leading `_` marks the truncation; the tail carries the most
/// specific part of a long SSID + encryption string.
fn truncate_left(name: &str, width: usize) -> String {
    let len = name.chars().count();
    if len <= width {
        return name.to_string();
    }

    let tail: String = name.chars().skip(len - (width - 1)).collect();
    format!("_{tail}")
}

/// Flatten panel items into plain text, one terminal line per break token.
pub fn panel_to_string(items: &[PanelItem]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            PanelItem::Cell { text, .. } => out.push_str(text),
            PanelItem::NewLine => out.push('\n'),
        }
    }
    out
}
