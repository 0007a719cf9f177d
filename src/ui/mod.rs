// UI and formatting module

pub mod monitor_tui;
pub mod panel;

// Re-export commonly used items for cleaner imports
pub use panel::{panel_to_string, render_wifi_panel, PanelItem, PanelStyle};
