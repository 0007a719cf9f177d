use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::config::Config;
use crate::core::wifi::{ScanRuntime, StatsSnapshot, WifiCollector};

use super::event_handler::MonitorEvent;
use super::render::render_ui;

/// Monitor application state
pub struct MonitorApp {
    pub snapshot: Arc<StatsSnapshot>,
    pub wifi_enabled: bool,
    pub scanner_available: bool,
    pub should_quit: bool,
    pub interval_ms: u64,
}

impl MonitorApp {
    /// Handle keyboard events
    pub fn handle_event(&mut self, event: MonitorEvent) {
        match event {
            MonitorEvent::Quit => self.should_quit = true,
            MonitorEvent::ToggleWifi => self.wifi_enabled = !self.wifi_enabled,
            MonitorEvent::None => {}
        }
    }
}

/// Configuration for the monitor app
#[derive(Debug, Clone)]
pub struct MonitorAppConfig {
    pub interval_ms: u64,
    pub config: Config,
}

/// Run the monitor TUI application
pub fn run_monitor_app(app_config: MonitorAppConfig) -> Result<()> {
    // Start background collection first; the TUI only ever reads whole
    // published snapshots
    let collector = WifiCollector::new(&app_config.config);
    let scanner_available = collector.scanner_available();
    let runtime = ScanRuntime::new(collector, app_config.interval_ms)
        .context("Failed to start wifi scan runtime")?;
    let mut snapshot_rx = runtime.snapshot_rx.clone();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = MonitorApp {
        snapshot: snapshot_rx.borrow().clone(),
        wifi_enabled: !app_config.config.disable_wifi,
        scanner_available,
        should_quit: false,
        interval_ms: app_config.interval_ms,
    };

    let tick_rate = Duration::from_millis(app.interval_ms);
    let mut last_tick = Instant::now();

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|frame| render_ui(frame, &app))?;

        // Handle events with timeout
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let monitor_event = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => MonitorEvent::Quit,
                        KeyCode::Char('w') => MonitorEvent::ToggleWifi,
                        _ => MonitorEvent::None,
                    };
                    app.handle_event(monitor_event);
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }

        // Pick up the latest published snapshot on tick
        if last_tick.elapsed() >= tick_rate {
            app.snapshot = snapshot_rx.borrow_and_update().clone();
            last_tick = Instant::now();
        }
    }

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    runtime.shutdown();

    Ok(())
}
