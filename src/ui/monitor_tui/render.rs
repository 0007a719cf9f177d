use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::panel::{render_wifi_panel, PanelItem, PanelStyle};

use super::app::MonitorApp;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &MonitorApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Hotspot panel
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_wifi_section(frame, chunks[0], app);
    render_footer(frame, chunks[1], app);
}

fn render_wifi_section(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Wifi hotspots ");

    // Account for the block borders when negotiating the panel width
    let inner_width = area.width.saturating_sub(2);
    let items = render_wifi_panel(
        &app.snapshot,
        Some(inner_width),
        app.wifi_enabled,
        app.scanner_available,
    );

    let lines = panel_to_lines(&items);
    let paragraph = if lines.is_empty() {
        Paragraph::new(empty_panel_line(app)).block(block)
    } else {
        Paragraph::new(lines).block(block)
    };

    frame.render_widget(paragraph, area);
}

/// Convert panel tokens into styled ratatui lines.
fn panel_to_lines(items: &[PanelItem]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span> = Vec::new();

    for item in items {
        match item {
            PanelItem::Cell { text, style } => {
                let span = match style {
                    PanelStyle::Title => Span::styled(
                        text.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    PanelStyle::Default => Span::raw(text.clone()),
                };
                spans.push(span);
            }
            PanelItem::NewLine => lines.push(Line::from(std::mem::take(&mut spans))),
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

fn empty_panel_line(app: &MonitorApp) -> Line<'static> {
    let message = if !app.scanner_available {
        "wireless scanning unavailable on this host"
    } else if !app.wifi_enabled {
        "wifi panel disabled (press 'w' to enable)"
    } else {
        "no hotspots found yet"
    };

    Line::from(Span::styled(
        message,
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_footer(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let footer = Line::from(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit  "),
        Span::styled("w", Style::default().fg(Color::Yellow)),
        Span::raw(" toggle wifi  "),
        Span::styled(
            format!("refresh {}ms", app.interval_ms),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(footer), area);
}
