//! Dashboard rendering
//!
//! Full-frame redraw per cycle: banner, price panel, optional log panel,
//! toggle hint. Every absent snapshot field renders as "N/A". The 24h
//! change gets a directional glyph, up only when strictly positive, so a
//! flat day renders as down.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::monitor::MonitorState;

/// Fixed banner artwork, drawn in red above the price panel
const BANNER: &str = r#"
      ████████
   ██████████████
  ████████████████
 ██████████████████
██████    █    █████
█████  █  █    █████
█████    █  ████████
 ██████████████████
  ████████████████
   ██████████████
      ████████
"#;

const TITLE: &str = "Optimism Terminal";
const PAIR_LABEL: &str = "OP/USD";
const TOGGLE_HINT: &str = "Press [L] to show/hide logs";

/// Main draw function - renders the entire dashboard
pub fn draw(frame: &mut Frame, state: &MonitorState) {
    let banner = BANNER.trim_matches('\n');
    let banner_height = banner.lines().count() as u16;

    // Banner, price panel, optional log panel, hint line
    let mut constraints = vec![
        Constraint::Length(banner_height),
        Constraint::Length(8),
    ];
    if state.show_logs {
        constraints.push(Constraint::Min(4));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    draw_banner(frame, chunks[0], banner);
    draw_prices(frame, chunks[1], state);
    if state.show_logs {
        draw_logs(frame, chunks[2], state);
    }
    draw_hint(frame, *chunks.last().expect("layout always has a hint row"));
}

fn draw_banner(frame: &mut Frame, area: Rect, banner: &str) {
    let art = Paragraph::new(banner).style(Style::default().fg(Color::Red));
    frame.render_widget(art, area);
}

/// Draw the price panel: one line per snapshot field
fn draw_prices(frame: &mut Frame, area: Rect, state: &MonitorState) {
    let snapshot = &state.snapshot;

    let (change_text, change_color) = format_change(snapshot.change_pct_24h);
    let high_color = if snapshot.high_24h.is_some() {
        Color::Green
    } else {
        Color::White
    };
    let low_color = if snapshot.low_24h.is_some() {
        Color::Red
    } else {
        Color::White
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} Price: ", PAIR_LABEL)),
            Span::styled(
                format_usd(snapshot.price, 3),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("24h High: "),
            Span::styled(
                format_usd(snapshot.high_24h, 3),
                Style::default().fg(high_color),
            ),
        ]),
        Line::from(vec![
            Span::raw("24h Low: "),
            Span::styled(
                format_usd(snapshot.low_24h, 3),
                Style::default().fg(low_color),
            ),
        ]),
        Line::from(vec![
            Span::raw("Change 24h: "),
            Span::styled(change_text, Style::default().fg(change_color)),
        ]),
        Line::from(vec![
            Span::raw("Market Cap: "),
            Span::styled(
                format_usd_grouped(snapshot.market_cap.map(|m| m as f64)),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::raw("Volume: "),
            Span::styled(
                format_usd_grouped(snapshot.volume),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", TITLE)),
    );
    frame.render_widget(panel, area);
}

/// Draw the log panel, newest entry first
fn draw_logs(frame: &mut Frame, area: Rect, state: &MonitorState) {
    let items: Vec<ListItem> = state
        .logs_newest_first()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw("- "),
                Span::styled(
                    format!("[{}]", entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::raw(entry.message.as_str()),
            ]))
        })
        .collect();

    let logs = List::new(items).block(Block::default().borders(Borders::ALL).title("Logs"));
    frame.render_widget(logs, area);
}

fn draw_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(TOGGLE_HINT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, area);
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Dollar amount with fixed decimals, or "N/A" when absent
pub fn format_usd(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${:.*}", decimals, v),
        _ => "N/A".to_string(),
    }
}

/// Whole-dollar amount with thousands separators, or "N/A" when absent
pub fn format_usd_grouped(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => format!("${}", group_thousands(v.round() as u64)),
        _ => "N/A".to_string(),
    }
}

/// Directional 24h-change text and color.
/// Up only when strictly positive; zero renders as down.
pub fn format_change(change: Option<f64>) -> (String, Color) {
    match change {
        Some(c) if c > 0.0 => (format!("▲ {:.2}%", c), Color::Green),
        Some(c) => (format!("▼ {:.2}%", c), Color::Red),
        None => ("N/A".to_string(), Color::White),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
