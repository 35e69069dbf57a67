use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::{ACCENT, MUTED, PURPLE};
use crate::{app::App, session::SessionType};

const SHORTCUTS: [(&str, &str); 7] = [
    ("SPACE / P", "pause/resume"),
    ("N", "next session"),
    ("R", "reset timer"),
    ("+/-", "adjust time"),
    ("C", "configure"),
    ("?", "close help"),
    ("Q", "quit"),
];

/// Center a `width` x `height` box inside `area`, shrinking to fit
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

fn render_popup(lines: Vec<Line<'static>>, width: u16, area: Rect, buf: &mut Buffer) {
    // border + vertical padding
    let height = lines.len() as u16 + 4;
    let popup = popup_area(area, width, height);

    Clear.render(popup, buf);
    Paragraph::new(lines)
        .style(Style::default().fg(MUTED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(PURPLE))
                .padding(ratatui::widgets::Padding::new(3, 3, 1, 1)),
        )
        .render(popup, buf);
}

pub fn render_help(area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(PURPLE).add_modifier(Modifier::BOLD);

    let mut lines = vec![title("KEYBOARD SHORTCUTS"), Line::default()];
    lines.extend(SHORTCUTS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("{key:<12}"), key_style),
            Span::raw(format!("  {action}")),
        ])
    }));

    render_popup(lines, 40, area, buf);
}

pub fn render_config(app: &App, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(PURPLE).add_modifier(Modifier::BOLD);

    let mut lines = vec![title("CONFIGURATION"), Line::default()];
    lines.extend(SessionType::ALL.iter().map(|kind| {
        let selected = app.ui.selected_field == Some(*kind);
        let marker = if selected { "▶" } else { " " };
        let minutes = app.config.duration_for(*kind).as_secs() / 60;
        Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(ACCENT)),
            Span::styled(kind.config_key().to_ascii_uppercase().to_string(), key_style),
            Span::raw(format!("  {:<13}", kind.to_string())),
            Span::styled(format!("{minutes} min"), key_style),
        ])
    }));
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Use +/- to adjust  •  C to exit",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
    );

    render_popup(lines, 44, area, buf);
}
