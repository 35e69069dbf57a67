pub mod digits;
pub mod overlay;
pub mod progress;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, stats::format_total};

pub const PURPLE: Color = Color::Rgb(168, 85, 247);
pub const MUTED: Color = Color::Rgb(107, 114, 128);
pub const ACCENT: Color = Color::Rgb(236, 72, 153);

/// Rows needed to show the block-letter clock with everything around it
const FULL_LAYOUT_HEIGHT: u16 = 20;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.quitting {
            render_goodbye(area, buf);
            return;
        }

        let lines = main_lines(self, area);
        let height = (lines.len() as u16).min(area.height);
        let content = Rect::new(
            area.x,
            area.y + (area.height - height) / 2,
            area.width,
            height,
        );
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content, buf);

        if self.ui.help_visible {
            if self.ui.editing_config {
                overlay::render_config(self, area, buf);
            } else {
                overlay::render_help(area, buf);
            }
        }
    }
}

fn main_lines(app: &App, area: Rect) -> Vec<Line<'static>> {
    let purple = Style::default().fg(PURPLE);
    let purple_bold = purple.add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(MUTED);

    let mut lines = Vec::new();

    // boxed session label
    let label = app.timer.current_session.to_string();
    let bar = "═".repeat(label.width() + 2);
    lines.push(Line::styled(format!("╔{bar}╗"), purple_bold));
    lines.push(Line::styled(format!("║ {label} ║"), purple_bold));
    lines.push(Line::styled(format!("╚{bar}╝"), purple_bold));
    lines.push(Line::default());

    let (minutes, seconds) = app.timer.clock();
    let clock = format!("{minutes:02}:{seconds:02}");
    let fits = area.height >= FULL_LAYOUT_HEIGHT && area.width as usize >= digits::width(&clock);
    if fits {
        lines.extend(
            digits::render(&clock)
                .into_iter()
                .map(|row| Line::styled(row, purple)),
        );
    } else {
        lines.push(Line::styled(clock, purple_bold));
    }
    lines.push(Line::default());

    if app.timer.paused {
        lines.push(Line::styled(
            "⏸  PAUSED",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }

    let progress = app.timer.progress();
    let (filled, empty) = progress::bar_cells(progress, progress::fit_width(area.width));
    lines.push(Line::from(vec![
        Span::styled("━".repeat(filled), purple),
        Span::styled("━".repeat(empty), muted),
        Span::styled(format!("  {}%", progress::percent(progress)), muted),
    ]));
    lines.push(Line::default());

    let stats = &app.stats;
    lines.push(Line::from(vec![
        Span::styled("🍅 ", muted),
        Span::styled(stats.study_sessions_completed.to_string(), purple_bold),
        Span::styled("  •  ⏱  ", muted),
        Span::styled(format_total(stats.total_study_time), purple_bold),
        Span::styled("  •  📊 ", muted),
        Span::styled(stats.sessions_until_long_break.to_string(), purple_bold),
        Span::styled(" until long break", muted),
    ]));

    if !app.ui.help_visible {
        lines.push(Line::default());
        lines.push(Line::styled("Press ? for help", muted));
    }

    lines
}

fn render_goodbye(area: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(PURPLE).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled("Thanks for staying focused!", style),
        Line::default(),
        Line::styled("See you next time 👋", style),
    ];
    let height = (lines.len() as u16).min(area.height);
    let content = Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    );
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(content, buf);
}
