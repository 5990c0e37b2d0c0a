//! Activity: what the palette has run, newest at the bottom.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{ActivityKind, ActivityState};
use crate::ui::theme::colors;

fn marker(kind: ActivityKind) -> (&'static str, Style) {
    match kind {
        ActivityKind::Info => ("  ", Style::default().fg(colors::MUTED)),
        ActivityKind::Dispatched => (
            "✓ ",
            Style::default().fg(colors::SUCCESS).add_modifier(Modifier::BOLD),
        ),
        ActivityKind::Error => (
            "✗ ",
            Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
        ),
    }
}

pub fn render(f: &mut Frame, activity: &ActivityState, area: ratatui::prelude::Rect) {
    let lines: Vec<Line> = activity
        .entries
        .iter()
        .map(|entry| {
            let (glyph, style) = marker(entry.kind);
            let text_style = match entry.kind {
                ActivityKind::Info => Style::default().fg(colors::TEXT_DIM),
                ActivityKind::Dispatched => Style::default().fg(colors::TEXT),
                ActivityKind::Error => Style::default().fg(colors::ERROR),
            };
            Line::from(vec![
                Span::styled(glyph, style),
                Span::styled(entry.text.as_str(), text_style),
            ])
        })
        .collect();

    let block = Block::default()
        .title("  Activity  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // `activity.scroll` counts back from the bottom.
    let height = inner.height as usize;
    let scroll = lines.len().saturating_sub(height).saturating_sub(activity.scroll);
    let para = Paragraph::new(lines)
        .style(Style::default().bg(colors::BG))
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(para, inner);
}
