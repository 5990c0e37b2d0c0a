//! Input bar: search prompt and cursor.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const PROMPT: &str = " ⌕ ";
const PLACEHOLDER: &str = "Search commands, pages, settings…";

pub fn render(
    f: &mut Frame,
    buffer: &str,
    cursor_pos: usize,
    palette_visible: bool,
    area: ratatui::prelude::Rect,
) {
    let body = if buffer.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(colors::MUTED))
    } else {
        Span::styled(buffer, Style::default().fg(colors::TEXT))
    };
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
        body,
    ]);
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line), inner);

    if palette_visible {
        let typed = buffer.get(..cursor_pos).map(|s| s.chars().count()).unwrap_or(0) as u16;
        let cursor_x = inner.x + PROMPT.chars().count() as u16 + typed;
        let x = cursor_x.min(inner.x + inner.width.saturating_sub(1));
        f.set_cursor_position(Position { x, y: inner.y });
    }
}
