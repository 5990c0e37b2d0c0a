//! Status bar: match count + shortcuts.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

const HINT_CLOSED: &str = " Ctrl+K / palette  j/k scroll  q quit ";
const HINT_OPEN: &str = " ↑↓ select  Enter run  Esc close ";

/// `matches` is `Some` while the palette is open.
pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, matches: Option<usize>) {
    let (left, right) = match matches {
        Some(1) => (" 1 match".to_string(), HINT_OPEN),
        Some(n) => (format!(" {n} matches"), HINT_OPEN),
        None => (" Ready".to_string(), HINT_CLOSED),
    };
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + right.chars().count());
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
