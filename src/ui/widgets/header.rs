//! Header banner: title, version, catalog size — boxed.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const TITLE: &str = "◆ Site Kit ";

/// Truncate to `max_chars` from the end with ellipsis. Single pass over chars.
fn truncate_end(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    let skip = count.saturating_sub(take);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, commands: usize, threshold: f64) {
    // Total width available, minus 2 for leading "  " indent.
    let total = (area.width as usize).saturating_sub(2);
    // Horizontal dashes between the corners.
    let dash_count = total.saturating_sub(2);
    // Between "│ " and " │".
    let inner = total.saturating_sub(4);

    let border = Style::default().fg(colors::BORDER);
    let version = format!("(v{VERSION})");
    let summary = format!("{commands} commands · threshold {threshold:.2} ");

    let left_len = TITLE.chars().count() + version.chars().count();
    let summary = truncate_end(&summary, inner.saturating_sub(left_len));
    let pad = inner.saturating_sub(left_len + summary.chars().count());

    let lines = vec![
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(format!("╭{}╮", "─".repeat(dash_count)), border),
        ]),
        Line::from(vec![
            Span::styled("  │ ", border),
            Span::styled(
                TITLE,
                Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(version, Style::default().fg(colors::TEXT_DIM)),
            Span::raw(" ".repeat(pad)),
            Span::styled(summary, Style::default().fg(colors::MUTED)),
            Span::styled("│", border),
        ]),
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(format!("╰{}╯", "─".repeat(dash_count)), border),
        ]),
    ];

    let para = Paragraph::new(lines).style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::truncate_end;

    #[test]
    fn truncate_keeps_tail() {
        assert_eq!(truncate_end("short", 10), "short");
        assert_eq!(truncate_end("18 commands", 6), "…mands");
        assert_eq!(truncate_end("abc", 0), "…");
    }
}
