//! Command palette: grouped list with accent bar selection.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::catalog::Catalog;
use crate::palette::PaletteState;
use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    palette: &PaletteState,
    catalog: &Catalog,
    area: ratatui::prelude::Rect,
) {
    if !palette.visible {
        return;
    }
    let block = Block::default()
        .title("  Commands  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if palette.rows.is_empty() {
        let empty = Line::from(Span::styled(
            format!("  No commands match \"{}\"", palette.query.trim()),
            Style::default().fg(colors::MUTED),
        ));
        f.render_widget(Paragraph::new(empty), inner);
        return;
    }

    let highlighter = SkimMatcherV2::default();
    let query = palette.query.trim();
    let commands = catalog.commands();

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;
    let mut row = 0;
    for (category, members) in &palette.groups {
        lines.push(Line::from(Span::styled(
            format!(" {}", category.label()),
            Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD),
        )));
        for &idx in members {
            let cmd = &commands[idx];
            let selected = row == palette.selected_index;
            if selected {
                selected_line = lines.len();
            }
            let base = if selected {
                Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_DIM)
            };

            let mut spans = vec![Span::styled(
                if selected { "▎ " } else { "  " },
                Style::default().fg(colors::ACCENT),
            )];
            let positions = highlighter
                .fuzzy_indices(&cmd.title, query)
                .map(|(_, p)| p)
                .unwrap_or_default();
            spans.extend(highlight(&cmd.title, &positions, base));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                cmd.description.as_str(),
                Style::default().fg(if selected { colors::TEXT_DIM } else { colors::MUTED }),
            ));

            let mut line = Line::from(spans);
            if selected {
                line = line.style(Style::default().bg(colors::ACCENT_GLOW));
            }
            lines.push(line);
            row += 1;
        }
    }

    let height = inner.height as usize;
    let offset = (selected_line + 1).saturating_sub(height);
    f.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), inner);
}

/// Split `text` into spans, accenting the chars at `positions`.
fn highlight(text: &str, positions: &[usize], base: Style) -> Vec<Span<'static>> {
    let accent = base.fg(colors::ACCENT).add_modifier(Modifier::UNDERLINED);
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_hit = false;
    for (i, c) in text.chars().enumerate() {
        let hit = positions.contains(&i);
        if hit != run_hit && !run.is_empty() {
            let style = if run_hit { accent } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_hit = hit;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, if run_hit { accent } else { base }));
    }
    spans
}
