//! Diagnostics pane rendering

use super::{clamp_scroll, pane_block, scroll_into_view, visible_height};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn kind_color(kind: DiagnosticKind) -> Color {
    match kind {
        DiagnosticKind::LexicalError => DEFAULT_THEME.secondary,
        DiagnosticKind::SyntaxError | DiagnosticKind::SemanticError => DEFAULT_THEME.error,
        DiagnosticKind::Warning => DEFAULT_THEME.warning,
    }
}

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &[&Diagnostic],
    selected: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Diagnostics ", is_focused);

    if diagnostics.is_empty() {
        let paragraph = Paragraph::new("No diagnostics")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area);
    if let Some(index) = selected {
        scroll_into_view(scroll_offset, index, height);
    }
    clamp_scroll(scroll_offset, diagnostics.len(), height);

    let items: Vec<ListItem> = diagnostics
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(height)
        .map(|(index, diagnostic)| {
            let mut item = ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<15}", diagnostic.kind),
                    Style::default()
                        .fg(kind_color(diagnostic.kind))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>4}:{:<4} ", diagnostic.line, diagnostic.position),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(diagnostic.message.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
            if selected == Some(index) {
                item = item.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
            item
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
