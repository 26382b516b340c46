//! Token stream pane rendering

use super::{clamp_scroll, pane_block, visible_height};
use crate::parser::lexer::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the token pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Tokens ", is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area);
    clamp_scroll(scroll_offset, tokens.len(), height);

    let items: Vec<ListItem> = tokens
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|token| {
            let kind_style = if token.kind.is_error() {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.primary)
            };
            // multi-line comments are shown on one row
            let lexeme = token.lexeme.replace('\n', "⏎");
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>4}:{:<4} ", token.line, token.position),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<20} ", token.kind), kind_style),
                Span::styled(lexeme, Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
