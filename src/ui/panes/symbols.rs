//! Symbol table pane rendering

use super::{clamp_scroll, pane_block, visible_height};
use crate::symbols::SymbolSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn flag(set: bool, name: &'static str) -> Span<'static> {
    if set {
        Span::styled(format!("{} ", name), Style::default().fg(DEFAULT_THEME.success))
    } else {
        Span::styled(
            format!("{} ", "-".repeat(name.len())),
            Style::default().fg(DEFAULT_THEME.comment),
        )
    }
}

/// Render the symbol table pane
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SymbolSnapshot,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Symbol Table ", is_focused);

    if snapshot.is_empty() {
        let paragraph = Paragraph::new("(no declarations)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area);
    clamp_scroll(scroll_offset, snapshot.len(), height);

    let items: Vec<ListItem> = snapshot
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|(name, entry)| {
            let name_style = if entry.used {
                Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.warning)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12} ", name), name_style),
                Span::styled(
                    format!("{:<9}", entry.declared_type),
                    Style::default().fg(DEFAULT_THEME.type_name),
                ),
                flag(entry.used, "used"),
                flag(entry.initialized, "init"),
                flag(entry.is_const, "const"),
            ]))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
