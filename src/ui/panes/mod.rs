//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`source`]: Source text colored by token kind, with diagnostic lines marked
//! - [`tokens`]: The token stream with locations and kinds
//! - [`diagnostics`]: Every diagnostic in stage order, with the selection
//! - [`symbols`]: The final symbol table snapshot
//! - [`status`]: Status bar with stage verdicts and keybindings
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*_pane()` function that draws
//! from borrowed report data. Scroll offsets live in the app and are clamped
//! here against the visible height.

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod symbols;
pub mod tokens;

// Re-export render functions for convenience
pub use diagnostics::render_diagnostics_pane;
pub use source::{render_source_pane, SourceRenderData};
pub use status::render_status_bar;
pub use symbols::render_symbols_pane;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus color applied
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least 1
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// Adjust a scroll offset so that `row` is on screen
pub(crate) fn scroll_into_view(offset: &mut usize, row: usize, visible_height: usize) {
    if row < *offset {
        *offset = row;
    } else if row >= *offset + visible_height {
        *offset = row + 1 - visible_height;
    }
}
