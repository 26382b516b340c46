//! Source code pane rendering with token-based highlighting
//!
//! This module renders the analyzed source text, colored with the kinds the
//! lexer actually assigned rather than a separate highlighter.
//!
//! # Features
//!
//! - Colors per token kind; lexical error tokens are underlined in red
//! - Lines carrying an error diagnostic get a red background
//! - The line of the selected diagnostic gets an arrow and is kept in view
//! - Line numbering from 0, matching diagnostic line numbers

use super::{clamp_scroll, pane_block, scroll_into_view, visible_height};
use crate::parser::declarations::is_type_keyword;
use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashSet;

/// Data needed to draw the source pane
pub struct SourceRenderData<'a> {
    pub source: &'a str,
    pub tokens: &'a [Token],
    /// Lines with at least one error diagnostic
    pub error_lines: FxHashSet<usize>,
    /// Line of the selected diagnostic
    pub selected_line: Option<usize>,
    /// Scroll so that the selected line is visible
    pub follow_selected: bool,
}

fn token_style(token: &Token, next: Option<&Token>) -> Style {
    let base = Style::default();
    match token.kind {
        TokenKind::Keyword if is_type_keyword(token) => base.fg(DEFAULT_THEME.type_name),
        TokenKind::Keyword => base.fg(DEFAULT_THEME.keyword).add_modifier(Modifier::BOLD),
        TokenKind::Identifier if next.is_some_and(|n| n.is(TokenKind::Punctuation, "(")) => {
            base.fg(DEFAULT_THEME.function)
        }
        TokenKind::Number | TokenKind::Hex => base.fg(DEFAULT_THEME.number),
        TokenKind::String | TokenKind::Char => base.fg(DEFAULT_THEME.string),
        TokenKind::CommentLine | TokenKind::CommentBlock => base.fg(DEFAULT_THEME.comment),
        TokenKind::Preprocessor => base.fg(DEFAULT_THEME.secondary),
        TokenKind::Punctuation if "{}()[]".contains(token.lexeme.as_str()) => {
            base.fg(DEFAULT_THEME.primary)
        }
        kind if kind.is_error() => base
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
        _ => base.fg(DEFAULT_THEME.fg),
    }
}

/// Per-character styles for every line, filled in from token extents
fn character_styles(lines: &[Vec<char>], tokens: &[Token]) -> Vec<Vec<Style>> {
    let mut styles: Vec<Vec<Style>> = lines
        .iter()
        .map(|line| vec![Style::default().fg(DEFAULT_THEME.fg); line.len()])
        .collect();

    for (index, token) in tokens.iter().enumerate() {
        let style = token_style(token, tokens.get(index + 1));
        let (mut line, mut column) = (token.line, token.position);
        for c in token.lexeme.chars() {
            if c == '\n' {
                line += 1;
                column = 0;
                continue;
            }
            if let Some(slot) = styles.get_mut(line).and_then(|l| l.get_mut(column)) {
                *slot = style;
            }
            column += 1;
        }
    }
    styles
}

/// Group runs of equally styled characters into spans
fn styled_spans(chars: &[char], styles: &[Style]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for i in 1..=chars.len() {
        if i == chars.len() || styles[i] != styles[start] {
            let text: String = chars[start..i].iter().collect();
            spans.push(Span::styled(text, styles[start]));
            start = i;
        }
    }
    spans
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: &SourceRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source Code ", is_focused);

    let lines: Vec<Vec<char>> = data.source.split('\n').map(|l| l.chars().collect()).collect();
    let styles = character_styles(&lines, data.tokens);

    let height = visible_height(area);
    if let Some(selected) = data.selected_line.filter(|_| data.follow_selected) {
        scroll_into_view(scroll_offset, selected, height);
    }
    clamp_scroll(scroll_offset, lines.len(), height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .zip(&styles)
        .enumerate()
        .skip(*scroll_offset)
        .take(height)
        .map(|(idx, (chars, line_styles))| {
            let is_selected = data.selected_line == Some(idx);
            let has_error = data.error_lines.contains(&idx);

            let marker = if is_selected { "▶" } else { " " };
            let num_style = if has_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{}{:4} ", marker, idx), num_style)];
            let mut content = styled_spans(chars, line_styles);

            let background = if is_selected {
                Some(DEFAULT_THEME.current_line_bg)
            } else if has_error {
                Some(DEFAULT_THEME.error_line_bg)
            } else {
                None
            };
            if let Some(bg) = background {
                for span in &mut content {
                    span.style = span.style.bg(bg);
                }
            }

            spans.extend(content);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
