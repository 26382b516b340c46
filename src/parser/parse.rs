//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! token filtering, cursor helpers, bracket tracking, error recovery and the
//! main [`parse`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing variable declarations into the symbol table
//! - `statements`: Parsing statements and control structures
//! - `expressions`: Parsing expressions by precedence level
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The parser owns an immutable token slice and a single cursor. Alternatives
//! are tried between an explicit [`Checkpoint`] save and restore, never by
//! unwinding. Faults are reported as diagnostics and the parser resynchronizes
//! on the next `;` or `}`, so one pass reports every independent syntax error.

use crate::config::AnalyzerConfig;
use crate::diagnostics::{Diagnostic, SourceLocation};
use crate::parser::lexer::{Token, TokenKind};
use crate::symbols::SymbolTable;
use rustc_hash::FxHashSet;

/// Result of the syntactic stage
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// True only when no diagnostic was produced
    pub valid: bool,
    /// Declarations collected so far, returned even when parsing failed
    pub table: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn into_parts(self) -> (bool, SymbolTable, Vec<Diagnostic>) {
        (self.valid, self.table, self.diagnostics)
    }
}

/// Result of trying one statement-level production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Matched,
    /// Nothing consumed, nothing reported
    NoMatch,
    /// Reported and already resynchronized
    Failed,
}

/// Saved cursor state for backtracking
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    position: usize,
    brackets: usize,
}

#[derive(Debug, Clone, Copy)]
struct OpenBracket {
    bracket: char,
    location: SourceLocation,
}

/// Parse a token stream with the default configuration
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    parse_with_config(tokens, &AnalyzerConfig::default())
}

pub fn parse_with_config(tokens: &[Token], config: &AnalyzerConfig) -> ParseOutcome {
    let significant = significant_tokens(tokens);
    let outcome = Parser::new(&significant, config).parse_unit();
    tracing::debug!(
        valid = outcome.valid,
        diagnostics = outcome.diagnostics.len(),
        symbols = outcome.table.len(),
        "syntactic analysis finished"
    );
    outcome
}

/// Drop comments and every token on a line holding a preprocessor directive.
///
/// Filtering an already filtered stream returns it unchanged.
pub fn significant_tokens(tokens: &[Token]) -> Vec<Token> {
    let directive_lines: FxHashSet<usize> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Preprocessor)
        .map(|t| t.line)
        .collect();

    tokens
        .iter()
        .filter(|t| !t.kind.is_comment() && !directive_lines.contains(&t.line))
        .cloned()
        .collect()
}

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

fn bracket_of(token: &Token) -> Option<char> {
    if token.kind != TokenKind::Punctuation {
        return None;
    }
    match token.lexeme.as_str() {
        "(" => Some('('),
        ")" => Some(')'),
        "{" => Some('{'),
        "}" => Some('}'),
        "[" => Some('['),
        "]" => Some(']'),
        _ => None,
    }
}

/// Recursive descent parser for the statement language
pub struct Parser<'t> {
    pub(crate) tokens: &'t [Token],
    pub(crate) position: usize,
    pub(crate) table: SymbolTable,
    diagnostics: Vec<Diagnostic>,
    brackets: Vec<OpenBracket>,
    depth: usize,
    max_depth: usize,
    /// Whether the last resynchronization stopped on (and consumed) a `}`
    pub(crate) synced_on_brace: bool,
}

impl<'t> Parser<'t> {
    /// Create a parser over already filtered tokens
    pub fn new(tokens: &'t [Token], config: &AnalyzerConfig) -> Self {
        Self {
            tokens,
            position: 0,
            table: SymbolTable::new(),
            diagnostics: Vec::new(),
            brackets: Vec::new(),
            depth: 0,
            max_depth: config.max_nesting_depth,
            synced_on_brace: false,
        }
    }

    /// Parse the whole unit: a sequence of control structures and statements
    pub fn parse_unit(mut self) -> ParseOutcome {
        while let Some(token) = self.peek() {
            // stray closers are checked against the bracket stack and skipped
            if matches!(bracket_of(token), Some(')' | '}' | ']')) {
                self.consume();
                continue;
            }

            if self.control_structure() != Outcome::NoMatch {
                continue;
            }
            if self.statement() == Outcome::NoMatch {
                self.fail(format!("Unexpected token '{}'", token.lexeme));
            }
        }

        for open in std::mem::take(&mut self.brackets) {
            self.diagnostics.push(Diagnostic::syntax(
                format!("Unmatched opening bracket '{}'", open.bracket),
                open.location,
            ));
        }

        ParseOutcome {
            valid: self.diagnostics.is_empty(),
            table: self.table,
            diagnostics: self.diagnostics,
        }
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn check(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, lexeme))
    }

    pub(crate) fn check_punct(&self, lexeme: &str) -> bool {
        self.check(TokenKind::Punctuation, lexeme)
    }

    /// Consume the current token, tracking brackets
    pub(crate) fn consume(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.position += 1;

        match bracket_of(token) {
            Some(open @ ('(' | '{' | '[')) => self.brackets.push(OpenBracket {
                bracket: open,
                location: token.location(),
            }),
            Some(close) => {
                let matches_top = self
                    .brackets
                    .last()
                    .is_some_and(|top| closing_for(top.bracket) == close);
                if matches_top {
                    self.brackets.pop();
                } else {
                    self.diagnostics.push(Diagnostic::syntax(
                        format!("Unmatched closing bracket '{}'", close),
                        token.location(),
                    ));
                }
            }
            None => {}
        }
        Some(token)
    }

    /// Consume the current token if it has exactly this kind and text
    pub(crate) fn eat(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        if self.check(kind, lexeme) {
            self.consume();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_punct(&mut self, lexeme: &str) -> bool {
        self.eat(TokenKind::Punctuation, lexeme)
    }

    /// Consume the current token if it has this kind, whatever its text
    pub(crate) fn eat_kind(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.consume()
        } else {
            None
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            brackets: self.brackets.len(),
        }
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.brackets.truncate(checkpoint.brackets);
    }

    /// Location of the current token, or just past the last one at end of input
    pub(crate) fn current_location(&self) -> SourceLocation {
        match (self.peek(), self.tokens.last()) {
            (Some(token), _) => token.location(),
            (None, Some(last)) => last.end_location(),
            (None, None) => SourceLocation::default(),
        }
    }

    pub(crate) fn found(&self) -> String {
        match self.peek() {
            Some(token) => format!("found '{}'", token.lexeme),
            None => "found end of input".to_string(),
        }
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Report a syntax error at the cursor and resynchronize
    pub(crate) fn fail(&mut self, message: String) -> Outcome {
        let location = self.current_location();
        self.report(Diagnostic::syntax(message, location));
        self.synchronize();
        Outcome::Failed
    }

    /// Report "`what`, found ..." at the cursor and resynchronize
    pub(crate) fn fail_expected(&mut self, what: &str) -> Outcome {
        let message = format!("{}, {}", what, self.found());
        self.fail(message)
    }

    /// Panic-mode recovery: skip to just past the next `;` or `}`
    pub(crate) fn synchronize(&mut self) {
        let start = self.position;
        while let Some(token) = self.peek() {
            if token.is(TokenKind::Punctuation, ";") || token.is(TokenKind::Punctuation, "}") {
                break;
            }
            if matches!(bracket_of(token), Some(')' | ']')) {
                self.consume();
            } else {
                self.position += 1;
            }
        }

        self.synced_on_brace = self.check_punct("}");
        self.consume();
        tracing::trace!(skipped = self.position - start, "resynchronized");
    }

    /// Enter one level of parenthesis or block nesting.
    ///
    /// Reports and returns `false` once the configured limit is reached.
    pub(crate) fn enter_nesting(&mut self) -> bool {
        if self.depth >= self.max_depth {
            let location = self.current_location();
            self.report(Diagnostic::syntax(
                format!("Nesting depth exceeds limit of {}", self.max_depth),
                location,
            ));
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Step over the bracketed group opening at the cursor, up to and
    /// including its matching closer. The group never touches the bracket
    /// stack.
    pub(crate) fn skip_group(&mut self) {
        let mut open = 0usize;
        while let Some(token) = self.peek() {
            self.position += 1;
            match bracket_of(token) {
                Some('(' | '{' | '[') => open += 1,
                Some(_) => {
                    open = open.saturating_sub(1);
                    if open == 0 {
                        return;
                    }
                }
                None => {}
            }
        }
    }
}
