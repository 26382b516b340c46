//! Semantic checks over the significant token stream
//!
//! A single left-to-right pass that tracks the current assignment target and
//! whether the cursor is on its right-hand side. Errors and unused-variable
//! warnings are collected separately.

use super::types::{is_assignable, literal_type};
use crate::diagnostics::{Diagnostic, SourceLocation};
use crate::parser::declarations::is_type_keyword;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::significant_tokens;
use crate::symbols::{SymbolSnapshot, SymbolTable};
use rustc_hash::{FxHashMap, FxHashSet};

/// Result of the semantic stage
#[derive(Debug, Clone)]
pub struct SemanticOutcome {
    /// True when no semantic error was found; warnings do not count
    pub success: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub snapshot: SymbolSnapshot,
}

/// Check declarations, initialization, const-ness and types in one pass.
///
/// `table` is the one filled in by the parser. Its `used` and `initialized`
/// flags are updated in place; initialization is recomputed from scratch so
/// that reads before the first assignment are always caught.
pub fn analyze(tokens: &[Token], table: &mut SymbolTable) -> SemanticOutcome {
    let significant = significant_tokens(tokens);
    let outcome = Analyzer::new(&significant, table).run();
    tracing::debug!(
        success = outcome.success,
        errors = outcome.errors.len(),
        warnings = outcome.warnings.len(),
        "semantic analysis finished"
    );
    outcome
}

/// Linear pass state
struct Analyzer<'t, 'a> {
    tokens: &'t [Token],
    table: &'a mut SymbolTable,
    errors: Vec<Diagnostic>,

    /// Between an `=` and the end of its assignment
    in_rhs: bool,
    target: Option<&'t Token>,
    /// The current statement started with `const` or a type keyword
    in_declaration: bool,
    const_violation: bool,
    at_statement_start: bool,

    declared_at: FxHashMap<&'t str, SourceLocation>,
    undeclared: Vec<&'t Token>,
    seen_undeclared: FxHashSet<&'t str>,
}

impl<'t, 'a> Analyzer<'t, 'a> {
    fn new(tokens: &'t [Token], table: &'a mut SymbolTable) -> Self {
        Self {
            tokens,
            table,
            errors: Vec::new(),
            in_rhs: false,
            target: None,
            in_declaration: false,
            const_violation: false,
            at_statement_start: true,
            declared_at: FxHashMap::default(),
            undeclared: Vec::new(),
            seen_undeclared: FxHashSet::default(),
        }
    }

    fn run(mut self) -> SemanticOutcome {
        self.table.clear_initialization();

        for index in 0..self.tokens.len() {
            self.visit(index);
        }

        for token in std::mem::take(&mut self.undeclared) {
            self.errors.push(Diagnostic::semantic(
                format!("Variable '{}' not declared", token.lexeme),
                token.location(),
            ));
        }

        let warnings = self
            .table
            .unused()
            .into_iter()
            .map(|name| {
                let location = self.declared_at.get(name).copied().unwrap_or_default();
                Diagnostic::warning(format!("Variable '{}' declared but never used", name), location)
            })
            .collect();

        SemanticOutcome {
            success: self.errors.is_empty(),
            errors: self.errors,
            warnings,
            snapshot: self.table.snapshot(),
        }
    }

    fn visit(&mut self, index: usize) {
        let tokens = self.tokens;
        let token = &tokens[index];
        let previous = index.checked_sub(1).map(|i| &tokens[i]);
        let next = tokens.get(index + 1);

        let starts_statement = std::mem::replace(&mut self.at_statement_start, false);
        if starts_statement && (token.is(TokenKind::Keyword, "const") || is_type_keyword(token)) {
            self.in_declaration = true;
        }

        match token.kind {
            TokenKind::Operator if token.lexeme == "=" => {
                if let Some(target) = previous.filter(|p| p.kind == TokenKind::Identifier) {
                    self.begin_assignment(target);
                }
            }
            TokenKind::Punctuation => match token.lexeme.as_str() {
                ";" => {
                    self.finish_assignment();
                    self.in_declaration = false;
                    self.at_statement_start = true;
                }
                "," if self.in_declaration => self.finish_assignment(),
                "{" | "}" => {
                    self.reset_assignment();
                    self.in_declaration = false;
                    self.at_statement_start = true;
                }
                _ => {}
            },
            TokenKind::Identifier => {
                let is_declarator = self.in_declaration && !self.in_rhs;
                let is_target = next.is_some_and(|n| n.is(TokenKind::Operator, "="));
                let is_callee = next.is_some_and(|n| n.is(TokenKind::Punctuation, "("));

                if is_declarator {
                    self.declared_at
                        .entry(token.lexeme.as_str())
                        .or_insert_with(|| token.location());
                } else if !is_target && !is_callee {
                    self.read(token);
                }
            }
            _ => {
                if let Some(value_type) = literal_type(token) {
                    self.check_value(value_type, token);
                }
            }
        }
    }

    fn begin_assignment(&mut self, target: &'t Token) {
        self.in_rhs = true;
        self.target = Some(target);

        // a const declarator's own initializer is not a reassignment
        if self.table.is_const(&target.lexeme) && !self.in_declaration {
            self.const_violation = true;
            self.errors.push(Diagnostic::semantic(
                format!("Assignment to constant variable '{}'", target.lexeme),
                target.location(),
            ));
        }
    }

    fn finish_assignment(&mut self) {
        if let Some(target) = self.target {
            if !self.const_violation {
                self.table.mark_initialized(&target.lexeme);
            }
        }
        self.reset_assignment();
    }

    fn reset_assignment(&mut self) {
        self.in_rhs = false;
        self.target = None;
        self.const_violation = false;
    }

    fn read(&mut self, token: &'t Token) {
        let name = token.lexeme.as_str();

        let Some(declared_type) = self.table.declared_type(name).map(str::to_string) else {
            if self.seen_undeclared.insert(name) {
                self.undeclared.push(token);
            }
            return;
        };

        self.table.mark_used(name);
        if !self.table.is_initialized(name) {
            self.errors.push(Diagnostic::semantic(
                format!("Variable '{}' used before initialization", name),
                token.location(),
            ));
        }

        if let Some(target) = self.target.filter(|_| self.in_rhs) {
            self.table.mark_used(&target.lexeme);
            self.check_value(&declared_type, token);
        }
    }

    /// Compare a value against the current assignment target, if any
    fn check_value(&mut self, value_type: &str, value: &Token) {
        if !self.in_rhs {
            return;
        }
        let Some(target) = self.target else {
            return;
        };
        let Some(target_type) = self.table.declared_type(&target.lexeme) else {
            return;
        };

        if !is_assignable(target_type, value_type) {
            self.errors.push(Diagnostic::semantic(
                format!(
                    "Type mismatch: cannot assign '{}' value to '{}' variable '{}'",
                    value_type, target_type, target.lexeme
                ),
                value.location(),
            ));
        }
    }
}
