//! Declaration parsing implementation
//!
//! This module handles variable declarations and records each declarator in
//! the parser's symbol table:
//!
//! - Plain declarations: `int x;`
//! - Initialized declarations: `float y = x + 1.5;`
//! - Constant declarations: `const int limit = 10;`
//! - Declarator lists: `int a = 1, b, c = a;`
//!
//! # Grammar
//!
//! ```text
//! decl_stmt  ::= ["const"] TYPE_KEYWORD declarator ("," declarator)* ";"
//! declarator ::= IDENTIFIER ["=" expression]
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::diagnostics::Diagnostic;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{Outcome, Parser};
use crate::symbols::SymbolEntry;

/// Keywords that may start a declaration
pub const TYPE_KEYWORDS: [&str; 10] = [
    "int", "float", "double", "char", "void", "short", "long", "signed", "unsigned", "_Bool",
];

pub fn is_type_keyword(token: &Token) -> bool {
    token.kind == TokenKind::Keyword && TYPE_KEYWORDS.contains(&token.lexeme.as_str())
}

impl<'t> Parser<'t> {
    /// Whether the cursor sits on `const` or a type keyword
    pub(crate) fn at_declaration(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.is(TokenKind::Keyword, "const") || is_type_keyword(t))
    }

    /// Parse a declaration statement, inserting each declarator
    pub(crate) fn declaration(&mut self) -> Outcome {
        let is_const = self.eat(TokenKind::Keyword, "const");

        let declared_type = match self.peek() {
            Some(token) if is_type_keyword(token) => {
                self.consume();
                token.lexeme.as_str()
            }
            _ => return self.fail_expected("Expected type after 'const'"),
        };

        loop {
            let Some(name) = self.eat_kind(TokenKind::Identifier) else {
                return self.fail_expected("Expected variable name after type");
            };

            let mut initialized = false;
            if self.eat(TokenKind::Operator, "=") {
                if !self.expression() {
                    return self.fail_expected("Invalid assignment expression");
                }
                initialized = true;
            }

            self.declare(name, declared_type, initialized, is_const);

            if !self.eat_punct(",") {
                break;
            }
        }

        if !self.eat_punct(";") {
            return self.fail_expected("Expected ';' after declaration");
        }
        Outcome::Matched
    }

    fn declare(&mut self, name: &Token, declared_type: &str, initialized: bool, is_const: bool) {
        let entry = SymbolEntry::new(declared_type, initialized, is_const);
        if !self.table.insert(&name.lexeme, entry) {
            self.report(Diagnostic::semantic(
                format!("Redeclaration of variable '{}'", name.lexeme),
                name.location(),
            ));
        }
    }
}
