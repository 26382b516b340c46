//! Statement parsing implementation
//!
//! This module handles every statement form of the language:
//!
//! - Return statements: `return x + 1;`
//! - Declarations (see [`super::declarations`])
//! - Assignments: `x = y * 2;`
//! - Function calls: `print(x, 1);`
//! - Control structures: `if (x < 5) { ... }`, `while (x) { ... }`
//!
//! # Grammar
//!
//! ```text
//! item        ::= control | statement
//! statement   ::= return_stmt | decl_stmt | assign_stmt | call_stmt
//! return_stmt ::= "return" expression ";"
//! assign_stmt ::= IDENTIFIER "=" expression ";"
//! call_stmt   ::= IDENTIFIER "(" [expression ("," expression)*] ")" ";"
//! control     ::= ("if" | "while") "(" expression ")" "{" item* "}"
//! ```
//!
//! Control bodies must be braced. All parsing methods are implemented as
//! `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Outcome, Parser};

impl<'t> Parser<'t> {
    /// Parse one statement, or leave the cursor untouched when none starts here
    pub(crate) fn statement(&mut self) -> Outcome {
        if self.eat(TokenKind::Keyword, "return") {
            return self.return_rest();
        }

        if self.at_declaration() {
            return self.declaration();
        }

        self.assignment_or_call()
    }

    fn return_rest(&mut self) -> Outcome {
        if self.expression() && self.eat_punct(";") {
            Outcome::Matched
        } else {
            self.fail_expected("Invalid return statement syntax")
        }
    }

    fn assignment_or_call(&mut self) -> Outcome {
        let checkpoint = self.checkpoint();

        if self.eat_kind(TokenKind::Identifier).is_some() {
            if self.eat(TokenKind::Operator, "=") {
                if self.expression() && self.eat_punct(";") {
                    return Outcome::Matched;
                }
                return self.fail_expected("Invalid assignment statement");
            }

            if self.check_punct("(") {
                return self.call_rest();
            }
        }

        self.restore(checkpoint);
        Outcome::NoMatch
    }

    /// Argument list and terminator of a call, cursor on the `(`
    fn call_rest(&mut self) -> Outcome {
        self.consume();

        if !self.eat_punct(")") {
            loop {
                if !self.expression() {
                    return self.fail_expected("Invalid function call arguments");
                }
                if self.eat_punct(",") {
                    continue;
                }
                if self.eat_punct(")") {
                    break;
                }
                return self.fail_expected("Expected ',' or ')' in function call");
            }
        }

        if !self.eat_punct(";") {
            return self.fail_expected("Expected ';' after function call");
        }
        Outcome::Matched
    }

    /// Parse an `if` or `while` with its braced body
    pub(crate) fn control_structure(&mut self) -> Outcome {
        let is_control = self
            .peek()
            .is_some_and(|t| t.is(TokenKind::Keyword, "if") || t.is(TokenKind::Keyword, "while"));
        if !is_control {
            return Outcome::NoMatch;
        }
        self.consume();

        let header = self.eat_punct("(")
            && self.expression()
            && self.eat_punct(")")
            && self.check_punct("{");
        if !header {
            return self.fail_expected("Invalid control structure syntax");
        }

        if !self.enter_nesting() {
            self.skip_group();
            return Outcome::Failed;
        }
        self.consume();
        let outcome = self.block_body();
        self.leave_nesting();
        outcome
    }

    /// Items up to and including the closing `}`
    fn block_body(&mut self) -> Outcome {
        let mut outcome = Outcome::Matched;

        while let Some(token) = self.peek() {
            if token.is(TokenKind::Punctuation, "}") {
                self.consume();
                return outcome;
            }

            let item = match self.control_structure() {
                Outcome::NoMatch => self.statement(),
                other => other,
            };

            match item {
                Outcome::Matched => {}
                Outcome::Failed => outcome = Outcome::Failed,
                Outcome::NoMatch => {
                    outcome = self.fail(format!("Unexpected token '{}'", token.lexeme));
                }
            }

            // recovery already consumed this block's closing brace
            if item != Outcome::Matched && self.synced_on_brace {
                self.synced_on_brace = false;
                return outcome;
            }
        }

        // unclosed block; the open brace is reported by the bracket check
        Outcome::Failed
    }
}
