//! Expression parsing implementation
//!
//! Expressions are recognized, not built: each level reports whether a
//! well-formed expression starts at the cursor and advances past it. Callers
//! turn a `false` into their own diagnostic.
//!
//! # Precedence
//!
//! ```text
//! expression ::= comparison
//! comparison ::= additive (("==" | "!=" | "<" | ">" | "<=" | ">=") additive)*
//! additive   ::= term (("+" | "-") term)*
//! term       ::= primary (("*" | "/") primary)*
//! primary    ::= IDENTIFIER | NUMBER | HEX | CHAR | STRING | "(" expression ")"
//! ```
//!
//! All operators are left-associative. Parenthesized sub-expressions count
//! towards the nesting limit.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

const COMPARISON_OPERATORS: [&str; 6] = ["==", "!=", "<", ">", "<=", ">="];
const ADDITIVE_OPERATORS: [&str; 2] = ["+", "-"];
const TERM_OPERATORS: [&str; 2] = ["*", "/"];

const LITERAL_KINDS: [TokenKind; 5] = [
    TokenKind::Identifier,
    TokenKind::Number,
    TokenKind::Hex,
    TokenKind::Char,
    TokenKind::String,
];

impl<'t> Parser<'t> {
    /// Parse expression (top-level entry point)
    pub(crate) fn expression(&mut self) -> bool {
        self.binary_level(&COMPARISON_OPERATORS, Self::additive)
    }

    fn additive(&mut self) -> bool {
        self.binary_level(&ADDITIVE_OPERATORS, Self::term)
    }

    fn term(&mut self) -> bool {
        self.binary_level(&TERM_OPERATORS, Self::primary)
    }

    /// `operand (op operand)*` for one precedence level
    fn binary_level(&mut self, operators: &[&str], operand: fn(&mut Self) -> bool) -> bool {
        if !operand(self) {
            return false;
        }
        while self.at_operator(operators) {
            self.consume();
            if !operand(self) {
                return false;
            }
        }
        true
    }

    fn at_operator(&self, operators: &[&str]) -> bool {
        self.peek().is_some_and(|t| {
            t.kind == TokenKind::Operator && operators.contains(&t.lexeme.as_str())
        })
    }

    fn primary(&mut self) -> bool {
        let Some(token) = self.peek() else {
            return false;
        };

        if LITERAL_KINDS.contains(&token.kind) {
            self.consume();
            return true;
        }

        if token.is(TokenKind::Punctuation, "(") {
            if !self.enter_nesting() {
                // the group stands in as one operand; the limit is already reported
                self.skip_group();
                return true;
            }
            self.consume();
            let closed = self.expression() && self.eat_punct(")");
            self.leave_nesting();
            return closed;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::parse;

    fn is_valid(source: &str) -> bool {
        let (tokens, _) = tokenize(source);
        parse(&tokens).valid
    }

    #[test]
    fn test_precedence_levels() {
        assert!(is_valid("int a = 1;\nint b = a * 2 + 3 - a / 4;"));
        assert!(is_valid("int a = 1;\nint b = (a + 2) * 3 <= a;"));
    }

    #[test]
    fn test_literal_operands() {
        assert!(is_valid("int m = 0xFF;"));
        assert!(is_valid("char c = 'x';"));
        assert!(is_valid("int a = 1;\nint b = a == 1;"));
    }

    #[test]
    fn test_rejects_dangling_operator() {
        assert!(!is_valid("int a = 1 +;"));
        assert!(!is_valid("int a = * 2;"));
        assert!(!is_valid("int a = ();"));
    }

    #[test]
    fn test_nested_parentheses() {
        assert!(is_valid("int a = ((((1))));"));
    }
}
