//! Value types and assignment compatibility
//!
//! # Type Rules
//!
//! - Integer and hex literals are `int`, literals with a decimal point are `float`
//! - String literals are `string`, character literals are `char`
//! - Identifiers carry the type they were declared with
//! - A value may be assigned to a target of the same type, and an `int` value
//!   may be widened into a `float` target; every other pairing is a mismatch

use crate::parser::lexer::{Token, TokenKind};

pub const INT: &str = "int";
pub const FLOAT: &str = "float";
pub const STRING: &str = "string";
pub const CHAR: &str = "char";

/// Value type of a literal token, `None` for anything else
pub fn literal_type(token: &Token) -> Option<&'static str> {
    match token.kind {
        TokenKind::Number if token.lexeme.contains('.') => Some(FLOAT),
        TokenKind::Number | TokenKind::Hex => Some(INT),
        TokenKind::String => Some(STRING),
        TokenKind::Char => Some(CHAR),
        _ => None,
    }
}

/// Whether a value of type `value` may be stored in a `target`-typed variable
pub fn is_assignable(target: &str, value: &str) -> bool {
    target == value || (target == FLOAT && value == INT)
}
