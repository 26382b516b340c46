//! Token classification by ordered matcher list
//!
//! Each [`TokenKind`] that can be recognized from text has a matcher that
//! decides whether a candidate string is *entirely* a token of that kind.
//! [`classify`] tries the matchers in [`CLASSIFICATION_ORDER`] and returns the
//! first kind that accepts. The order is part of the language definition:
//! keywords shadow identifiers, numbers are tried before punctuation.

use super::lexer::TokenKind;

/// Priority order in which token kinds are tried
pub const CLASSIFICATION_ORDER: [TokenKind; 12] = [
    TokenKind::Whitespace,
    TokenKind::CommentBlock,
    TokenKind::CommentLine,
    TokenKind::Number,
    TokenKind::Preprocessor,
    TokenKind::Hex,
    TokenKind::Char,
    TokenKind::String,
    TokenKind::Keyword,
    TokenKind::Identifier,
    TokenKind::Punctuation,
    TokenKind::Operator,
];

/// Reserved words of the language
pub const KEYWORDS: [&str; 35] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while", "_Bool", "_Complex", "_Imaginary",
];

/// Directives recognized after `#`
pub const PREPROCESSOR_DIRECTIVES: [&str; 8] = [
    "include", "define", "ifdef", "ifndef", "endif", "else", "elif", "pragma",
];

const PUNCTUATION: &str = "{}()[];,:.'\"";
const SINGLE_OPERATORS: &str = "+-*/=<>!&|";
const DOUBLE_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "&&", "||"];

/// Classify a candidate text, or `None` when no kind accepts all of it
pub fn classify(text: &str) -> Option<TokenKind> {
    CLASSIFICATION_ORDER
        .iter()
        .copied()
        .find(|&kind| matches_kind(kind, text))
}

/// Whether `text` is, in its entirety, a token of `kind`
///
/// Error kinds never match.
pub fn matches_kind(kind: TokenKind, text: &str) -> bool {
    match kind {
        TokenKind::Whitespace => !text.is_empty() && text.chars().all(char::is_whitespace),
        TokenKind::CommentBlock => {
            text.starts_with("/*") && text.ends_with("*/") && text.chars().count() >= 4
        }
        TokenKind::CommentLine => text.starts_with("//") && !text.contains('\n'),
        TokenKind::Number => is_number(text),
        TokenKind::Preprocessor => is_preprocessor(text),
        TokenKind::Hex => is_hex(text),
        TokenKind::Char => is_char(text),
        TokenKind::String => is_string(text),
        TokenKind::Keyword => is_keyword(text),
        TokenKind::Identifier => is_identifier(text),
        TokenKind::Punctuation => single_char_in(text, PUNCTUATION),
        TokenKind::Operator => {
            single_char_in(text, SINGLE_OPERATORS) || DOUBLE_OPERATORS.contains(&text)
        }
        TokenKind::UnclosedString
        | TokenKind::UnclosedComment
        | TokenKind::UnexpectedCharacter => false,
    }
}

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

// digits, optionally followed by '.' and more digits
fn is_number(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, frac)) => is_digits(whole) && is_digits(frac),
        None => is_digits(text),
    }
}

fn is_preprocessor(text: &str) -> bool {
    let Some(rest) = text.trim_start().strip_prefix('#') else {
        return false;
    };
    PREPROCESSOR_DIRECTIVES.contains(&rest.trim_start())
}

fn is_hex(text: &str) -> bool {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"));
    digits.is_some_and(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_hexdigit()))
}

fn is_char(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    match chars.as_slice() {
        ['\'', c, '\''] => *c != '\n',
        ['\'', '\\', c, '\''] => *c != '\n',
        _ => false,
    }
}

fn is_string(text: &str) -> bool {
    let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };

    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '"' => return false,
            _ => {}
        }
    }
    true
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn single_char_in(text: &str, set: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => set.contains(c),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_shadows_identifier() {
        assert_eq!(classify("while"), Some(TokenKind::Keyword));
        assert_eq!(classify("whilex"), Some(TokenKind::Identifier));
        assert_eq!(classify("_Bool"), Some(TokenKind::Keyword));
    }

    #[test]
    fn test_order_is_fixed() {
        let names: Vec<String> = CLASSIFICATION_ORDER.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "WHITESPACE",
                "COMMENT_BLOCK",
                "COMMENT_LINE",
                "NUMBER",
                "PREPROCESSOR",
                "HEX",
                "CHAR",
                "STRING",
                "KEYWORD",
                "IDENTIFIER",
                "PUNCTUATION",
                "OPERATOR",
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify("42"), Some(TokenKind::Number));
        assert_eq!(classify("3.14"), Some(TokenKind::Number));
        assert_eq!(classify("3."), None);
        assert_eq!(classify("1.2.3"), None);
        assert_eq!(classify("12ab"), None);
    }

    #[test]
    fn test_hex_is_not_a_number() {
        assert_eq!(classify("0x1F"), Some(TokenKind::Hex));
        assert_eq!(classify("0x"), None);
    }

    #[test]
    fn test_preprocessor_needs_known_directive() {
        assert_eq!(classify("#include"), Some(TokenKind::Preprocessor));
        assert_eq!(classify("#  define"), Some(TokenKind::Preprocessor));
        assert_eq!(classify("#inclde"), None);
        assert_eq!(classify("#include <stdio.h>"), None);
    }

    #[test]
    fn test_char_and_string_literals() {
        assert_eq!(classify("'a'"), Some(TokenKind::Char));
        assert_eq!(classify("'\\n'"), Some(TokenKind::Char));
        assert_eq!(classify("'ab'"), None);
        assert_eq!(classify("\"hi\""), Some(TokenKind::String));
        assert_eq!(classify("\"a\\\"b\""), Some(TokenKind::String));
        assert_eq!(classify("\"a\"b\""), None);
        assert_eq!(classify("\""), Some(TokenKind::Punctuation));
    }

    #[test]
    fn test_comments() {
        assert_eq!(classify("// note"), Some(TokenKind::CommentLine));
        assert_eq!(classify("/* x */"), Some(TokenKind::CommentBlock));
        assert_eq!(classify("/*/"), None);
    }

    #[test]
    fn test_operators_and_punctuation() {
        assert_eq!(classify("<="), Some(TokenKind::Operator));
        assert_eq!(classify("="), Some(TokenKind::Operator));
        assert_eq!(classify("=>"), None);
        assert_eq!(classify(";"), Some(TokenKind::Punctuation));
        assert_eq!(classify("$"), None);
    }
}
