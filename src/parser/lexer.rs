//! Lexer (tokenizer) for C-like source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The lexer knows nothing about grammar: it walks the source line by line and
//! classifies text with the ordered matcher list in [`super::matchers`].
//!
//! Faults never stop the scan. An unexpected character, an unclosed string or
//! an unclosed block comment is emitted as an error token, reported as a
//! lexical [`Diagnostic`], and scanning resumes after a recovery skip.

use super::matchers::classify;
use crate::diagnostics::{Diagnostic, SourceLocation};
use serde::Serialize;
use std::fmt;

/// Token categories, including the lexer's error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Recognized but never emitted
    Whitespace,
    CommentLine,
    /// May span several lines; the lexeme keeps the embedded line breaks
    CommentBlock,
    /// Integer or decimal literal
    Number,
    Preprocessor,
    Hex,
    Char,
    String,
    Keyword,
    Identifier,
    Punctuation,
    Operator,

    // Errors
    UnclosedString,
    UnclosedComment,
    UnexpectedCharacter,
}

impl TokenKind {
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::UnclosedString | TokenKind::UnclosedComment | TokenKind::UnexpectedCharacter
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::CommentLine | TokenKind::CommentBlock)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::CommentLine => "COMMENT_LINE",
            TokenKind::CommentBlock => "COMMENT_BLOCK",
            TokenKind::Number => "NUMBER",
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::Hex => "HEX",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Operator => "OPERATOR",
            TokenKind::UnclosedString => "UNCLOSED_STRING",
            TokenKind::UnclosedComment => "UNCLOSED_COMMENT",
            TokenKind::UnexpectedCharacter => "UNEXPECTED_CHARACTER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified slice of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub line: usize,
    pub position: usize,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(rename = "token")]
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            line: location.line,
            position: location.position,
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.position)
    }

    /// True when this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }

    /// Location just past the last character of the lexeme
    pub fn end_location(&self) -> SourceLocation {
        match self.lexeme.rsplit_once('\n') {
            Some((head, tail)) => SourceLocation::new(
                self.line + head.matches('\n').count() + 1,
                tail.chars().count(),
            ),
            None => SourceLocation::new(self.line, self.position + self.lexeme.chars().count()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme)
    }
}

/// Tokenize a whole source text.
///
/// Returns every emitted token, error tokens included, and the lexical
/// diagnostics in source order.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(source).tokenize()
}

/// Line-oriented scanner state
pub struct Lexer {
    lines: Vec<Vec<char>>,
    line: usize,
    position: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            lines: input.split('\n').map(|l| l.chars().collect()).collect(),
            line: 0,
            position: 0,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while self.line < self.lines.len() {
            let Some(ch) = self.peek() else {
                self.line += 1;
                self.position = 0;
                continue;
            };

            if ch.is_whitespace() {
                self.position += 1;
                continue;
            }

            if ch == '/' && self.peek_ahead(1) == Some('*') {
                self.block_comment();
                continue;
            }

            if (ch == '"' || ch == '\'') && self.quoted(ch) {
                continue;
            }

            self.classify_rest_of_line();
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.diagnostics.len(),
            "lexical analysis finished"
        );
        (self.tokens, self.diagnostics)
    }

    /// Scan a `/* ... */` comment, possibly across lines
    fn block_comment(&mut self) {
        let start = self.current_location();
        let first: &[char] = &self.lines[self.line][self.position..];

        // search past the opener so that `/*/` does not close itself
        if let Some(end) = find_close(first, 2) {
            let lexeme: String = first[..end + 2].iter().collect();
            self.emit(TokenKind::CommentBlock, lexeme, start);
            return;
        }

        let mut captured: String = first.iter().collect();
        for line in start.line + 1..self.lines.len() {
            let text = &self.lines[line];
            captured.push('\n');
            if let Some(end) = find_close(text, 0) {
                captured.extend(&text[..end + 2]);
                self.tokens
                    .push(Token::new(TokenKind::CommentBlock, captured, start));
                self.line = line;
                self.position = end + 2;
                return;
            }
            captured.extend(text.iter());
        }

        // Recovery: report the opening line only and rescan from the next line
        let partial: String = first.iter().collect();
        self.error(TokenKind::UnclosedComment, partial, start, "Unclosed block comment".to_string());
        self.line = start.line + 1;
        self.position = 0;
    }

    /// Scan a quoted literal starting at the current position.
    ///
    /// Returns `false` when the closed literal does not classify, leaving the
    /// position unchanged for the general classifier.
    fn quoted(&mut self, quote: char) -> bool {
        let start = self.current_location();
        let rest = &self.lines[self.line][self.position..];

        let mut close = None;
        let mut i = 1;
        while i < rest.len() {
            match rest[i] {
                '\\' => i += 2,
                c if c == quote => {
                    close = Some(i);
                    break;
                }
                _ => i += 1,
            }
        }

        match close {
            Some(end) => {
                let candidate: String = rest[..=end].iter().collect();
                match classify(&candidate) {
                    Some(kind) => {
                        self.emit(kind, candidate, start);
                        true
                    }
                    None => false,
                }
            }
            None => {
                self.error(
                    TokenKind::UnclosedString,
                    quote.to_string(),
                    start,
                    "Unclosed string literal".to_string(),
                );
                true
            }
        }
    }

    /// Classify the text at the current position, trying progressively
    /// smaller candidates
    fn classify_rest_of_line(&mut self) {
        let start = self.current_location();
        let rest = &self.lines[self.line][self.position..];
        let rest_text: String = rest.iter().collect();

        // (a) the whole remainder of the line
        if let Some(kind) = classify(&rest_text) {
            self.emit(kind, rest_text, start);
            return;
        }

        let units = lexical_units(rest, 3);

        // (b) symbol + word combinations such as `#define`, `# define` or `<=`,
        // taken from the source so that inner spacing is kept
        if units.len() > 1 && (!is_alnum(&units[0].1) || !is_alnum(&units[1].1)) {
            let (offset, second) = &units[1];
            let pair: String = rest[..offset + second.chars().count()].iter().collect();
            if let Some(kind) = classify(&pair) {
                self.emit(kind, pair, start);
                return;
            }
        }

        // (c) decimal literal split into digits, '.', digits
        if let Some(number) = decimal_literal(&units, &rest_text) {
            self.emit(TokenKind::Number, number, start);
            return;
        }

        // (d) the first unit on its own
        let Some((_, first)) = units.into_iter().next() else {
            // only reachable on whitespace, which the caller skips
            self.position += 1;
            return;
        };
        match classify(&first) {
            Some(kind) => self.emit(kind, first, start),
            None => {
                let message = format!("Unexpected character '{}'", first);
                self.error(TokenKind::UnexpectedCharacter, first, start, message);
            }
        }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: String, location: SourceLocation) {
        self.position += lexeme.chars().count();
        self.tokens.push(Token::new(kind, lexeme, location));
    }

    fn error(&mut self, kind: TokenKind, lexeme: String, location: SourceLocation, message: String) {
        tracing::trace!(line = location.line, position = location.position, %message, "lexical recovery");
        self.diagnostics.push(Diagnostic::lexical(message, location));
        self.emit(kind, lexeme, location);
    }

    fn peek(&self) -> Option<char> {
        self.lines
            .get(self.line)
            .and_then(|l| l.get(self.position))
            .copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.lines
            .get(self.line)
            .and_then(|l| l.get(self.position + n))
            .copied()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.position)
    }
}

/// Index of the `*` of the first `*/` at or after `from`
fn find_close(text: &[char], from: usize) -> Option<usize> {
    (from..text.len().saturating_sub(1)).find(|&i| text[i] == '*' && text[i + 1] == '/')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_alnum(unit: &str) -> bool {
    !unit.is_empty() && unit.chars().all(char::is_alphanumeric)
}

/// Split text into up to `limit` lexical units: maximal runs of word
/// characters, or single other non-space characters. Each unit carries its
/// character offset.
fn lexical_units(text: &[char], limit: usize) -> Vec<(usize, String)> {
    let mut units = Vec::new();
    let mut i = 0;
    while i < text.len() && units.len() < limit {
        let c = text[i];
        if c.is_whitespace() {
            i += 1;
        } else if is_word_char(c) {
            let start = i;
            while i < text.len() && is_word_char(text[i]) {
                i += 1;
            }
            units.push((start, text[start..i].iter().collect()));
        } else {
            units.push((i, c.to_string()));
            i += 1;
        }
    }
    units
}

/// Rebuild `digits . digits` from three units when they are written together
/// and followed by `;`, `}`, whitespace or the end of the line
fn decimal_literal(units: &[(usize, String)], rest: &str) -> Option<String> {
    let [(_, whole), (_, dot), (_, frac)] = units else {
        return None;
    };
    if dot != "." || classify(whole) != Some(TokenKind::Number) {
        return None;
    }
    if classify(frac) != Some(TokenKind::Number) {
        return None;
    }

    let number = format!("{}{}{}", whole, dot, frac);
    let after = rest.strip_prefix(number.as_str())?.chars().next();
    match after {
        None => Some(number),
        Some(c) if c == ';' || c == '}' || c.is_whitespace() => Some(number),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .0
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_simple_declaration() {
        let (tokens, errors) = tokenize("int a = 5;");
        assert!(errors.is_empty());
        let summary: Vec<(TokenKind, &str, usize)> = tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.position))
            .collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Keyword, "int", 0),
                (TokenKind::Identifier, "a", 4),
                (TokenKind::Operator, "=", 6),
                (TokenKind::Number, "5", 8),
                (TokenKind::Punctuation, ";", 9),
            ]
        );
    }

    #[test]
    fn test_decimal_reconstruction() {
        let tokens = kinds("float b = a + 3.14;");
        assert!(tokens.contains(&(TokenKind::Number, "3.14".to_string())));
    }

    #[test]
    fn test_decimal_at_end_of_line() {
        let tokens = kinds("x = 2.5");
        assert_eq!(tokens.last(), Some(&(TokenKind::Number, "2.5".to_string())));
    }

    #[test]
    fn test_decimal_boundary_rejects_other_followers() {
        // the split number is only joined before `;`, `}` or whitespace
        let tokens = kinds("(2.5)");
        assert_eq!(tokens[1], (TokenKind::Number, "2".to_string()));
        assert_eq!(tokens[2], (TokenKind::Punctuation, ".".to_string()));
        assert_eq!(tokens[3], (TokenKind::Number, "5".to_string()));
    }

    #[test]
    fn test_two_character_operators() {
        let tokens = kinds("a<=b!=c");
        assert_eq!(tokens[1], (TokenKind::Operator, "<=".to_string()));
        assert_eq!(tokens[3], (TokenKind::Operator, "!=".to_string()));
    }

    #[test]
    fn test_unexpected_character() {
        let (tokens, errors) = tokenize("int a = 5$;");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'$'"));
        assert_eq!(errors[0].position, 9);
        let bad = tokens.iter().find(|t| t.kind.is_error()).unwrap();
        assert_eq!(bad.kind, TokenKind::UnexpectedCharacter);
        assert_eq!(bad.lexeme, "$");
        assert_eq!(tokens.last().unwrap().lexeme, ";");
    }

    #[test]
    fn test_unclosed_string_recovers() {
        let (tokens, errors) = tokenize("s = \"abc");
        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[2].kind, TokenKind::UnclosedString);
        assert_eq!(tokens[2].lexeme, "\"");
        assert_eq!(tokens[3], Token::new(TokenKind::Identifier, "abc", SourceLocation::new(0, 5)));
    }

    #[test]
    fn test_string_and_char_literals() {
        let tokens = kinds("\"hi there\" 'c'");
        assert_eq!(tokens[0], (TokenKind::String, "\"hi there\"".to_string()));
        assert_eq!(tokens[1], (TokenKind::Char, "'c'".to_string()));
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let (tokens, errors) = tokenize("a /* one\ntwo */ b");
        assert!(errors.is_empty());
        assert_eq!(tokens[1].kind, TokenKind::CommentBlock);
        assert_eq!(tokens[1].lexeme, "/* one\ntwo */");
        assert_eq!(tokens[1].location(), SourceLocation::new(0, 2));
        assert_eq!(tokens[2].location(), SourceLocation::new(1, 7));
    }

    #[test]
    fn test_unclosed_block_comment_skips_to_next_line() {
        let (tokens, errors) = tokenize("/* open\nint x;");
        assert_eq!(errors.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::UnclosedComment);
        assert_eq!(tokens[0].lexeme, "/* open");
        assert!(tokens[1].is(TokenKind::Keyword, "int"));
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn test_line_comment_and_preprocessor() {
        let tokens = kinds("#include <stdio.h>\nint x; // trailing");
        assert_eq!(tokens[0], (TokenKind::Preprocessor, "#include".to_string()));
        assert_eq!(
            tokens.last(),
            Some(&(TokenKind::CommentLine, "// trailing".to_string()))
        );
    }

    #[test]
    fn test_spaced_directive() {
        let (tokens, errors) = tokenize("# define X 1");
        assert!(errors.is_empty(), "{:?}", errors);
        let summary: Vec<(TokenKind, &str, usize)> = tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.position))
            .collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Preprocessor, "# define", 0),
                (TokenKind::Identifier, "X", 9),
                (TokenKind::Number, "1", 11),
            ]
        );
    }

    #[test]
    fn test_spaced_operator_pair_stays_split() {
        let tokens = kinds("a < = b");
        assert_eq!(tokens[1], (TokenKind::Operator, "<".to_string()));
        assert_eq!(tokens[2], (TokenKind::Operator, "=".to_string()));
    }

    #[test]
    fn test_hex_literal() {
        let tokens = kinds("int m = 0xFF;");
        assert_eq!(tokens[3], (TokenKind::Hex, "0xFF".to_string()));
    }

    #[test]
    fn test_end_location_of_multiline_token() {
        let token = Token::new(TokenKind::CommentBlock, "/* a\nbc */", SourceLocation::new(2, 4));
        assert_eq!(token.end_location(), SourceLocation::new(3, 5));
    }
}
