//! Diagnostic records shared by every analysis stage
//!
//! Stages never abort on a fault. Each fault becomes a [`Diagnostic`] appended
//! to the stage's list, and the stage keeps going so that one pass surfaces
//! every problem it can see.

use serde::Serialize;
use std::fmt;

/// Zero-based line and column of a token or diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub position: usize,
}

impl SourceLocation {
    pub fn new(line: usize, position: usize) -> Self {
        Self { line, position }
    }
}

/// Which stage produced a diagnostic, and whether it is fatal for that stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    LexicalError,
    SyntaxError,
    SemanticError,
    Warning,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticKind::LexicalError => "LEXICAL_ERROR",
            DiagnosticKind::SyntaxError => "SYNTAX_ERROR",
            DiagnosticKind::SemanticError => "SEMANTIC_ERROR",
            DiagnosticKind::Warning => "WARNING",
        };
        f.pad(name)
    }
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(rename = "type")]
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: usize,
    pub position: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            message: message.into(),
            line: location.line,
            position: location.position,
        }
    }

    pub fn lexical(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(DiagnosticKind::LexicalError, message, location)
    }

    pub fn syntax(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(DiagnosticKind::SyntaxError, message, location)
    }

    pub fn semantic(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(DiagnosticKind::SemanticError, message, location)
    }

    pub fn warning(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(DiagnosticKind::Warning, message, location)
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.position)
    }

    /// Everything except warnings counts against a stage's verdict.
    pub fn is_error(&self) -> bool {
        self.kind != DiagnosticKind::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at line {}, position {}.",
            self.kind, self.message, self.line, self.position
        )
    }
}
