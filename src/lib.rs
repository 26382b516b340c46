//! # Introduction
//!
//! cinspect analyzes snippets of a small C-like language in three stages and
//! reports everything it finds: classified tokens, syntax validity, semantic
//! errors and warnings, and the resulting symbol table. Results can be printed
//! as text or JSON, or browsed in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Lexer → Parser (+ SymbolTable) → Semantic analyzer → AnalysisReport
//! ```
//!
//! 1. [`parser::lexer`]: classifies source text into tokens; faults become
//!    error tokens plus lexical diagnostics.
//! 2. [`parser::parse`](mod@parser::parse): recursive descent over the significant tokens with
//!    bracket matching and panic-mode recovery; fills the [`symbols::SymbolTable`].
//! 3. [`semantic`]: a linear pass checking declarations, initialization,
//!    `const` and assignment types.
//! 4. [`pipeline`]: runs the three stages and collects an [`AnalysisReport`].
//! 5. [`output`] and [`ui`]: presentation; not part of the stable library API.
//!
//! No stage aborts on a fault: every stage returns its full diagnostic list
//! and later stages run on whatever the earlier ones produced.
//!
//! ## Example
//!
//! ```
//! let report = cinspect::analyze_source("int a = 5;\nfloat b = a + 3.14;");
//! assert!(report.is_clean());
//! assert!(report.semantic.symbol_table.get("b").is_some_and(|e| e.used));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod semantic;
pub mod symbols;
pub mod ui;

pub use config::AnalyzerConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, SourceLocation};
pub use parser::{parse, tokenize, Token, TokenKind};
pub use pipeline::{analyze_source, analyze_source_with_config, AnalysisReport};
pub use semantic::analyze as analyze_semantics;
