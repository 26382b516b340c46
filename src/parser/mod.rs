//! Lexical and syntactic analysis
//!
//! This module turns source text into tokens and checks them against the
//! statement grammar:
//! - [`lexer`]: Tokenization (source text → tokens and lexical diagnostics)
//! - [`matchers`]: The ordered token classifiers the lexer relies on
//! - [`parse`]: Parsing (tokens → validity, symbol table, syntax diagnostics)
//!
//! # Supported Language
//!
//! A small C-like statement language:
//! - Declarations with optional `const`, a type keyword and declarator lists
//! - Assignments, function calls and `return` statements
//! - `if` / `while` with a parenthesized condition and a braced body
//! - Expressions over identifiers and literals with `* /`, `+ -` and comparisons
//! - Comments and preprocessor lines are tokenized, then ignored by the parser
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with panic-mode recovery. The parser never
//! builds a tree; its products are a verdict, a symbol table and diagnostics.

pub mod declarations;
mod expressions;
pub mod lexer;
pub mod matchers;
pub mod parse;
mod statements;

pub use lexer::{tokenize, Token, TokenKind};
pub use parse::{parse, parse_with_config, significant_tokens, ParseOutcome, Parser};
