//! Semantic analysis
//!
//! This module provides the second, linear pass over the token stream:
//! - [`analyzer`]: Declaration, initialization, const and type checks
//! - [`types`]: Literal value types and the assignment compatibility rule
//!
//! # Analysis Model
//!
//! The analyzer reads the same tokens as the parser together with the symbol
//! table the parser filled in. It marks names used and initialized as it goes,
//! then reports undeclared reads and unused declarations once the pass is
//! over. It runs even when parsing failed, on whatever declarations were
//! collected.

pub mod analyzer;
pub mod types;

pub use analyzer::{analyze, SemanticOutcome};
