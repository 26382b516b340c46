//! Symbol table for declared variables
//!
//! This module provides the per-unit registry of declared names:
//! - [`table::SymbolTable`]: the live, mutable table
//! - [`table::SymbolEntry`]: type, usage, initialization and const flags
//! - [`table::SymbolSnapshot`]: an immutable, ordered copy handed to callers
//!
//! # Lifecycle
//!
//! A table is created empty when parsing of a unit starts. The parser inserts
//! declarations, the semantic analyzer marks names used and initialized, and
//! the table is dropped once the unit has been analyzed. Nothing is shared
//! between units.
//!
//! # Redeclaration
//!
//! A name is inserted at most once. A later insertion under the same name is
//! rejected and the first entry is kept; the caller reports the redeclaration.

pub mod table;

pub use table::{SymbolEntry, SymbolSnapshot, SymbolTable};
