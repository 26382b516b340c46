//! Name to [`SymbolEntry`] table shared by the parser and the semantic pass
//!
//! The first declaration of a name wins. Iteration follows declaration order.

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

/// Attributes recorded for one declared name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    #[serde(rename = "type")]
    pub declared_type: String,
    pub used: bool,
    pub initialized: bool,
    #[serde(rename = "const")]
    pub is_const: bool,
}

impl SymbolEntry {
    pub fn new(declared_type: impl Into<String>, initialized: bool, is_const: bool) -> Self {
        Self {
            declared_type: declared_type.into(),
            used: false,
            initialized,
            is_const,
        }
    }
}

/// Live symbol table for one compilation unit
///
/// Entries are keyed by name and also kept in declaration order so that
/// warnings and snapshots come out in a stable order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, SymbolEntry>,
    order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new declaration.
    ///
    /// Returns `false` and leaves the table untouched when `name` is already
    /// declared.
    #[must_use]
    pub fn insert(&mut self, name: &str, entry: SymbolEntry) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), entry);
        self.order.push(name.to_string());
        true
    }

    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn mark_used(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.used = true;
        }
    }

    pub fn mark_initialized(&mut self, name: &str) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.initialized = true;
        }
    }

    /// Undeclared names are never initialized.
    pub fn is_initialized(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.initialized)
    }

    pub fn is_const(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|e| e.is_const)
    }

    pub fn declared_type(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|e| e.declared_type.as_str())
    }

    /// Forget every initialization so a linear pass can recompute them.
    pub fn clear_initialization(&mut self) {
        for entry in self.entries.values_mut() {
            entry.initialized = false;
        }
    }

    /// Declared names never marked used, in declaration order.
    pub fn unused(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, entry)| !entry.used)
            .map(|(name, _)| name)
            .collect()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolEntry)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).map(|e| (name.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Copy the current state into an immutable snapshot.
    pub fn snapshot(&self) -> SymbolSnapshot {
        SymbolSnapshot {
            entries: self
                .iter()
                .map(|(name, entry)| (name.to_string(), entry.clone()))
                .collect(),
        }
    }
}

/// Read-only copy of a symbol table
///
/// Detached from the live table: later mutations of the table are not seen
/// here, and nothing here can mutate the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSnapshot {
    entries: Vec<(String, SymbolEntry)>,
}

impl SymbolSnapshot {
    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolEntry)> + '_ {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SymbolSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, e)| (n, e)))
    }
}
