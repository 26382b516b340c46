//! Three-stage analysis of one source text
//!
//! ```text
//! Source → Lexer → Parser (+ SymbolTable) → Semantic analyzer → AnalysisReport
//! ```
//!
//! Every stage runs to completion and returns all of its diagnostics. A later
//! stage still runs when an earlier one failed: the parser sees error tokens,
//! and the semantic analyzer sees a partially filled table.

use crate::config::AnalyzerConfig;
use crate::diagnostics::Diagnostic;
use crate::parser::lexer::{tokenize, Token};
use crate::parser::parse::parse_with_config;
use crate::semantic::analyze;
use crate::symbols::SymbolSnapshot;
use serde::Serialize;

/// Everything the three stages produced for one source text
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub tokens: Vec<Token>,
    pub lexical: LexicalReport,
    pub syntax: SyntaxReport,
    pub semantic: SemanticReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct LexicalReport {
    pub success: bool,
    pub errors: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyntaxReport {
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemanticReport {
    pub success: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub symbol_table: SymbolSnapshot,
}

impl AnalysisReport {
    /// Every diagnostic in stage order: lexical, syntax, semantic, warnings
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.lexical
            .errors
            .iter()
            .chain(&self.syntax.errors)
            .chain(&self.semantic.errors)
            .chain(&self.semantic.warnings)
    }

    pub fn error_count(&self) -> usize {
        self.all_diagnostics().filter(|d| d.is_error()).count()
    }

    /// No stage reported an error; warnings are allowed
    pub fn is_clean(&self) -> bool {
        self.lexical.success && self.syntax.valid && self.semantic.success
    }
}

/// Analyze a source text with the default configuration
pub fn analyze_source(source: &str) -> AnalysisReport {
    analyze_source_with_config(source, &AnalyzerConfig::default())
}

pub fn analyze_source_with_config(source: &str, config: &AnalyzerConfig) -> AnalysisReport {
    let (tokens, lexical_errors) = tokenize(source);
    let (valid, mut table, syntax_errors) = parse_with_config(&tokens, config).into_parts();
    let semantic = analyze(&tokens, &mut table);

    let report = AnalysisReport {
        lexical: LexicalReport {
            success: lexical_errors.is_empty(),
            errors: lexical_errors,
        },
        syntax: SyntaxReport {
            valid,
            errors: syntax_errors,
        },
        semantic: SemanticReport {
            success: semantic.success,
            errors: semantic.errors,
            warnings: semantic.warnings,
            symbol_table: semantic.snapshot,
        },
        tokens,
    };
    tracing::debug!(
        tokens = report.tokens.len(),
        errors = report.error_count(),
        clean = report.is_clean(),
        "analysis finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_diagnostics_in_stage_order() {
        let report = analyze_source("int a = 5$;\nint a;\nint c = b;");
        let kinds: Vec<DiagnosticKind> = report.all_diagnostics().map(|d| d.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| match k {
            DiagnosticKind::LexicalError => 0,
            DiagnosticKind::SyntaxError => 1,
            DiagnosticKind::SemanticError => 2,
            DiagnosticKind::Warning => 3,
        });
        assert_eq!(kinds, sorted);
        assert!(kinds.contains(&DiagnosticKind::LexicalError));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_warnings_keep_report_clean() {
        let report = analyze_source("int a = 5;\nint b = 10;");
        assert!(report.is_clean());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.all_diagnostics().count(), 2);
    }

    #[test]
    fn test_report_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisReport>();
    }
}
