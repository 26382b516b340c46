//! Report rendering for the command line
//!
//! - [`OutputFormat::Text`]: human-readable listing of tokens, diagnostics and symbols
//! - [`OutputFormat::Json`]: the serialized [`AnalysisReport`]
//! - [`OutputFormat::Tui`]: interactive viewer, see [`crate::ui`]

use crate::error::CliError;
use crate::pipeline::AnalysisReport;
use clap::ValueEnum;
use std::fmt::Write;

/// How the report is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tui,
}

/// Render the report as plain text
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Tokens ({}):", report.tokens.len());
    for token in &report.tokens {
        let _ = writeln!(out, "  {:>4}:{:<4} {}", token.line, token.position, token);
    }

    let _ = writeln!(out);
    let diagnostics: Vec<_> = report.all_diagnostics().collect();
    if diagnostics.is_empty() {
        let _ = writeln!(out, "No diagnostics.");
    } else {
        let _ = writeln!(out, "Diagnostics ({}):", diagnostics.len());
        for diagnostic in diagnostics {
            let _ = writeln!(out, "  {}", diagnostic);
        }
    }

    let _ = writeln!(out);
    let table = &report.semantic.symbol_table;
    let _ = writeln!(out, "Symbols ({}):", table.len());
    for (name, entry) in table.iter() {
        let _ = writeln!(
            out,
            "  {:<12} {:<8} used={:<5} initialized={:<5} const={}",
            name, entry.declared_type, entry.used, entry.initialized, entry.is_const
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "lexical: {}, syntax: {}, semantic: {}",
        verdict(report.lexical.success),
        verdict(report.syntax.valid),
        verdict(report.semantic.success)
    );
    out
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "failed"
    }
}

/// Render the report as pretty-printed JSON
pub fn render_json(report: &AnalysisReport) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze_source;

    #[test]
    fn test_text_sections() {
        let report = analyze_source("int a = 5;\nint b = 10;");
        let text = render_text(&report);
        assert!(text.contains("Tokens (10):"));
        assert!(text.contains("KEYWORD 'int'"));
        assert!(text.contains("Diagnostics (2):"));
        assert!(text.contains("WARNING: Variable 'a' declared but never used at line 0, position 4."));
        assert!(text.contains("Symbols (2):"));
        assert!(text.ends_with("lexical: ok, syntax: ok, semantic: ok\n"));
    }

    #[test]
    fn test_text_without_diagnostics() {
        let report = analyze_source("int a = 5;\nfloat b = a + 3.14;");
        assert!(render_text(&report).contains("No diagnostics."));
    }

    #[test]
    fn test_json_field_names() {
        let report = analyze_source("int a = 5$;");
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tokens"][0]["type"], "KEYWORD");
        assert_eq!(value["tokens"][0]["token"], "int");
        assert_eq!(value["lexical"]["success"], false);
        assert_eq!(value["lexical"]["errors"][0]["type"], "LEXICAL_ERROR");
        assert_eq!(value["lexical"]["errors"][0]["position"], 9);
        assert_eq!(value["semantic"]["symbol_table"]["a"]["type"], "int");
    }
}
