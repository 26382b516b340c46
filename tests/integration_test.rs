// Integration tests for the analysis pipeline

use cinspect::diagnostics::{DiagnosticKind, SourceLocation};
use cinspect::symbols::SymbolTable;
use cinspect::{analyze_semantics, analyze_source, analyze_source_with_config, parse, tokenize};
use cinspect::{AnalysisReport, AnalyzerConfig};

fn messages(report: &AnalysisReport) -> Vec<String> {
    report.all_diagnostics().map(|d| d.message.clone()).collect()
}

#[test]
fn test_declaration_with_promotion() {
    let report = analyze_source("int a = 5;\nfloat b = a + 3.14;");

    assert!(report.lexical.success);
    assert!(report.syntax.valid);
    assert!(report.semantic.success);
    assert!(report.semantic.warnings.is_empty());
    assert!(report.is_clean());

    let table = &report.semantic.symbol_table;
    assert_eq!(table.len(), 2);
    let a = table.get("a").expect("a is declared");
    assert_eq!(a.declared_type, "int");
    assert!(a.used && a.initialized && !a.is_const);
    let b = table.get("b").expect("b is declared");
    assert_eq!(b.declared_type, "float");
    assert!(b.used && b.initialized && !b.is_const);
}

#[test]
fn test_missing_semicolon() {
    let report = analyze_source("int a = 5\nfloat b = 2.0;");

    assert!(report.lexical.success);
    assert!(!report.syntax.valid);
    assert!(report
        .syntax
        .errors
        .iter()
        .any(|d| d.kind == DiagnosticKind::SyntaxError && d.message.contains("Expected ';'")));
}

#[test]
fn test_unexpected_character() {
    let report = analyze_source("int a = 5$;");

    assert!(!report.lexical.success);
    assert_eq!(report.lexical.errors.len(), 1);
    let error = &report.lexical.errors[0];
    assert_eq!(error.kind, DiagnosticKind::LexicalError);
    assert!(error.message.contains('$'));
    assert_eq!(error.location(), SourceLocation::new(0, 9));
    assert!(!report.is_clean());
}

#[test]
fn test_undeclared_variable() {
    let report = analyze_source("int x = y + 1;");

    assert!(report.syntax.valid);
    assert!(!report.semantic.success);
    assert!(report
        .semantic
        .errors
        .iter()
        .any(|d| d.message.contains("'y'") && d.message.contains("not declared")));
}

#[test]
fn test_unused_variables() {
    let report = analyze_source("int a = 5;\nint b = 10;");

    assert!(report.semantic.success);
    let warnings: Vec<&str> = report
        .semantic
        .warnings
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        warnings,
        vec![
            "Variable 'a' declared but never used",
            "Variable 'b' declared but never used",
        ]
    );
    assert!(report.is_clean());
}

#[test]
fn test_unmatched_opening_parenthesis() {
    let report = analyze_source("int a = (5 + 3;");

    assert!(!report.syntax.valid);
    let unmatched = report
        .syntax
        .errors
        .iter()
        .find(|d| d.message == "Unmatched opening bracket '('")
        .expect("unmatched bracket is reported");
    assert_eq!(unmatched.location(), SourceLocation::new(0, 8));
}

#[test]
fn test_recovery_reports_every_statement_error() {
    let source = "int a = 1;\nfoo()\nreturn;\nif (a < 5) a = 3;\nint b = a;\nb = 2;";
    let report = analyze_source(source);
    let found = messages(&report);

    assert!(found.iter().any(|m| m.starts_with("Expected ';' after function call")));
    assert!(found.iter().any(|m| m.starts_with("Invalid control structure syntax")));
    // `foo()` swallowed `return;` while resynchronizing
    assert_eq!(report.syntax.errors.len(), 2, "{found:?}");
    assert!(report.semantic.symbol_table.get("b").is_some());
}

#[test]
fn test_stray_closing_brace() {
    let report = analyze_source("int a = 5; }");
    assert_eq!(messages(&report)[0], "Unmatched closing bracket '}'");
}

#[test]
fn test_semantic_errors_together() {
    let source = "const int limit = 10;\nint count;\nfloat ratio = 1.5;\nint total = ratio;\nlimit = count;\nint limit = 3;";
    let report = analyze_source(source);
    let found = messages(&report);

    let expected = [
        "Redeclaration of variable 'limit'",
        "Type mismatch: cannot assign 'float' value to 'int' variable 'total'",
        "Assignment to constant variable 'limit'",
        "Variable 'count' used before initialization",
    ];
    for message in expected {
        assert!(found.iter().any(|m| m == message), "missing {message:?} in {found:?}");
    }
    assert!(!report.semantic.success);
    assert!(!report.syntax.valid);
}

#[test]
fn test_stages_compose_by_hand() {
    let source = "int a = 1;\nprint(a);";
    let (tokens, lexical) = tokenize(source);
    assert!(lexical.is_empty());

    let (valid, mut table, syntax) = parse(&tokens).into_parts();
    assert!(valid, "{syntax:?}");

    let semantic = analyze_semantics(&tokens, &mut table);
    assert!(semantic.success);
    assert!(semantic.warnings.is_empty());
    assert!(table.lookup("a").is_some_and(|e| e.used));
}

#[test]
fn test_semantic_pass_on_empty_table() {
    let (tokens, _) = tokenize("x = 1;");
    let mut table = SymbolTable::new();
    let outcome = analyze_semantics(&tokens, &mut table);
    // an assignment target is not a read
    assert!(outcome.success);
    assert!(outcome.snapshot.is_empty());
}

#[test]
fn test_comments_and_directives_are_ignored() {
    let source = "#include <stdio.h>\n/* header\n   comment */\nint a = 1; // trailing\nprint(a);";
    let report = analyze_source(source);
    assert!(report.is_clean(), "{:?}", messages(&report));
    assert!(report.semantic.warnings.is_empty());
}

#[test]
fn test_spaced_directive_is_ignored() {
    let report = analyze_source("# define X 1\nint a = 1;\nprint(a);");
    assert!(report.is_clean(), "{:?}", messages(&report));
    assert!(report.semantic.symbol_table.get("X").is_none());
}

#[test]
fn test_nesting_limit_from_config() {
    let config = AnalyzerConfig::new().with_max_nesting_depth(3);
    let source = "int a = 1;\nwhile (a) { while (a) { while (a) { while (a) { a = 2; } } } }";
    let report = analyze_source_with_config(source, &config);
    assert_eq!(report.syntax.errors.len(), 1);
    assert_eq!(report.syntax.errors[0].message, "Nesting depth exceeds limit of 3");

    let report = analyze_source(source);
    assert!(report.syntax.valid);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 1_000;
    let source = format!("int a = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let report = analyze_source(&source);
    assert!(!report.syntax.valid);
    assert_eq!(report.syntax.errors.len(), 1);
    assert_eq!(report.syntax.errors[0].message, "Nesting depth exceeds limit of 256");
    assert_eq!(report.syntax.errors[0].location(), SourceLocation::new(0, 8 + 256));
}

#[test]
fn test_calls_are_independent() {
    let first = analyze_source("int shared = 1;");
    let second = analyze_source("shared = 2;");
    assert!(first.semantic.symbol_table.get("shared").is_some());
    assert!(second.semantic.symbol_table.is_empty());
}
