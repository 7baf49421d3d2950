//! Integration test: the indentation rule end-to-end via Analyzer.
//!
//! Uses the Java sources under `tests/fixtures/indentation/` to run the
//! whole pipeline: file discovery, parsing, the engine and conversion of
//! findings into violations.

use std::path::{Path, PathBuf};

use style_lint_core::{Analyzer, Config, LintResult, Severity};
use style_lint_java::JavaParser;
use style_lint_rules::{rules_from_config, IndentOptions, IndentationCheck};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/indentation")
}

fn analyze(config: Config) -> LintResult {
    let mut builder = Analyzer::builder()
        .root(fixture_root())
        .parser(JavaParser::new())
        .config(config.clone());
    for rule in rules_from_config(&config).expect("fixture config should be valid") {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build().expect("analyzer should build");
    analyzer.analyze().expect("analysis should succeed")
}

fn summary(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|v| {
            format!(
                "{}:{}:{} {}",
                v.location.file.display(),
                v.location.line,
                v.location.column,
                v.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Happy-path: detects misindented lines ──

#[test]
fn reports_only_misindented_fixture() {
    let result = analyze(Config::default());

    assert_eq!(result.files_checked, 2, "{}", summary(&result));
    assert_eq!(result.files_skipped, 1, "Broken.java should be skipped");
    insta::assert_snapshot!(summary(&result), @r"
    Misindented.java:4:11 'if' child has incorrect indentation level 10, expected level should be 12.
    Misindented.java:9:13 'do..while while' has incorrect indentation level 12, expected level should be 8.
    Misindented.java:12:15 'default' child has incorrect indentation level 14, expected level should be 16.
    ");
}

#[test]
fn violations_carry_code_span_and_suggestion() {
    let result = analyze(Config::default());
    let first = result
        .violations
        .first()
        .expect("Misindented.java should have findings");

    assert_eq!(first.code, "SL001");
    assert_eq!(first.rule, "indentation");
    assert_eq!(first.severity, Severity::Error);
    assert_eq!(first.location.file, Path::new("Misindented.java"));
    assert_eq!(first.location.length, "g();".len());
    assert_eq!(
        first.suggestion.as_ref().map(|s| s.message.as_str()),
        Some("indent to column 12")
    );
}

// ── Configuration ──

#[test]
fn severity_override_applies() {
    let config = Config::parse("[rules.indentation]\nseverity = \"warning\"\n")
        .expect("config should parse");
    let result = analyze(config);

    assert_eq!(result.violations.len(), 3);
    assert!(result
        .violations
        .iter()
        .all(|v| v.severity == Severity::Warning));
}

#[test]
fn disabled_rule_reports_nothing() {
    let config =
        Config::parse("[rules.indentation]\nenabled = false\n").expect("config should parse");
    let result = analyze(config);

    assert!(result.violations.is_empty(), "{}", summary(&result));
    assert_eq!(result.files_checked, 2);
}

#[test]
fn narrower_offset_flags_clean_fixture() {
    let analyzer = Analyzer::builder()
        .root(fixture_root())
        .parser(JavaParser::new())
        .rule(IndentationCheck::new().options(IndentOptions::new().basic_offset(2)))
        .build()
        .expect("analyzer should build");
    let result = analyzer.analyze().expect("analysis should succeed");

    assert!(
        result
            .violations
            .iter()
            .any(|v| v.location.file == Path::new("Clean.java")),
        "{}",
        summary(&result)
    );
}

// ── Edge cases ──

#[test]
fn parse_errors_can_fail_the_run() {
    let analyzer = Analyzer::builder()
        .root(fixture_root())
        .parser(JavaParser::new())
        .rule(IndentationCheck::new())
        .fail_on_parse_error(true)
        .build()
        .expect("analyzer should build");

    assert!(analyzer.analyze().is_err());
}
