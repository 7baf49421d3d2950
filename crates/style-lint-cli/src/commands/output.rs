//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use std::path::Path;
use style_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the analysis root that violation paths are relative to.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }
    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
    if result.files_skipped > 0 {
        println!("Skipped {} file(s) that failed to parse", result.files_skipped);
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{}", compact_line(violation));
    }
}

fn compact_line(violation: &Violation) -> String {
    format!(
        "{}:{}:{}: {} [{}] {}",
        violation.location.file.display(),
        violation.location.line,
        violation.location.column,
        violation.severity,
        violation.code,
        violation.message,
    )
}

/// Renders each violation against its source file.
///
/// Falls back to the compact line when the file cannot be read again.
fn print_pretty(result: &LintResult, root: &Path) {
    for violation in &result.violations {
        let file = &violation.location.file;
        match std::fs::read_to_string(root.join(file)) {
            Ok(content) => {
                let report = Report::new(ViolationDiagnostic::from(violation))
                    .with_source_code(NamedSource::new(file.display().to_string(), content));
                eprintln!("{report:?}");
            }
            Err(err) => {
                tracing::debug!("cannot re-read {}: {err}", file.display());
                println!("{}", compact_line(violation));
            }
        }
    }
    print_summary(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use style_lint_core::Location;

    #[test]
    fn compact_line_format() {
        let v = Violation::new(
            "SL001",
            "indentation",
            Severity::Error,
            Location::new(PathBuf::from("src/A.java"), 2, 3),
            "'class def' child has incorrect indentation level 2, expected level should be 4.",
        );
        assert_eq!(
            compact_line(&v),
            "src/A.java:2:3: error [SL001] 'class def' child has incorrect indentation level 2, expected level should be 4."
        );
    }
}
