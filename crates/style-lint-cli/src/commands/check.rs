//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use style_lint_core::{Analyzer, Config};
use style_lint_java::JavaParser;
use style_lint_rules::rules_from_config;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
///
/// Returns `false` when a violation reaches the configured failure
/// threshold.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<bool> {
    let config = load_config(source)?;
    let threshold = config.fail_threshold();

    let rules = rules_from_config(&config).context("Invalid rule configuration")?;
    let tab_width = config
        .rule_config(style_lint_rules::indentation::NAME)
        .map(|c| c.get_usize("tab_width", style_lint_java::DEFAULT_TAB_WIDTH))
        .transpose()
        .context("Invalid rule configuration")?
        .unwrap_or(style_lint_java::DEFAULT_TAB_WIDTH);

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .parser(JavaParser::new().tab_width(tab_width))
        .excludes(exclude);
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    Ok(!result
        .violations
        .iter()
        .any(|v| v.severity >= threshold))
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project(config: Option<&str>, files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::Builder::new().prefix("project").tempdir().unwrap();
        if let Some(config) = config {
            fs::write(dir.path().join("style-lint.toml"), config).unwrap();
        }
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn check(dir: &Path) -> Result<bool> {
        let source = crate::config_resolver::resolve(dir, None);
        run(dir, OutputFormat::Compact, Vec::new(), &source)
    }

    #[test]
    fn clean_project_passes() {
        let dir = project(None, &[("A.java", "class A {\n    int x;\n}\n")]);
        assert!(check(dir.path()).unwrap());
    }

    #[test]
    fn misindented_project_fails() {
        let dir = project(None, &[("A.java", "class A {\n  int x;\n}\n")]);
        assert!(!check(dir.path()).unwrap());
    }

    #[test]
    fn project_config_changes_offsets() {
        let dir = project(
            Some("[rules.indentation]\nbasic_offset = 2\n"),
            &[("A.java", "class A {\n  int x;\n}\n")],
        );
        assert!(check(dir.path()).unwrap());
    }

    #[test]
    fn warnings_below_threshold_pass() {
        let dir = project(
            Some("[rules.indentation]\nseverity = \"warning\"\n"),
            &[("A.java", "class A {\n  int x;\n}\n")],
        );
        assert!(check(dir.path()).unwrap());
    }

    #[test]
    fn invalid_option_is_fatal() {
        let dir = project(
            Some("[rules.indentation]\nbasic_offset = -4\n"),
            &[("A.java", "class A {\n}\n")],
        );
        assert!(check(dir.path()).is_err());
    }
}
