//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# style-lint configuration

# Fail the run on violations at or above this severity
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/build/**",
    "**/generated/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.indentation]
enabled = true
# severity = "warning"  # Override default severity
basic_offset = 4
brace_adjustment = 0
case_indent = 4
array_init_indent = 4
line_wrapping_indentation = 4
throws_indent = 4
force_strict_condition = false
tab_width = 8
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("style-lint.toml"), force)?;

    println!("Created style-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit style-lint.toml to configure rules");
    println!("  2. Run: style-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
