//! List rules command implementation.

use style_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nConfigure rules in style-lint.toml, e.g.:");
    println!("  [rules.indentation]");
    println!("  basic_offset = 2");
}
