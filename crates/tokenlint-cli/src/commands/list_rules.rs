//! List rules command implementation.

use std::fmt::Write;
use std::sync::Arc;
use tokenlint_core::{Category, TokenTables, PALETTE_VARIABLE_CODE, PALETTE_VARIABLE_RULE};
use tokenlint_rules::{all_rules, Preset};

/// Runs the list-rules command.
pub fn run() {
    print!("{}", render());
}

fn render() -> String {
    let mut out = String::from("Available rules (priority order):\n\n");
    let _ = writeln!(out, "{:<7} {:<22} {:<11} Description", "Code", "Name", "Category");
    let _ = writeln!(out, "{}", "-".repeat(80));

    let tables = Arc::new(TokenTables::builtin());
    for rule in all_rules(&tables) {
        let _ = writeln!(
            out,
            "{:<7} {:<22} {:<11} {}",
            rule.code(),
            rule.name(),
            rule.category().as_str(),
            rule.description()
        );
    }
    let _ = writeln!(
        out,
        "{:<7} {:<22} {:<11} --palette-* custom properties (always an error)",
        PALETTE_VARIABLE_CODE,
        PALETTE_VARIABLE_RULE,
        Category::Color.as_str()
    );

    let _ = writeln!(out, "\nPresets:");
    for preset in [Preset::Reporting, Preset::All] {
        let codes: Vec<&str> = preset.rules(&tables).iter().map(|r| r.code()).collect();
        let default = if preset == Preset::default() {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(out, "  {:<10} - {}{default}", preset.as_str(), codes.join(", "));
    }

    let _ = writeln!(out, "\nUse --rules to filter by name, code or category, e.g.:");
    let _ = writeln!(out, "  tokenlint check --rules no-raw-color,no-raw-spacing");
    let _ = writeln!(out, "  tokenlint check --rules TL004,shadow");
    out
}
