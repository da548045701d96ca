//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# tokenlint configuration

# Rule preset: "reporting" (color, spacing, sizing) or "all"
preset = "reporting"

[scan]
# Root directory to scan (default: current directory)
# root = "./src"

# Glob patterns to exclude from scanning
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/coverage/**",
    "**/__fixtures__/**",
]

# Also scan *.test.*, *.spec.* and *.stories.* files
include_tests = false

# Respect .gitignore files
respect_gitignore = true

[report]
# "summary" lists the first 10 violations, "detailed" lists all of them
mode = "summary"
top_suggestions = 20

[fix]
# Rewrite classes that have an exact replacement
enabled = false

# Rules can be configured by name or by category.
# A name entry wins over its category entry.

# [rules.no-raw-sizing]
# enabled = false

# [rules.color]
# severity = "warning"

# Extra palettes and scale overrides merged into the built-in tables.
[tokens]
# palettes = ["brand"]
# shades = [450]

# [tokens.spacing.entries]
# "5" = { name = "cozy", rem = 1.25 }
"#;

/// Config file written by `init`.
pub const CONFIG_FILE: &str = "tokenlint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules and tokens");
    println!("  2. Run: tokenlint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
