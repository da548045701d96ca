//! Check command implementation.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokenlint_core::{
    apply_fixes, Config, Report, ReportMode, Rule, RuleBox, RuleConfig, Scanner, TokenTables,
    PALETTE_VARIABLE_CODE, PALETTE_VARIABLE_RULE,
};
use tokenlint_rules::{all_rules, rules_from_config};

use crate::config_resolver;
use crate::OutputFormat;

/// Arguments of `tokenlint check`.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Path to scan (default: `[scan] root` from the config, else `.`)
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Report verbosity: `summary` lists 10 violations, `detailed` all
    #[arg(long)]
    pub report: Option<ReportArg>,

    /// Rewrite classes that have an exact replacement
    #[arg(long)]
    pub fix: bool,

    /// Also scan test and story files
    #[arg(long)]
    pub include_tests: bool,

    /// Rule preset
    #[arg(long)]
    pub preset: Option<PresetArg>,

    /// Only run specific rules (comma-separated names, codes or categories)
    #[arg(long)]
    pub rules: Option<String>,

    /// Exclude patterns (can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

/// `--report` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportArg {
    /// First ten violations.
    Summary,
    /// Every violation.
    Detailed,
}

impl From<ReportArg> for ReportMode {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Summary => Self::Summary,
            ReportArg::Detailed => Self::Detailed,
        }
    }
}

/// `--preset` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// Color, spacing and sizing.
    Reporting,
    /// Every category.
    All,
}

/// Runs the check command.
///
/// Returns `false` when error-severity violations remain after the run.
pub fn run(args: &CheckArgs, explicit_config: Option<&Path>) -> Result<bool> {
    let project_dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let source = config_resolver::resolve(&project_dir, explicit_config);
    let mut config = config_resolver::load(&source)?;
    apply_overrides(&mut config, args);

    let rules = select_rules(&mut config, args.rules.as_deref())?;

    let mut builder = Scanner::builder()
        .config(config.clone())
        .rules(rules)
        .excludes(args.exclude.iter().cloned());
    if let Some(path) = &args.path {
        builder = builder.root(path);
    }
    let scanner = builder.build().context("Failed to build scanner")?;

    tracing::info!(
        "Scanning {} with {} rules",
        scanner.root().display(),
        scanner.rule_count()
    );

    let result = scanner.scan().context("Scan failed")?;
    let report = Report::build(&result, config.report.mode, config.report.top_suggestions);

    // Snippets must come from the text the positions refer to.
    let sources = if args.format == OutputFormat::Pretty {
        read_sources(&report)
    } else {
        BTreeMap::new()
    };

    let fixes = if config.fix.enabled {
        Some(apply_fixes(&result).context("Autofix failed")?)
    } else {
        None
    };

    super::output::print(&report, fixes.as_deref(), args.format, &sources)?;

    let rewrote = fixes
        .as_ref()
        .is_some_and(|outcomes| outcomes.iter().any(|o| o.written));
    let has_errors = if rewrote {
        scanner
            .scan()
            .context("Rescan after autofix failed")?
            .has_errors()
    } else {
        result.has_errors()
    };
    Ok(!has_errors)
}

/// Command-line flags take precedence over the configuration file.
fn apply_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(report) = args.report {
        config.report.mode = report.into();
    }
    if args.fix {
        config.fix.enabled = true;
    }
    if args.include_tests {
        config.scan.include_tests = true;
    }
    if let Some(preset) = args.preset {
        let name = match preset {
            PresetArg::Reporting => "reporting",
            PresetArg::All => "all",
        };
        config.preset = Some(name.to_string());
    }
}

fn rule_matches(rule: &dyn Rule, wanted: &str) -> bool {
    wanted == rule.name()
        || wanted.eq_ignore_ascii_case(rule.code())
        || wanted == rule.category().as_str()
}

/// Builds the rule list, honoring a `--rules` filter over every rule.
///
/// The palette-variable check is kept only when the filter names it or the
/// color category.
fn select_rules(config: &mut Config, filter: Option<&str>) -> Result<Vec<RuleBox>> {
    let Some(filter) = filter else {
        return rules_from_config(config).context("Invalid rule configuration");
    };

    let tables = Arc::new(
        TokenTables::from_config(&config.tokens).context("Invalid [tokens] configuration")?,
    );
    let wanted: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let is_palette_variable = |w: &&str| {
        *w == PALETTE_VARIABLE_RULE
            || w.eq_ignore_ascii_case(PALETTE_VARIABLE_CODE)
            || *w == "color"
    };
    if !wanted.iter().any(is_palette_variable) {
        config
            .rules
            .entry(PALETTE_VARIABLE_RULE.to_string())
            .or_insert_with(RuleConfig::default)
            .enabled = Some(false);
    }

    let rules = all_rules(&tables);
    for name in &wanted {
        if !is_palette_variable(name) && !rules.iter().any(|r| rule_matches(r.as_ref(), name)) {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    Ok(rules
        .into_iter()
        .filter(|r| wanted.iter().any(|w| rule_matches(r.as_ref(), w)))
        .collect())
}

/// Reads the files of the listed violations; unreadable files are skipped.
fn read_sources(report: &Report) -> BTreeMap<PathBuf, String> {
    let mut sources = BTreeMap::new();
    for v in &report.violations {
        if sources.contains_key(v.file()) {
            continue;
        }
        match std::fs::read_to_string(v.file()) {
            Ok(text) => {
                sources.insert(v.file().to_path_buf(), text);
            }
            Err(e) => tracing::warn!("Cannot read {} for snippets: {}", v.file().display(), e),
        }
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenlint_core::Category;

    fn args() -> CheckArgs {
        CheckArgs {
            path: None,
            format: OutputFormat::Text,
            report: None,
            fix: false,
            include_tests: false,
            preset: None,
            rules: None,
            exclude: Vec::new(),
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config =
            Config::parse("preset = \"reporting\"\n[report]\nmode = \"summary\"").unwrap();
        let args = CheckArgs {
            report: Some(ReportArg::Detailed),
            fix: true,
            include_tests: true,
            preset: Some(PresetArg::All),
            ..args()
        };
        apply_overrides(&mut config, &args);
        assert_eq!(config.report.mode, ReportMode::Detailed);
        assert!(config.fix.enabled && config.scan.include_tests);
        assert_eq!(config.preset.as_deref(), Some("all"));
    }

    #[test]
    fn rules_filter_accepts_names_codes_and_categories() {
        let mut config = Config::default();
        let rules = select_rules(&mut config, Some("no-raw-spacing, tl008 ,shadow")).unwrap();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["no-raw-spacing", "no-raw-shadow", "no-raw-radius"]);
        assert!(!config.is_rule_enabled(PALETTE_VARIABLE_RULE, Category::Color));

        let mut config = Config::default();
        let rules = select_rules(&mut config, Some("color")).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(config.is_rule_enabled(PALETTE_VARIABLE_RULE, Category::Color));
    }

    #[test]
    fn no_filter_uses_preset() {
        let mut config = Config::default();
        assert_eq!(select_rules(&mut config, None).unwrap().len(), 3);

        let mut config = Config::parse("preset = \"nope\"").unwrap();
        assert!(select_rules(&mut config, None).is_err());
    }
}
