//! Configuration types for tokenlint.

use crate::report::ReportMode;
use crate::types::{Category, Severity};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Top-level configuration for tokenlint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule preset name (`reporting` or `all`); the rules crate decides the
    /// default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Scanner configuration.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,

    /// Autofix configuration.
    #[serde(default)]
    pub fix: FixConfig,

    /// Per-rule configurations, keyed by rule name or category.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Token table overrides.
    #[serde(default)]
    pub tokens: TokensConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Resolves one setting for a rule; a rule-name entry wins over a
    /// category entry.
    fn lookup<T>(
        &self,
        rule_name: &str,
        category: Category,
        field: impl Fn(&RuleConfig) -> Option<T>,
    ) -> Option<T> {
        self.rules
            .get(rule_name)
            .and_then(&field)
            .or_else(|| self.rules.get(category.as_str()).and_then(&field))
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str, category: Category) -> bool {
        self.lookup(rule_name, category, |c| c.enabled)
            .unwrap_or(true)
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str, category: Category) -> Option<Severity> {
        self.lookup(rule_name, category, |c| c.severity)
    }
}

/// Scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory to scan (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from scanning.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// File extensions to scan.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether test and story files are scanned.
    #[serde(default)]
    pub include_tests: bool,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            extensions: default_extensions(),
            include_tests: false,
            respect_gitignore: true,
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Summary caps the violation list; detailed keeps all of it.
    #[serde(default)]
    pub mode: ReportMode,

    /// Number of `(from → to)` suggestion rows kept.
    #[serde(default = "default_top_suggestions")]
    pub top_suggestions: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mode: ReportMode::default(),
            top_suggestions: default_top_suggestions(),
        }
    }
}

/// Autofix configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixConfig {
    /// Apply exact suggestions after scanning.
    #[serde(default)]
    pub enabled: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_top_suggestions() -> usize {
    crate::report::DEFAULT_TOP_SUGGESTIONS
}

/// Glob patterns excluded unless configured otherwise.
#[must_use]
pub fn default_excludes() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/dist/**",
        "**/build/**",
        "**/.next/**",
        "**/coverage/**",
        "**/__fixtures__/**",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

/// File extensions scanned unless configured otherwise.
#[must_use]
pub fn default_extensions() -> Vec<String> {
    ["tsx", "jsx", "ts", "js", "vue", "svelte", "astro", "html", "mdx"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// `[tokens]` overrides merged into the built-in tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokensConfig {
    /// Extra palette names.
    #[serde(default)]
    pub palettes: Vec<String>,

    /// Extra shade values.
    #[serde(default)]
    pub shades: Vec<u16>,

    /// Replacement modifier set.
    #[serde(default)]
    pub modifiers: Option<Vec<String>>,

    /// Spacing scale overrides.
    #[serde(default)]
    pub spacing: Option<ScaleConfig>,

    /// Sizing scale overrides.
    #[serde(default)]
    pub sizing: Option<ScaleConfig>,
}

/// Overrides for one numeric scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Drop the built-in entries before applying `entries`.
    #[serde(default)]
    pub replace: bool,

    /// Rem value of one numeric step.
    #[serde(default)]
    pub unit_rem: Option<f64>,

    /// Entries keyed by numeric utility value.
    #[serde(default)]
    pub entries: BTreeMap<String, ScaleEntryConfig>,
}

/// One configured scale entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleEntryConfig {
    /// Semantic token name.
    pub name: String,

    /// Canonical rem value; defaults to key × unit.
    #[serde(default)]
    pub rem: Option<f64>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Values that parse but make no sense.
    #[error("Invalid config: {message}")]
    Validation {
        /// What is wrong.
        message: String,
    },
}
