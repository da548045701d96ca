//! Rule presets.
//!
//! Registration order is classification priority: the first rule whose
//! predicate matches claims the token.

use crate::{
    NoRawBorderWidth, NoRawColor, NoRawGradient, NoRawRadius, NoRawShadow, NoRawSizing,
    NoRawSpacing, NoRawTypography,
};
use std::sync::Arc;
use tokenlint_core::{Config, ConfigError, RuleBox, TokenTables};
use tracing::debug;

/// Preset configurations for tokenlint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Color, spacing and sizing; the categories wired into reports.
    #[default]
    Reporting,
    /// Every category rule.
    All,
}

impl Preset {
    /// Parses a preset from its config name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "reporting" => Some(Self::Reporting),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the config name of this preset.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reporting => "reporting",
            Self::All => "all",
        }
    }

    /// Returns the rules for this preset over `tables`.
    #[must_use]
    pub fn rules(self, tables: &Arc<TokenTables>) -> Vec<RuleBox> {
        match self {
            Self::Reporting => reporting_rules(tables),
            Self::All => all_rules(tables),
        }
    }
}

/// Returns the reporting set of rules.
///
/// In priority order:
/// - `no-raw-color` (TL001)
/// - `no-raw-spacing` (TL002)
/// - `no-raw-sizing` (TL003)
#[must_use]
pub fn reporting_rules(tables: &Arc<TokenTables>) -> Vec<RuleBox> {
    vec![
        Box::new(NoRawColor::new(Arc::clone(tables))),
        Box::new(NoRawSpacing::new(Arc::clone(tables))),
        Box::new(NoRawSizing::new(Arc::clone(tables))),
    ]
}

/// Returns all available rules.
///
/// The reporting rules come first, so a gradient stop such as
/// `from-blue-500` is still reported as a color.
#[must_use]
pub fn all_rules(tables: &Arc<TokenTables>) -> Vec<RuleBox> {
    let mut rules = reporting_rules(tables);
    rules.push(Box::new(NoRawBorderWidth::new()));
    rules.push(Box::new(NoRawShadow::new()));
    rules.push(Box::new(NoRawGradient::new(Arc::clone(tables))));
    rules.push(Box::new(NoRawTypography::new(Arc::clone(tables))));
    rules.push(Box::new(NoRawRadius::new(Arc::clone(tables))));
    rules
}

/// Builds the token tables and the preset rules a configuration asks for.
///
/// # Errors
///
/// Returns an error if the preset name is unknown or a `[tokens]` override
/// is invalid.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let preset = match config.preset.as_deref() {
        Some(name) => Preset::parse(name).ok_or_else(|| ConfigError::Validation {
            message: format!("unknown preset `{name}` (expected `reporting` or `all`)"),
        })?,
        None => Preset::default(),
    };
    let tables = Arc::new(TokenTables::from_config(&config.tokens)?);
    let rules = preset.rules(&tables);
    debug!("Preset {} registers {} rules", preset.as_str(), rules.len());
    Ok(rules)
}
