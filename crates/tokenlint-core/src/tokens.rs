//! Design-token lookup tables.
//!
//! The tables are the read-only source of truth the rules consult: the
//! spacing and element-sizing scales (numeric utility value → semantic name
//! and canonical rem value), the palette names and shades the color predicate
//! recognizes, and the modifier set stripped before classification.
//!
//! Tables are built once at startup, optionally merged with `[tokens]`
//! overrides from the configuration, and shared behind an `Arc`.

use crate::config::{ConfigError, TokensConfig};
use crate::utils::class_names::DEFAULT_MODIFIERS;
use std::collections::BTreeSet;

/// Rem value of one step of the numeric utility scale.
pub const DEFAULT_UNIT_REM: f64 = 0.25;

const SPACING_SCALE: &[(&str, &str, f64)] = &[
    ("0.5", "2xs", 0.125),
    ("1", "xs", 0.25),
    ("2", "sm", 0.5),
    ("3", "md", 0.75),
    ("4", "base", 1.0),
    ("6", "lg", 1.5),
    ("8", "xl", 2.0),
    ("12", "2xl", 3.0),
    ("16", "3xl", 4.0),
];

const SIZING_SCALE: &[(&str, &str, f64)] = &[
    ("4", "icon-xs", 1.0),
    ("5", "icon-sm", 1.25),
    ("6", "icon-md", 1.5),
    ("8", "control-sm", 2.0),
    ("10", "control-md", 2.5),
    ("12", "control-lg", 3.0),
    ("16", "control-xl", 4.0),
];

const PALETTES: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose", "primary", "secondary",
];

const SHADES: &[u16] = &[50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// One step of a semantic scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEntry {
    /// Numeric utility key as written in class names (`"4"`, `"0.5"`).
    pub key: String,
    /// Parsed numeric key.
    pub value: f64,
    /// Semantic token name (`"base"`).
    pub name: String,
    /// Canonical rem value of the semantic token.
    pub rem: f64,
}

/// Ordered lookup from numeric utility value to semantic token.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTable {
    entries: Vec<ScaleEntry>,
    unit_rem: f64,
}

impl ScaleTable {
    fn from_static(scale: &[(&str, &str, f64)]) -> Self {
        let entries = scale
            .iter()
            .filter_map(|(key, name, rem)| {
                Some(ScaleEntry {
                    key: (*key).to_string(),
                    value: key.parse().ok()?,
                    name: (*name).to_string(),
                    rem: *rem,
                })
            })
            .collect();
        Self {
            entries,
            unit_rem: DEFAULT_UNIT_REM,
        }
    }

    /// Entries ordered by numeric key.
    #[must_use]
    pub fn entries(&self) -> &[ScaleEntry] {
        &self.entries
    }

    /// Rem value of one numeric step.
    #[must_use]
    pub fn unit_rem(&self) -> f64 {
        self.unit_rem
    }

    /// Looks up an entry by its exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ScaleEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Inserts or replaces an entry, keeping numeric order.
    fn upsert(&mut self, entry: ScaleEntry) {
        self.entries.retain(|e| e.key != entry.key);
        let pos = self
            .entries
            .iter()
            .position(|e| e.value > entry.value)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
    }

    fn apply(
        &mut self,
        section: &str,
        overrides: &crate::config::ScaleConfig,
    ) -> Result<(), ConfigError> {
        if let Some(unit) = overrides.unit_rem {
            self.unit_rem = unit;
        }
        if overrides.replace {
            self.entries.clear();
        }
        for (key, entry) in &overrides.entries {
            let value: f64 = key.parse().map_err(|_| ConfigError::Validation {
                message: format!("tokens.{section}: scale key `{key}` is not numeric"),
            })?;
            self.upsert(ScaleEntry {
                key: key.clone(),
                value,
                name: entry.name.clone(),
                rem: entry.rem.unwrap_or(value * self.unit_rem),
            });
        }
        Ok(())
    }
}

/// All token lookup tables consulted by the rules.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTables {
    /// Padding / margin / gap scale.
    pub spacing: ScaleTable,
    /// Element height / width scale.
    pub sizing: ScaleTable,
    /// Palette names recognized by the color predicate.
    pub palettes: BTreeSet<String>,
    /// Shade values recognized by the color predicate.
    pub shades: BTreeSet<u16>,
    /// Modifiers stripped before classification.
    pub modifiers: Vec<String>,
}

impl Default for TokenTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TokenTables {
    /// The built-in token vocabulary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            spacing: ScaleTable::from_static(SPACING_SCALE),
            sizing: ScaleTable::from_static(SIZING_SCALE),
            palettes: PALETTES.iter().map(|p| (*p).to_string()).collect(),
            shades: SHADES.iter().copied().collect(),
            modifiers: DEFAULT_MODIFIERS.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    /// Builds tables from the built-in vocabulary merged with overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a scale key is not numeric.
    pub fn from_config(config: &TokensConfig) -> Result<Self, ConfigError> {
        let mut tables = Self::builtin();
        if let Some(spacing) = &config.spacing {
            tables.spacing.apply("spacing", spacing)?;
        }
        if let Some(sizing) = &config.sizing {
            tables.sizing.apply("sizing", sizing)?;
        }
        tables.palettes.extend(config.palettes.iter().cloned());
        tables.shades.extend(config.shades.iter().copied());
        if let Some(modifiers) = &config.modifiers {
            tables.modifiers.clone_from(modifiers);
        }
        Ok(tables)
    }

    /// Returns true if `name` is a known palette.
    #[must_use]
    pub fn is_palette(&self, name: &str) -> bool {
        self.palettes.contains(name)
    }

    /// Returns true if `shade` parses to a known shade value.
    #[must_use]
    pub fn is_shade(&self, shade: &str) -> bool {
        shade
            .parse::<u16>()
            .is_ok_and(|s| self.shades.contains(&s) && !shade.starts_with('0'))
    }
}
