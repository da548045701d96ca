//! Rule to forbid raw palette colors in class names.
//!
//! # Rationale
//!
//! Palette shades bypass the theme. A semantic color token (`bg-surface`,
//! `text-link`) follows light/dark themes and brand changes; `bg-gray-100`
//! does not.
//!
//! # Detected Patterns
//!
//! - `<prefix>-<palette>-<shade>[/<opacity>]` (`bg-blue-500`, `ring-primary-600/50`)
//! - `<prefix>-white`, `<prefix>-black`
//! - `<prefix>-[#hex]` (`text-[#1a2b3c]`)
//!
//! Prefixes: `bg`, `text`, `border` (and its sides), `outline`, `ring`,
//! `ring-offset`, `fill`, `stroke`, `placeholder`, `decoration`, `accent`,
//! `caret`, `divide`, `shadow`, `from`, `via`, `to`.
//!
//! # Good Patterns
//!
//! ```text
//! bg-surface text-primary border-default
//! ```

use crate::migration::{analyze_context, MigrationResolver, SuggestionOrigin};
use std::sync::Arc;
use tokenlint_core::utils::strip_known_modifiers;
use tokenlint_core::{Category, RawTokenUsage, Rule, Suggestion, TokenTables};

/// Rule code for no-raw-color.
pub const CODE: &str = "TL001";

/// Rule name for no-raw-color.
pub const NAME: &str = "no-raw-color";

/// Utility prefixes that take a color.
pub const COLOR_PREFIXES: &[&str] = &[
    "bg",
    "text",
    "border",
    "border-t",
    "border-r",
    "border-b",
    "border-l",
    "border-x",
    "border-y",
    "border-s",
    "border-e",
    "outline",
    "ring",
    "ring-offset",
    "fill",
    "stroke",
    "placeholder",
    "decoration",
    "accent",
    "caret",
    "divide",
    "shadow",
    "from",
    "via",
    "to",
];

/// Forbids raw palette colors.
#[derive(Debug)]
pub struct NoRawColor {
    tables: Arc<TokenTables>,
    resolver: Arc<MigrationResolver>,
}

impl Default for NoRawColor {
    fn default() -> Self {
        Self::new(Arc::new(TokenTables::builtin()))
    }
}

impl NoRawColor {
    /// Creates the rule with the built-in migration tables.
    #[must_use]
    pub fn new(tables: Arc<TokenTables>) -> Self {
        let resolver = MigrationResolver::new(
            crate::migration::MigrationTables::builtin(),
            tables.modifiers.clone(),
        );
        Self {
            tables,
            resolver: Arc::new(resolver),
        }
    }

    /// Uses a specific migration resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<MigrationResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns true if `value` is a raw color value for a color prefix.
    fn is_raw_color_value(&self, value: &str) -> bool {
        if value == "white" || value == "black" {
            return true;
        }
        if let Some(hex) = value.strip_prefix("[#").and_then(|v| v.strip_suffix(']')) {
            return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
        }

        let color = match value.split_once('/') {
            Some((color, opacity)) if is_opacity(opacity) => color,
            Some(_) => return false,
            None => value,
        };
        color
            .rsplit_once('-')
            .is_some_and(|(palette, shade)| {
                self.tables.is_palette(palette) && self.tables.is_shade(shade)
            })
    }
}

fn is_opacity(value: &str) -> bool {
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        || (value.starts_with('[') && value.ends_with(']'))
}

impl Rule for NoRawColor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Color
    }

    fn description(&self) -> &'static str {
        "Forbids raw palette colors; use semantic color tokens"
    }

    fn matches(&self, token: &str) -> bool {
        let (_, base) = strip_known_modifiers(token, self.tables.modifiers.as_slice());
        COLOR_PREFIXES.iter().any(|prefix| {
            base.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .is_some_and(|value| self.is_raw_color_value(value))
        })
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        let siblings: Vec<&str> = usage.class_list().collect();
        let ctx = analyze_context(&usage.raw_token, &siblings, usage.element_type.as_deref());
        let found = self
            .resolver
            .get_migration_suggestion(&usage.raw_token, &ctx)?;
        Some(match found.origin {
            SuggestionOrigin::Direct => Suggestion::exact(found.suggestion),
            SuggestionOrigin::Contextual | SuggestionOrigin::Heuristic => Suggestion::Contextual {
                replacement: found.suggestion,
                confidence: found.confidence,
                rationale: found.rationale,
                alternatives: found.alternatives,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenlint_core::{Confidence, UsageKind};

    fn usage(token: &str, literal: &str, element: Option<&str>) -> RawTokenUsage {
        RawTokenUsage {
            file: "src/App.tsx".into(),
            line: 1,
            column: 1,
            raw_token: token.to_string(),
            line_context: String::new(),
            literal: literal.to_string(),
            element_type: element.map(str::to_string),
            kind: UsageKind::ClassName,
        }
    }

    #[test]
    fn test_matches_palette_shades() {
        let rule = NoRawColor::default();
        for token in [
            "bg-blue-500",
            "text-gray-900",
            "border-t-red-200",
            "ring-offset-slate-50",
            "hover:bg-primary-600",
            "dark:text-white",
            "bg-black/50",
            "shadow-blue-500/[0.3]",
            "text-[#1a2b3c]",
            "from-emerald-400",
        ] {
            assert!(rule.matches(token), "{token} should match");
        }
    }

    #[test]
    fn test_ignores_non_colors() {
        let rule = NoRawColor::default();
        for token in [
            "bg-surface",
            "text-lg",
            "border-2",
            "bg-blue-550",
            "bg-blue",
            "text-[#12]",
            "bg-[url(x.png)]",
            "shadow-xl",
            "md:bg-blue-500",
            "bg-gray-100/abc",
        ] {
            assert!(!rule.matches(token), "{token} should not match");
        }
    }

    #[test]
    fn test_direct_suggestion_is_exact() {
        let rule = NoRawColor::default();
        let s = rule.suggest(&usage("hover:bg-white", "flex hover:bg-white", None));
        assert_eq!(s, Some(Suggestion::exact("hover:bg-surface")));
    }

    #[test]
    fn test_context_suggestion_is_contextual() {
        let rule = NoRawColor::default();
        let s = rule
            .suggest(&usage("bg-primary-600", "btn bg-primary-600 hover:opacity-90", None))
            .unwrap();
        match s {
            Suggestion::Contextual {
                replacement,
                confidence,
                ..
            } => {
                assert_eq!(replacement, "bg-interactive-primary");
                assert_eq!(confidence, Confidence::High);
            }
            other => panic!("unexpected suggestion: {other:?}"),
        }
        assert!(rule.suggest(&usage("bg-blue-500", "bg-blue-500", None)).is_none());
    }

    #[test]
    fn test_custom_palette_from_tables() {
        let mut tables = TokenTables::builtin();
        tables.palettes.insert("brand".to_string());
        let rule = NoRawColor::new(Arc::new(tables));
        assert!(rule.matches("bg-brand-500"));
    }
}
