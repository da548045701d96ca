//! Rule to forbid raw spacing scale values.
//!
//! # Rationale
//!
//! `p-4` hard-codes one step of the numeric scale. A semantic spacing token
//! (`p-base`) lets the design system retune rhythm in one place.
//!
//! # Detected Patterns
//!
//! - padding: `p`, `px`, `py`, `pt`, `pr`, `pb`, `pl`, `ps`, `pe`
//! - margin: `m`, `mx`, `my`, `mt`, `mr`, `mb`, `ml`, `ms`, `me` (negative too)
//! - `gap`, `gap-x`, `gap-y`, `space-x`, `space-y`
//!
//! followed by an integer or one-decimal value. `0`, `px`, `auto`, `full`,
//! fractions, keywords and bracketed values are exempt.
//!
//! # Suggestions
//!
//! Exact scale hits (`p-4` → `p-base`) are autofixable. Other values get the
//! two closest tokens by rem distance:
//!
//! ```text
//! p-5 → nearest: p-base (1rem) or p-lg (1.5rem)
//! ```

use crate::numeric::{parse_numeric_class, resolve, NumericClass};
use std::sync::Arc;
use tokenlint_core::{Category, RawTokenUsage, Rule, Suggestion, TokenTables};

/// Rule code for no-raw-spacing.
pub const CODE: &str = "TL002";

/// Rule name for no-raw-spacing.
pub const NAME: &str = "no-raw-spacing";

/// Padding, margin, gap and space-between prefixes.
pub const SPACING_PREFIXES: &[&str] = &[
    "p", "px", "py", "pt", "pr", "pb", "pl", "ps", "pe", "m", "mx", "my", "mt", "mr", "mb", "ml",
    "ms", "me", "gap", "gap-x", "gap-y", "space-x", "space-y",
];

/// Prefixes that accept a leading `-`.
pub const NEGATABLE_PREFIXES: &[&str] = &[
    "m", "mx", "my", "mt", "mr", "mb", "ml", "ms", "me", "space-x", "space-y",
];

/// Forbids raw spacing scale values.
#[derive(Debug, Clone)]
pub struct NoRawSpacing {
    tables: Arc<TokenTables>,
}

impl Default for NoRawSpacing {
    fn default() -> Self {
        Self::new(Arc::new(TokenTables::builtin()))
    }
}

impl NoRawSpacing {
    /// Creates the rule over `tables`.
    #[must_use]
    pub fn new(tables: Arc<TokenTables>) -> Self {
        Self { tables }
    }

    fn parse<'a>(&self, token: &'a str) -> Option<NumericClass<'a>> {
        parse_numeric_class(
            token,
            self.tables.modifiers.as_slice(),
            SPACING_PREFIXES,
            NEGATABLE_PREFIXES,
        )
    }

    /// Suggestion for a single class name.
    #[must_use]
    pub fn suggestion_for(&self, token: &str) -> Option<Suggestion> {
        resolve(&self.tables.spacing, &self.parse(token)?)
    }
}

impl Rule for NoRawSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Spacing
    }

    fn description(&self) -> &'static str {
        "Forbids raw padding, margin and gap values; use spacing tokens"
    }

    fn matches(&self, token: &str) -> bool {
        self.parse(token).is_some()
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        self.suggestion_for(&usage.raw_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(token: &str) -> String {
        NoRawSpacing::default()
            .suggestion_for(token)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_exempt_values_are_not_violations() {
        let rule = NoRawSpacing::default();
        for token in [
            "p-0", "gap-0", "m-auto", "p-px", "w-1/2", "p-[20px]", "mx-full", "p-1/2", "-p-2",
            "py-", "pointer-events-none",
        ] {
            assert!(!rule.matches(token), "{token} should be exempt");
        }
    }

    #[test]
    fn test_exact_hits() {
        assert_eq!(display("p-4"), "p-base");
        assert_eq!(display("gap-2"), "gap-sm");
        assert_eq!(display("-m-2"), "-m-sm");
        assert_eq!(display("space-y-0.5"), "space-y-2xs");
        assert_eq!(display("-space-x-1"), "-space-x-xs");
    }

    #[test]
    fn test_nearest_misses() {
        assert_eq!(display("p-5"), "nearest: p-base (1rem) or p-lg (1.5rem)");
        let far = display("mt-20");
        assert!(far.starts_with("nearest: mt-3xl (4rem)"), "{far}");
    }

    #[test]
    fn test_modifier_preservation() {
        for modifier in ["dark:", "hover:", "focus:", "active:", "disabled:", "group-hover:"] {
            assert_eq!(
                display(&format!("{modifier}p-4")),
                format!("{modifier}{}", display("p-4"))
            );
            assert_eq!(
                display(&format!("{modifier}p-5")),
                format!("nearest: {modifier}p-base (1rem) or {modifier}p-lg (1.5rem)")
            );
        }
        assert!(!NoRawSpacing::default().matches("md:p-4"));
    }
}
