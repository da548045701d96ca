//! Rule to forbid raw typography utilities.
//!
//! # Detected Patterns
//!
//! - font sizes `text-xs` through `text-9xl`
//! - font weights `font-thin` through `font-black`
//! - numeric line heights `leading-N`
//!
//! Only the known modifier chain is stripped, so `md:text-lg` is treated as a
//! responsive override and left alone. Type tokens are named by role, so
//! suggestions are contextual.

use std::sync::Arc;
use tokenlint_core::utils::{parse_scale_number, strip_known_modifiers};
use tokenlint_core::{Category, Confidence, RawTokenUsage, Rule, Suggestion, TokenTables};

/// Rule code for no-raw-typography.
pub const CODE: &str = "TL007";

/// Rule name for no-raw-typography.
pub const NAME: &str = "no-raw-typography";

const FONT_SIZES: &[(&str, Option<&str>)] = &[
    ("xs", Some("text-caption")),
    ("sm", Some("text-body-sm")),
    ("base", Some("text-body")),
    ("lg", Some("text-body-lg")),
    ("xl", Some("text-heading-sm")),
    ("2xl", Some("text-heading-md")),
    ("3xl", Some("text-heading-lg")),
    ("4xl", Some("text-display-sm")),
    ("5xl", Some("text-display-md")),
    ("6xl", Some("text-display-lg")),
    ("7xl", None),
    ("8xl", None),
    ("9xl", None),
];

const FONT_WEIGHTS: &[(&str, Option<&str>)] = &[
    ("thin", None),
    ("extralight", None),
    ("light", None),
    ("normal", Some("font-body")),
    ("medium", Some("font-emphasis")),
    ("semibold", Some("font-strong")),
    ("bold", Some("font-heading")),
    ("extrabold", None),
    ("black", None),
];

const LINE_HEIGHTS: &[(&str, &str)] = &[
    ("4", "leading-caption"),
    ("5", "leading-compact"),
    ("6", "leading-body"),
    ("8", "leading-heading"),
];

/// Forbids raw typography utilities.
#[derive(Debug, Clone)]
pub struct NoRawTypography {
    tables: Arc<TokenTables>,
}

impl Default for NoRawTypography {
    fn default() -> Self {
        Self::new(Arc::new(TokenTables::builtin()))
    }
}

impl NoRawTypography {
    /// Creates the rule; `tables` supplies the modifier set.
    #[must_use]
    pub fn new(tables: Arc<TokenTables>) -> Self {
        Self { tables }
    }
}

/// `Some(replacement)` for a raw typography class, where the replacement
/// itself may be absent.
fn classify(base: &str) -> Option<Option<&'static str>> {
    if let Some(size) = base.strip_prefix("text-") {
        return FONT_SIZES
            .iter()
            .find(|(raw, _)| *raw == size)
            .map(|(_, token)| *token);
    }
    if let Some(weight) = base.strip_prefix("font-") {
        return FONT_WEIGHTS
            .iter()
            .find(|(raw, _)| *raw == weight)
            .map(|(_, token)| *token);
    }
    let height = base.strip_prefix("leading-")?;
    parse_scale_number(height)?;
    Some(
        LINE_HEIGHTS
            .iter()
            .find(|(raw, _)| *raw == height)
            .map(|(_, token)| *token),
    )
}

impl Rule for NoRawTypography {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Typography
    }

    fn description(&self) -> &'static str {
        "Forbids raw font sizes, weights and line heights; use type tokens"
    }

    fn matches(&self, token: &str) -> bool {
        let (_, base) = strip_known_modifiers(token, self.tables.modifiers.as_slice());
        classify(base).is_some()
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        let (modifiers, base) =
            strip_known_modifiers(&usage.raw_token, self.tables.modifiers.as_slice());
        let token = classify(base)??;
        let suggestion =
            Suggestion::contextual(token, Confidence::Medium, "type token for this step");
        Some(suggestion.with_modifiers(modifiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenlint_core::UsageKind;

    fn usage(token: &str) -> RawTokenUsage {
        RawTokenUsage {
            file: "a.tsx".into(),
            line: 1,
            column: 1,
            raw_token: token.to_string(),
            line_context: String::new(),
            literal: String::new(),
            element_type: None,
            kind: UsageKind::ClassName,
        }
    }

    fn suggest(token: &str) -> Option<String> {
        NoRawTypography::default().suggest(&usage(token)).map(|s| s.to_string())
    }

    #[test]
    fn test_matches() {
        let rule = NoRawTypography::default();
        for token in [
            "text-xs",
            "text-9xl",
            "hover:font-bold",
            "font-thin",
            "leading-7",
            "leading-3.5",
        ] {
            assert!(rule.matches(token), "{token} should match");
        }
        for token in [
            "text-body",
            "text-gray-500",
            "font-sans",
            "leading-tight",
            "md:text-lg",
            "text-10xl",
        ] {
            assert!(!rule.matches(token), "{token} should not match");
        }
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggest("text-sm").as_deref(), Some("text-body-sm"));
        assert_eq!(suggest("dark:font-semibold").as_deref(), Some("dark:font-strong"));
        assert_eq!(suggest("leading-6").as_deref(), Some("leading-body"));
        assert_eq!(suggest("text-8xl"), None);
        assert_eq!(suggest("leading-7"), None);
    }

    #[test]
    fn test_suggestions_are_not_fixable() {
        let s = NoRawTypography::default().suggest(&usage("text-sm")).unwrap();
        assert!(!s.is_autofix_eligible());
        assert!(matches!(s, Suggestion::Contextual { confidence: Confidence::Medium, .. }));
    }
}
