//! Rule to forbid raw shadow utilities.
//!
//! # Detected Patterns
//!
//! Exactly `shadow`, `shadow-none`, `shadow-inner`, `shadow-xl` and
//! `shadow-2xl`, behind any modifier chain. Colored shadows
//! (`shadow-blue-500`) are color violations.
//!
//! Elevation tokens are named by role, not by shadow value, so suggestions are
//! contextual and left to review.

use tokenlint_core::utils::strip_any_modifiers;
use tokenlint_core::{Category, Confidence, RawTokenUsage, Rule, Suggestion};

/// Rule code for no-raw-shadow.
pub const CODE: &str = "TL005";

/// Rule name for no-raw-shadow.
pub const NAME: &str = "no-raw-shadow";

/// Raw shadow utility to elevation token.
pub const SHADOW_TOKENS: &[(&str, &str)] = &[
    ("shadow", "shadow-raised"),
    ("shadow-none", "shadow-flat"),
    ("shadow-inner", "shadow-inset"),
    ("shadow-xl", "shadow-overlay"),
    ("shadow-2xl", "shadow-modal"),
];

/// Forbids raw shadow utilities.
#[derive(Debug, Clone, Default)]
pub struct NoRawShadow;

impl NoRawShadow {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn lookup(base: &str) -> Option<&'static str> {
    SHADOW_TOKENS
        .iter()
        .find(|(raw, _)| *raw == base)
        .map(|(_, token)| *token)
}

impl Rule for NoRawShadow {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Shadow
    }

    fn description(&self) -> &'static str {
        "Forbids raw shadow utilities; use elevation tokens"
    }

    fn matches(&self, token: &str) -> bool {
        lookup(strip_any_modifiers(token).1).is_some()
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        let (modifiers, base) = strip_any_modifiers(&usage.raw_token);
        let token = lookup(base)?;
        let suggestion =
            Suggestion::contextual(token, Confidence::Medium, "elevation token for this depth");
        Some(suggestion.with_modifiers(modifiers))
    }
}
