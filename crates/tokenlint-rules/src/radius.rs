//! Rule to forbid raw corner radii.
//!
//! # Detected Patterns
//!
//! `rounded`, `rounded-<size>`, `rounded-<side>` and `rounded-<side>-<size>`
//! with size in `sm`, `md`, `lg`, `xl`, `2xl`, `3xl`, plus arbitrary
//! `rounded-[…]` values. `rounded-none` and `rounded-full` describe shape,
//! not scale, and are exempt.
//!
//! Radius tokens are named by role, so suggestions are contextual.

use std::sync::Arc;
use tokenlint_core::utils::strip_known_modifiers;
use tokenlint_core::{Category, Confidence, RawTokenUsage, Rule, Suggestion, TokenTables};

/// Rule code for no-raw-radius.
pub const CODE: &str = "TL008";

/// Rule name for no-raw-radius.
pub const NAME: &str = "no-raw-radius";

const SIDES: &[&str] = &[
    "t", "r", "b", "l", "tl", "tr", "br", "bl", "s", "e", "ss", "se", "es", "ee",
];

/// Raw size (empty for bare `rounded`) to radius token.
const RADIUS_TOKENS: &[(&str, Option<&str>)] = &[
    ("", Some("control")),
    ("sm", Some("subtle")),
    ("md", Some("control")),
    ("lg", Some("card")),
    ("xl", Some("panel")),
    ("2xl", Some("surface")),
    ("3xl", None),
];

/// Forbids raw corner radii.
#[derive(Debug, Clone)]
pub struct NoRawRadius {
    tables: Arc<TokenTables>,
}

impl Default for NoRawRadius {
    fn default() -> Self {
        Self::new(Arc::new(TokenTables::builtin()))
    }
}

impl NoRawRadius {
    /// Creates the rule; `tables` supplies the modifier set.
    #[must_use]
    pub fn new(tables: Arc<TokenTables>) -> Self {
        Self { tables }
    }
}

fn is_size(size: &str) -> bool {
    RADIUS_TOKENS.iter().any(|(raw, _)| *raw == size)
        || (size.len() > 2 && size.starts_with('[') && size.ends_with(']'))
}

/// Splits a raw radius class into `(side, size)`.
fn parse_radius(base: &str) -> Option<(Option<&str>, &str)> {
    if base == "rounded" {
        return Some((None, ""));
    }
    let rest = base.strip_prefix("rounded-")?;
    if is_size(rest) {
        return Some((None, rest));
    }
    if SIDES.contains(&rest) {
        return Some((Some(rest), ""));
    }
    let (side, size) = rest.split_once('-')?;
    (SIDES.contains(&side) && is_size(size)).then_some((Some(side), size))
}

impl Rule for NoRawRadius {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Radius
    }

    fn description(&self) -> &'static str {
        "Forbids raw corner radii; use radius tokens"
    }

    fn matches(&self, token: &str) -> bool {
        let (_, base) = strip_known_modifiers(token, self.tables.modifiers.as_slice());
        parse_radius(base).is_some()
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        let (modifiers, base) =
            strip_known_modifiers(&usage.raw_token, self.tables.modifiers.as_slice());
        let (side, size) = parse_radius(base)?;
        let name = RADIUS_TOKENS
            .iter()
            .find(|(raw, _)| *raw == size)
            .and_then(|(_, token)| *token)?;
        let replacement = match side {
            Some(side) => format!("rounded-{side}-{name}"),
            None => format!("rounded-{name}"),
        };
        let suggestion =
            Suggestion::contextual(replacement, Confidence::Medium, "radius token for this size");
        Some(suggestion.with_modifiers(modifiers))
    }
}
