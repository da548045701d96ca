//! Rule to forbid hand-built gradients.
//!
//! # Detected Patterns
//!
//! - `bg-gradient-to-<dir>` directions
//! - `from-`, `via-`, `to-` stops with a palette color or `white`/`black`
//!
//! Known directions point at gradient tokens (`bg-gradient-to-r` →
//! `bg-gradient-primary`). A gradient token also carries its colors, so the
//! advice is contextual and never autofixed: the `from-`/`via-`/`to-` stops
//! have to go in the same edit. Stops get no suggestion of their own.

use std::sync::Arc;
use tokenlint_core::utils::strip_any_modifiers;
use tokenlint_core::{Category, Confidence, RawTokenUsage, Rule, Suggestion, TokenTables};

/// Rule code for no-raw-gradient.
pub const CODE: &str = "TL006";

/// Rule name for no-raw-gradient.
pub const NAME: &str = "no-raw-gradient";

const DIRECTIONS: &[&str] = &["t", "tr", "r", "br", "b", "bl", "l", "tl"];

const GRADIENT_TOKENS: &[(&str, &str)] = &[
    ("bg-gradient-to-r", "bg-gradient-primary"),
    ("bg-gradient-to-b", "bg-gradient-surface"),
];

const STOP_PREFIXES: &[&str] = &["from-", "via-", "to-"];

/// Forbids hand-built gradients.
#[derive(Debug, Clone)]
pub struct NoRawGradient {
    tables: Arc<TokenTables>,
}

impl Default for NoRawGradient {
    fn default() -> Self {
        Self::new(Arc::new(TokenTables::builtin()))
    }
}

impl NoRawGradient {
    /// Creates the rule over `tables`.
    #[must_use]
    pub fn new(tables: Arc<TokenTables>) -> Self {
        Self { tables }
    }

    fn is_stop_color(&self, color: &str) -> bool {
        let color = color.split_once('/').map_or(color, |(c, _)| c);
        color == "white"
            || color == "black"
            || color.rsplit_once('-').is_some_and(|(palette, shade)| {
                self.tables.is_palette(palette) && self.tables.is_shade(shade)
            })
    }
}

impl Rule for NoRawGradient {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Gradient
    }

    fn description(&self) -> &'static str {
        "Forbids hand-built gradient directions and stops; use gradient tokens"
    }

    fn matches(&self, token: &str) -> bool {
        let (_, base) = strip_any_modifiers(token);
        if let Some(dir) = base.strip_prefix("bg-gradient-to-") {
            return DIRECTIONS.contains(&dir);
        }
        STOP_PREFIXES
            .iter()
            .filter_map(|prefix| base.strip_prefix(prefix))
            .any(|color| self.is_stop_color(color))
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        let (modifiers, base) = strip_any_modifiers(&usage.raw_token);
        let (_, token) = GRADIENT_TOKENS.iter().find(|(raw, _)| *raw == base)?;
        let suggestion = Suggestion::Contextual {
            replacement: (*token).to_string(),
            confidence: Confidence::Low,
            rationale: "direction only; the gradient token also sets the colors, \
                        so drop the from-/via-/to- stops"
                .to_string(),
            alternatives: GRADIENT_TOKENS
                .iter()
                .filter(|(_, other)| other != token)
                .map(|(_, other)| (*other).to_string())
                .collect(),
        };
        Some(suggestion.with_modifiers(modifiers))
    }
}
