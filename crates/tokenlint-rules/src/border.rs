//! Rule to forbid numeric border widths.
//!
//! # Detected Patterns
//!
//! `border-N` and `border-<dir>-N` with `N > 0`, behind any modifier chain.
//! Bare `border` (the hairline default) and `border-0` are fine.
//!
//! # Suggestions
//!
//! | Raw | Token |
//! |-----|-------|
//! | `border-2` | `border-medium` |
//! | `border-4` | `border-thick` |
//! | `border-8` | `border-heavy` |
//!
//! The direction is kept: `hover:border-t-2` → `hover:border-t-medium`.

use tokenlint_core::utils::strip_any_modifiers;
use tokenlint_core::{Category, RawTokenUsage, Rule, Suggestion};

/// Rule code for no-raw-border-width.
pub const CODE: &str = "TL004";

/// Rule name for no-raw-border-width.
pub const NAME: &str = "no-raw-border-width";

const DIRECTIONS: &[&str] = &["t", "r", "b", "l", "x", "y", "s", "e"];

const WIDTHS: &[(&str, &str)] = &[("2", "medium"), ("4", "thick"), ("8", "heavy")];

/// Forbids numeric border widths.
#[derive(Debug, Clone, Default)]
pub struct NoRawBorderWidth;

impl NoRawBorderWidth {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Splits `border[-dir]-N` into `(direction, width)`.
fn parse_width(base: &str) -> Option<(Option<&str>, &str)> {
    let rest = base.strip_prefix("border-")?;
    let (direction, width) = match rest.split_once('-') {
        Some((dir, width)) if DIRECTIONS.contains(&dir) => (Some(dir), width),
        Some(_) => return None,
        None => (None, rest),
    };
    let is_positive = !width.is_empty()
        && width.bytes().all(|b| b.is_ascii_digit())
        && width.bytes().any(|b| b != b'0');
    is_positive.then_some((direction, width))
}

impl Rule for NoRawBorderWidth {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Border
    }

    fn description(&self) -> &'static str {
        "Forbids numeric border widths; use border width tokens"
    }

    fn matches(&self, token: &str) -> bool {
        let (_, base) = strip_any_modifiers(token);
        parse_width(base).is_some()
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        let (modifiers, base) = strip_any_modifiers(&usage.raw_token);
        let (direction, width) = parse_width(base)?;
        let (_, name) = WIDTHS.iter().find(|(w, _)| *w == width)?;
        let replacement = match direction {
            Some(dir) => format!("border-{dir}-{name}"),
            None => format!("border-{name}"),
        };
        Some(Suggestion::exact(replacement).with_modifiers(modifiers))
    }
}
