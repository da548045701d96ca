//! Rule to forbid raw element sizes.
//!
//! # Rationale
//!
//! Icons and controls come in a handful of sizes. `h-10` picks one by
//! number; `h-control-md` says what the element is.
//!
//! # Detected Patterns
//!
//! `h`, `w`, `min-h`, `min-w`, `max-h`, `max-w` with a numeric value in
//! `[4, 16]`. Smaller values are fine-grained spacing and larger ones are
//! layout dimensions; both are left alone.

use crate::numeric::{parse_numeric_class, resolve, NumericClass};
use std::sync::Arc;
use tokenlint_core::{Category, RawTokenUsage, Rule, Suggestion, TokenTables};

/// Rule code for no-raw-sizing.
pub const CODE: &str = "TL003";

/// Rule name for no-raw-sizing.
pub const NAME: &str = "no-raw-sizing";

/// Height and width prefixes.
pub const SIZING_PREFIXES: &[&str] = &["h", "w", "min-h", "min-w", "max-h", "max-w"];

/// Smallest scale value treated as an element size.
pub const MIN_ELEMENT_SIZE: f64 = 4.0;
/// Largest scale value treated as an element size.
pub const MAX_ELEMENT_SIZE: f64 = 16.0;

/// Forbids raw element sizes.
#[derive(Debug, Clone)]
pub struct NoRawSizing {
    tables: Arc<TokenTables>,
}

impl Default for NoRawSizing {
    fn default() -> Self {
        Self::new(Arc::new(TokenTables::builtin()))
    }
}

impl NoRawSizing {
    /// Creates the rule over `tables`.
    #[must_use]
    pub fn new(tables: Arc<TokenTables>) -> Self {
        Self { tables }
    }

    fn parse<'a>(&self, token: &'a str) -> Option<NumericClass<'a>> {
        parse_numeric_class(token, self.tables.modifiers.as_slice(), SIZING_PREFIXES, &[])
            .filter(|c| (MIN_ELEMENT_SIZE..=MAX_ELEMENT_SIZE).contains(&c.number))
    }

    /// Suggestion for a single class name.
    #[must_use]
    pub fn suggestion_for(&self, token: &str) -> Option<Suggestion> {
        resolve(&self.tables.sizing, &self.parse(token)?)
    }
}

impl Rule for NoRawSizing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Sizing
    }

    fn description(&self) -> &'static str {
        "Forbids raw icon and control sizes; use sizing tokens"
    }

    fn matches(&self, token: &str) -> bool {
        self.parse(token).is_some()
    }

    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
        self.suggestion_for(&usage.raw_token)
    }
}
