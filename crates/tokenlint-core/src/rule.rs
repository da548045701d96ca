//! Rule trait for category rules.

use crate::types::{Category, RawTokenUsage, Severity, Suggestion};

/// A category rule: a predicate over raw class names plus a suggestion
/// resolver for the tokens it claims.
///
/// Rules are pure. `matches` must depend only on the token text and the
/// rule's immutable tables, and so must any `Exact` suggestion `suggest`
/// returns.
///
/// # Example
///
/// ```ignore
/// use tokenlint_core::{Category, RawTokenUsage, Rule, Suggestion};
///
/// pub struct NoRawOpacity;
///
/// impl Rule for NoRawOpacity {
///     fn name(&self) -> &'static str { "no-raw-opacity" }
///     fn code(&self) -> &'static str { "TL100" }
///     fn category(&self) -> Category { Category::Color }
///
///     fn matches(&self, token: &str) -> bool {
///         token.starts_with("opacity-")
///     }
///
///     fn suggest(&self, _usage: &RawTokenUsage) -> Option<Suggestion> {
///         None
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-raw-spacing").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL002").
    fn code(&self) -> &'static str;

    /// Returns the category this rule classifies tokens into.
    fn category(&self) -> Category;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        self.category().default_severity()
    }

    /// Returns true if the raw token (modifiers included) belongs to this
    /// rule's category.
    fn matches(&self, token: &str) -> bool;

    /// Resolves a semantic replacement for a token this rule matched.
    fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
