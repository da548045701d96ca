//! Context-ranked color migration.
//!
//! Resolution order for a raw class:
//!
//! 1. the context-aware table, keyed by the exact class;
//! 2. the direct one-to-one table (high confidence);
//! 3. both tables again with the modifier chain stripped, reapplying it to
//!    the result;
//! 4. a shade threshold for `bg-`, `text-` and `border-` classes (low
//!    confidence);
//!
//! and otherwise no suggestion.

mod context;
mod tables;

pub use context::{analyze_context, ComponentType, MigrationContext, KEYWORD_EXCLUSIONS};
pub use tables::{ContextResolver, MigrationSuggestion, MigrationTables, SuggestionOrigin};

use tokenlint_core::utils::class_names::DEFAULT_MODIFIERS;
use tokenlint_core::utils::strip_known_modifiers;
use tokenlint_core::Confidence;

/// Shades at or below this read as light surfaces.
pub const LIGHT_SHADE_MAX: u16 = 200;
/// Shades at or above this read as dark surfaces.
pub const DARK_SHADE_MIN: u16 = 900;

/// Color migration resolver over immutable tables.
#[derive(Debug)]
pub struct MigrationResolver {
    tables: MigrationTables,
    modifiers: Vec<String>,
}

impl Default for MigrationResolver {
    fn default() -> Self {
        Self::new(
            MigrationTables::builtin(),
            DEFAULT_MODIFIERS.iter().map(|m| (*m).to_string()).collect(),
        )
    }
}

impl MigrationResolver {
    /// Creates a resolver over `tables`, stripping `modifiers` on retry.
    #[must_use]
    pub fn new(tables: MigrationTables, modifiers: Vec<String>) -> Self {
        Self { tables, modifiers }
    }

    /// The lookup tables.
    #[must_use]
    pub fn tables(&self) -> &MigrationTables {
        &self.tables
    }

    fn lookup(&self, class: &str, ctx: &MigrationContext) -> Option<MigrationSuggestion> {
        if let Some(resolve) = self.tables.contextual(class) {
            return Some(resolve(ctx));
        }
        self.tables.direct(class).map(MigrationSuggestion::direct)
    }

    /// Resolves a color class in `ctx`.
    #[must_use]
    pub fn get_migration_suggestion(
        &self,
        class: &str,
        ctx: &MigrationContext,
    ) -> Option<MigrationSuggestion> {
        if let Some(found) = self.lookup(class, ctx) {
            return Some(found);
        }

        let (modifiers, base) = strip_known_modifiers(class, self.modifiers.as_slice());
        if !modifiers.is_empty() {
            if let Some(found) = self.lookup(base, ctx) {
                return Some(found.with_modifiers(modifiers));
            }
        }

        shade_heuristic(base).map(|s| s.with_modifiers(modifiers))
    }

    /// Resolves every class of a class list with one shared context.
    ///
    /// Classes without a suggestion are left out.
    #[must_use]
    pub fn get_batch_migration_suggestions<S: AsRef<str>>(
        &self,
        classes: &[S],
        element_type: Option<&str>,
    ) -> Vec<(String, MigrationSuggestion)> {
        let ctx = analyze_context("", classes, element_type);
        classes
            .iter()
            .filter_map(|class| {
                let class = class.as_ref();
                self.get_migration_suggestion(class, &ctx)
                    .map(|s| (class.to_string(), s))
            })
            .collect()
    }
}

/// Light or dark surface family for very light or very dark shades.
fn shade_heuristic(base: &str) -> Option<MigrationSuggestion> {
    let base = base.split_once('/').map_or(base, |(color, _)| color);
    let (prefix, rest) = base.split_once('-')?;
    let (_, shade) = rest.rsplit_once('-')?;
    let shade: u16 = shade.parse().ok()?;
    if shade < 50 || shade % 50 != 0 {
        return None;
    }

    let (suggestion, alternatives, rationale): (&str, &[&str], &str) =
        match (prefix, shade <= LIGHT_SHADE_MAX, shade >= DARK_SHADE_MIN) {
            ("bg", true, _) => (
                "bg-surface-muted",
                &["bg-surface", "bg-surface-subtle"],
                "light shade used as a surface",
            ),
            ("text", true, _) => (
                "text-inverse",
                &["text-on-primary"],
                "light text shade sits on dark fills",
            ),
            ("border", true, _) => ("border-subtle", &["border-default"], "light border shade"),
            ("bg", _, true) => (
                "bg-surface-inverse",
                &["bg-surface-strong"],
                "dark shade used as a surface",
            ),
            ("text", _, true) => (
                "text-primary",
                &["text-strong"],
                "dark text shade reads as body text",
            ),
            ("border", _, true) => ("border-strong", &["border-default"], "dark border shade"),
            _ => return None,
        };

    Some(MigrationSuggestion {
        suggestion: suggestion.to_string(),
        confidence: Confidence::Low,
        rationale: rationale.to_string(),
        alternatives: alternatives.iter().map(|a| (*a).to_string()).collect(),
        origin: SuggestionOrigin::Heuristic,
    })
}
