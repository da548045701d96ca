//! Color migration tables.

use super::context::{ComponentType, MigrationContext};
use serde::Serialize;
use std::collections::HashMap;
use tokenlint_core::Confidence;

/// Which stage of the lookup produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionOrigin {
    /// Context-aware table.
    Contextual,
    /// One-to-one table.
    Direct,
    /// Shade-threshold fallback.
    Heuristic,
}

/// A ranked color replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationSuggestion {
    /// Replacement class name.
    pub suggestion: String,
    /// How certain the match is.
    pub confidence: Confidence,
    /// Why this replacement was chosen.
    pub rationale: String,
    /// Other plausible replacements.
    pub alternatives: Vec<String>,
    /// Lookup stage that produced it.
    pub origin: SuggestionOrigin,
}

impl MigrationSuggestion {
    pub(crate) fn contextual(
        suggestion: &str,
        confidence: Confidence,
        rationale: &str,
        alternatives: &[&str],
    ) -> Self {
        Self {
            suggestion: suggestion.to_string(),
            confidence,
            rationale: rationale.to_string(),
            alternatives: alternatives.iter().map(|a| (*a).to_string()).collect(),
            origin: SuggestionOrigin::Contextual,
        }
    }

    pub(crate) fn direct(suggestion: &str) -> Self {
        Self {
            suggestion: suggestion.to_string(),
            confidence: Confidence::High,
            rationale: "direct semantic equivalent".to_string(),
            alternatives: Vec::new(),
            origin: SuggestionOrigin::Direct,
        }
    }

    /// Prefixes the suggestion and every alternative with `modifiers`.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: &str) -> Self {
        if modifiers.is_empty() {
            return self;
        }
        self.suggestion = format!("{modifiers}{}", self.suggestion);
        for alt in &mut self.alternatives {
            *alt = format!("{modifiers}{alt}");
        }
        self
    }
}

/// Resolver for one context-aware table entry.
pub type ContextResolver = fn(&MigrationContext) -> MigrationSuggestion;

/// Immutable color lookup tables, built once and shared.
pub struct MigrationTables {
    contextual: HashMap<&'static str, ContextResolver>,
    direct: HashMap<&'static str, &'static str>,
}

impl std::fmt::Debug for MigrationTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationTables")
            .field("contextual", &self.contextual.len())
            .field("direct", &self.direct.len())
            .finish()
    }
}

impl Default for MigrationTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MigrationTables {
    /// The built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        let contextual: [(&'static str, ContextResolver); 10] = [
            ("bg-primary-600", bg_primary_600),
            ("bg-primary-700", bg_primary_700),
            ("bg-blue-600", bg_blue_600),
            ("text-primary-600", text_primary_600),
            ("text-gray-500", text_gray_500),
            ("border-gray-300", border_gray_300),
            ("bg-red-600", bg_red_600),
            ("bg-green-600", bg_green_600),
            ("bg-yellow-500", bg_warning),
            ("bg-amber-500", bg_warning),
        ];
        Self {
            contextual: contextual.into_iter().collect(),
            direct: DIRECT.iter().copied().collect(),
        }
    }

    /// Context-aware resolver for an exact raw class.
    #[must_use]
    pub fn contextual(&self, class: &str) -> Option<ContextResolver> {
        self.contextual.get(class).copied()
    }

    /// One-to-one replacement for an exact raw class.
    #[must_use]
    pub fn direct(&self, class: &str) -> Option<&'static str> {
        self.direct.get(class).copied()
    }

    /// Number of entries across both tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contextual.len() + self.direct.len()
    }

    /// Returns true if both tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const DIRECT: &[(&str, &str)] = &[
    ("bg-white", "bg-surface"),
    ("bg-black", "bg-surface-inverse"),
    ("bg-gray-50", "bg-surface-subtle"),
    ("bg-gray-100", "bg-surface-muted"),
    ("bg-neutral-100", "bg-surface-muted"),
    ("bg-gray-900", "bg-surface-inverse"),
    ("bg-red-50", "bg-error-subtle"),
    ("bg-green-50", "bg-success-subtle"),
    ("bg-yellow-50", "bg-warning-subtle"),
    ("bg-blue-50", "bg-info-subtle"),
    ("text-white", "text-inverse"),
    ("text-black", "text-primary"),
    ("text-gray-900", "text-primary"),
    ("text-gray-700", "text-secondary"),
    ("text-gray-600", "text-secondary"),
    ("text-gray-400", "text-disabled"),
    ("text-red-600", "text-error"),
    ("text-green-600", "text-success"),
    ("text-yellow-600", "text-warning"),
    ("text-blue-600", "text-info"),
    ("border-gray-100", "border-subtle"),
    ("border-gray-200", "border-default"),
    ("border-red-500", "border-error"),
    ("ring-blue-500", "ring-focus"),
    ("ring-primary-500", "ring-focus"),
];

fn bg_primary_600(ctx: &MigrationContext) -> MigrationSuggestion {
    match ctx.component_type {
        Some(ComponentType::Button) => MigrationSuggestion::contextual(
            "bg-interactive-primary",
            Confidence::High,
            if ctx.has_hover_state {
                "primary button background with a hover state"
            } else {
                "primary button background"
            },
            &["bg-brand"],
        ),
        Some(ComponentType::Badge) => MigrationSuggestion::contextual(
            "bg-brand-emphasis",
            Confidence::Medium,
            "badges use the emphasized brand fill",
            &["bg-interactive-primary", "bg-brand"],
        ),
        _ if ctx.is_interactive => MigrationSuggestion::contextual(
            "bg-interactive-primary",
            Confidence::Medium,
            "interactive element with brand background",
            &["bg-brand"],
        ),
        _ => MigrationSuggestion::contextual(
            "bg-brand",
            Confidence::Medium,
            "brand color outside an interactive component",
            &["bg-interactive-primary"],
        ),
    }
}

fn bg_primary_700(ctx: &MigrationContext) -> MigrationSuggestion {
    if ctx.is(ComponentType::Button) || ctx.is_interactive {
        MigrationSuggestion::contextual(
            "bg-interactive-primary-hover",
            Confidence::High,
            "darker primary shade used for pressed or hovered actions",
            &["bg-brand-strong"],
        )
    } else {
        MigrationSuggestion::contextual(
            "bg-brand-strong",
            Confidence::Medium,
            "strong brand fill",
            &["bg-interactive-primary-hover"],
        )
    }
}

fn bg_blue_600(ctx: &MigrationContext) -> MigrationSuggestion {
    match ctx.component_type {
        Some(ComponentType::Button | ComponentType::Link) => MigrationSuggestion::contextual(
            "bg-interactive-primary",
            Confidence::High,
            "blue action background",
            &["bg-info-emphasis"],
        ),
        Some(ComponentType::Alert | ComponentType::Badge) => MigrationSuggestion::contextual(
            "bg-info-emphasis",
            Confidence::High,
            "informational status fill",
            &["bg-info"],
        ),
        _ => MigrationSuggestion::contextual(
            "bg-info-emphasis",
            Confidence::Medium,
            "blue fill without a component hint",
            &["bg-interactive-primary"],
        ),
    }
}

fn text_primary_600(ctx: &MigrationContext) -> MigrationSuggestion {
    match ctx.component_type {
        Some(ComponentType::Link) => MigrationSuggestion::contextual(
            "text-link",
            Confidence::High,
            "link text color",
            &["text-brand"],
        ),
        Some(ComponentType::Button) => MigrationSuggestion::contextual(
            "text-interactive-primary",
            Confidence::Medium,
            "text of a secondary or ghost button",
            &["text-link", "text-brand"],
        ),
        _ => MigrationSuggestion::contextual(
            "text-brand",
            Confidence::Medium,
            "brand-colored text",
            &["text-link"],
        ),
    }
}

fn text_gray_500(ctx: &MigrationContext) -> MigrationSuggestion {
    if ctx.is(ComponentType::Input) {
        MigrationSuggestion::contextual(
            "text-placeholder",
            Confidence::High,
            "placeholder or hint text in a form control",
            &["text-muted"],
        )
    } else if ctx.is_dark_mode {
        MigrationSuggestion::contextual(
            "text-muted",
            Confidence::Medium,
            "muted text with a dark variant nearby",
            &["text-secondary"],
        )
    } else {
        MigrationSuggestion::contextual(
            "text-muted",
            Confidence::Medium,
            "secondary body text",
            &["text-placeholder", "text-secondary"],
        )
    }
}

fn border_gray_300(ctx: &MigrationContext) -> MigrationSuggestion {
    match ctx.component_type {
        Some(ComponentType::Input) => MigrationSuggestion::contextual(
            "border-input",
            Confidence::High,
            "form control outline",
            &["border-default"],
        ),
        Some(ComponentType::Card) => MigrationSuggestion::contextual(
            "border-default",
            Confidence::High,
            "card outline",
            &["border-subtle"],
        ),
        _ => MigrationSuggestion::contextual(
            "border-default",
            Confidence::Medium,
            "generic divider or outline",
            &["border-input", "border-strong"],
        ),
    }
}

fn bg_red_600(ctx: &MigrationContext) -> MigrationSuggestion {
    match ctx.component_type {
        Some(ComponentType::Button) => MigrationSuggestion::contextual(
            "bg-interactive-danger",
            Confidence::High,
            "destructive action",
            &["bg-error"],
        ),
        Some(ComponentType::Alert) => MigrationSuggestion::contextual(
            "bg-error",
            Confidence::High,
            "error alert fill",
            &["bg-error-emphasis"],
        ),
        Some(ComponentType::Badge) => MigrationSuggestion::contextual(
            "bg-error-emphasis",
            Confidence::Medium,
            "error status badge",
            &["bg-error"],
        ),
        _ => MigrationSuggestion::contextual(
            "bg-error",
            Confidence::Medium,
            "red fill reads as an error state",
            &["bg-interactive-danger"],
        ),
    }
}

fn bg_green_600(ctx: &MigrationContext) -> MigrationSuggestion {
    match ctx.component_type {
        Some(ComponentType::Button) => MigrationSuggestion::contextual(
            "bg-interactive-success",
            Confidence::High,
            "confirming action",
            &["bg-success"],
        ),
        Some(ComponentType::Alert | ComponentType::Badge) => MigrationSuggestion::contextual(
            "bg-success",
            Confidence::High,
            "success status fill",
            &["bg-success-emphasis"],
        ),
        _ => MigrationSuggestion::contextual(
            "bg-success",
            Confidence::Medium,
            "green fill reads as a success state",
            &["bg-interactive-success"],
        ),
    }
}

fn bg_warning(ctx: &MigrationContext) -> MigrationSuggestion {
    if ctx.is(ComponentType::Alert) || ctx.is(ComponentType::Badge) {
        MigrationSuggestion::contextual(
            "bg-warning",
            Confidence::High,
            "warning status fill",
            &["bg-warning-emphasis"],
        )
    } else {
        MigrationSuggestion::contextual(
            "bg-warning",
            Confidence::Medium,
            "yellow fill reads as a warning state",
            &["bg-warning-emphasis"],
        )
    }
}
