//! # tokenlint-rules
//!
//! Built-in category rules and suggestion resolvers for tokenlint.
//!
//! ## Available Rules
//!
//! | Code | Name | Category | Description |
//! |------|------|----------|-------------|
//! | TL001 | `no-raw-color` | color | Palette shades, white/black, hex literals |
//! | TL002 | `no-raw-spacing` | spacing | Numeric padding, margin, gap, space |
//! | TL003 | `no-raw-sizing` | sizing | Numeric heights and widths in `[4, 16]` |
//! | TL004 | `no-raw-border-width` | border | Numeric border widths |
//! | TL005 | `no-raw-shadow` | shadow | Raw shadow utilities |
//! | TL006 | `no-raw-gradient` | gradient | Gradient directions and palette stops |
//! | TL007 | `no-raw-typography` | typography | Font sizes, weights, line heights |
//! | TL008 | `no-raw-radius` | radius | Corner radii |
//!
//! `--palette-*` custom properties are reported by the classifier itself as
//! `palette-variable` (TL009).
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tokenlint_core::{Scanner, TokenTables};
//! use tokenlint_rules::reporting_rules;
//!
//! let tables = Arc::new(TokenTables::builtin());
//! let scanner = Scanner::builder()
//!     .root("./src")
//!     .rules(reporting_rules(&tables))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod border;
mod color;
mod gradient;
mod presets;
mod radius;
mod shadow;
mod sizing;
mod spacing;
mod typography;

/// Color migration resolver.
pub mod migration;
/// Numeric scale resolver shared by spacing and sizing.
pub mod numeric;

pub use border::NoRawBorderWidth;
pub use color::{NoRawColor, COLOR_PREFIXES};
pub use gradient::NoRawGradient;
pub use migration::{
    analyze_context, ComponentType, MigrationContext, MigrationResolver, MigrationSuggestion,
    MigrationTables, SuggestionOrigin,
};
pub use presets::{all_rules, reporting_rules, rules_from_config, Preset};
pub use radius::NoRawRadius;
pub use shadow::{NoRawShadow, SHADOW_TOKENS};
pub use sizing::NoRawSizing;
pub use spacing::NoRawSpacing;
pub use typography::NoRawTypography;

/// Re-export core types for convenience.
pub use tokenlint_core::{Rule, Severity, Suggestion, Violation};
