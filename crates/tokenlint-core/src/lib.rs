//! # tokenlint-core
//!
//! Core framework for linting non-semantic utility class names.
//!
//! This crate provides the pipeline every rule plugs into:
//!
//! - [`extractor`] pulls raw class-name tokens out of source lines
//! - [`Rule`] trait for category predicates and suggestion resolvers
//! - [`Classifier`] for ordered, first-match-wins categorization
//! - [`Scanner`] for file discovery and parallel scanning
//! - [`Report`] for aggregating results
//! - [`fix`] for applying exact suggestions back to files
//!
//! ## Example
//!
//! ```ignore
//! use tokenlint_core::{Report, ReportMode, Scanner};
//!
//! let scanner = Scanner::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = scanner.scan()?;
//! let report = Report::build(&result, ReportMode::Summary, 20);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod config;
mod rule;
mod scanner;
mod source;
mod types;

/// Line-oriented token extraction.
pub mod extractor;
/// Autofix applier.
pub mod fix;
/// Result aggregation.
pub mod report;
/// Design-token lookup tables.
pub mod tokens;
/// Utility modules for rule implementations.
pub mod utils;

pub use classifier::{Classifier, PALETTE_VARIABLE_CODE, PALETTE_VARIABLE_RULE};
pub use config::{
    default_excludes, default_extensions, Config, ConfigError, FixConfig, ReportConfig,
    RuleConfig, ScaleConfig, ScaleEntryConfig, ScanConfig, TokensConfig,
};
pub use fix::{apply_fixes, apply_fixes_to_text, FixEdit, FixError, FixOutcome, TextFix};
pub use report::{MigrationSuggestionSummary, Report, ReportMode, Summary};
pub use rule::{Rule, RuleBox};
pub use scanner::{ScanError, Scanner, ScannerBuilder};
pub use source::{is_test_file, SourceFile};
pub use tokens::{ScaleEntry, ScaleTable, TokenTables};
pub use types::{
    format_rem, offset_for, Category, Confidence, NearestCandidate, RawTokenUsage, ScanResult,
    Severity, Suggestion, UsageKind, Violation, ViolationDiagnostic,
};
pub use utils::allowance::AllowCheck;
