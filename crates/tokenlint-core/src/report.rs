//! Aggregation of scan results into a serializable report.

use crate::types::{Category, ScanResult, Severity, Violation};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

/// Number of violations listed in summary mode.
pub const SUMMARY_VIOLATION_CAP: usize = 10;

/// Number of `(from → to)` rows kept unless configured otherwise.
pub const DEFAULT_TOP_SUGGESTIONS: usize = 20;

/// How many violations a report lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// First ten violations.
    #[default]
    Summary,
    /// Every violation.
    Detailed,
}

impl ReportMode {
    /// Maximum number of listed violations, `None` for no cap.
    #[must_use]
    pub fn violation_cap(self) -> Option<usize> {
        match self {
            Self::Summary => Some(SUMMARY_VIOLATION_CAP),
            Self::Detailed => None,
        }
    }
}

/// Counts over a whole scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Files scanned.
    pub total_files: usize,
    /// Files with at least one violation.
    pub files_with_violations: usize,
    /// Violations found.
    pub total_violations: usize,
    /// Violations per category.
    pub by_type: BTreeMap<Category, usize>,
    /// Violations per severity.
    pub by_severity: BTreeMap<Severity, usize>,
    /// Violations per file.
    pub by_file: BTreeMap<PathBuf, usize>,
    /// Violations that `--fix` would rewrite.
    pub fixable: usize,
}

/// How often one raw token maps to one suggestion across the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSuggestionSummary {
    /// Raw token.
    pub from: String,
    /// Rendered suggestion.
    pub to: String,
    /// Number of violations with this mapping.
    pub count: usize,
    /// Files the mapping occurs in.
    pub files: BTreeSet<PathBuf>,
}

/// Serializable scan report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Listing mode the report was built with.
    pub mode: ReportMode,
    /// Listed violations, capped by `mode`.
    pub violations: Vec<Violation>,
    /// Counts over every violation, listed or not.
    pub summary: Summary,
    /// Most frequent `(from → to)` mappings.
    pub suggestions: Vec<MigrationSuggestionSummary>,
}

impl Report {
    /// Folds a scan result into a report.
    #[must_use]
    pub fn build(result: &ScanResult, mode: ReportMode, top_suggestions: usize) -> Self {
        let violations = match mode.violation_cap() {
            Some(cap) => result.violations.iter().take(cap).cloned().collect(),
            None => result.violations.clone(),
        };
        Self {
            mode,
            violations,
            summary: summarize(result),
            suggestions: suggestion_table(&result.violations, top_suggestions),
        }
    }

    /// Number of violations left out of the listing.
    #[must_use]
    pub fn omitted(&self) -> usize {
        self.summary
            .total_violations
            .saturating_sub(self.violations.len())
    }
}

/// Counts violations by category, severity and file.
#[must_use]
pub fn summarize(result: &ScanResult) -> Summary {
    let mut summary = Summary {
        total_files: result.files_scanned,
        files_with_violations: result.per_file.values().filter(|v| !v.is_empty()).count(),
        total_violations: result.violations.len(),
        fixable: result.fixable_count(),
        ..Summary::default()
    };
    for v in &result.violations {
        *summary.by_type.entry(v.category).or_default() += 1;
        *summary.by_severity.entry(v.severity).or_default() += 1;
    }
    for (path, violations) in &result.per_file {
        if !violations.is_empty() {
            summary.by_file.insert(path.clone(), violations.len());
        }
    }
    summary
}

/// Builds the `(from → to)` table over violations that carry a suggestion.
///
/// Rows are sorted by count descending, ties by `from` then `to`, and cut
/// to `top` rows.
#[must_use]
pub fn suggestion_table(violations: &[Violation], top: usize) -> Vec<MigrationSuggestionSummary> {
    let mut rows: HashMap<(String, String), MigrationSuggestionSummary> = HashMap::new();
    for v in violations {
        let Some(suggestion) = &v.suggestion else {
            continue;
        };
        let from = v.usage.raw_token.clone();
        let to = suggestion.to_string();
        let row = rows
            .entry((from.clone(), to.clone()))
            .or_insert_with(|| MigrationSuggestionSummary {
                from,
                to,
                count: 0,
                files: BTreeSet::new(),
            });
        row.count += 1;
        row.files.insert(v.usage.file.clone());
    }

    let mut rows: Vec<_> = rows.into_values().collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.from.cmp(&b.from))
            .then_with(|| a.to.cmp(&b.to))
    });
    rows.truncate(top);
    rows
}
