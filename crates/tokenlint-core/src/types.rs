//! Core types for token usages, violations, suggestions and scan results.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Styling category a non-semantic class name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Palette colors, white/black and arbitrary hex values.
    Color,
    /// Padding, margin, gap and space-between scale values.
    Spacing,
    /// Element heights and widths on the numeric scale.
    Sizing,
    /// Numeric border widths.
    Border,
    /// Raw shadow utilities.
    Shadow,
    /// Gradient directions and color stops.
    Gradient,
    /// Font sizes, weights and line heights.
    Typography,
    /// Corner radii.
    Radius,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Color,
        Self::Spacing,
        Self::Sizing,
        Self::Border,
        Self::Shadow,
        Self::Gradient,
        Self::Typography,
        Self::Radius,
    ];

    /// Returns the lowercase name of this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Sizing => "sizing",
            Self::Border => "border",
            Self::Shadow => "shadow",
            Self::Gradient => "gradient",
            Self::Typography => "typography",
            Self::Radius => "radius",
        }
    }

    /// Parses a category from its lowercase name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Color usages are errors; every other category is a warning.
    #[must_use]
    pub fn default_severity(self) -> Severity {
        match self {
            Self::Color => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How certain a context-ranked suggestion is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Generic fallback, review required.
    Low,
    /// Plausible for the detected context.
    Medium,
    /// Matches the detected context.
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Where a raw token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageKind {
    /// A whitespace-delimited class name inside a string or template literal.
    ClassName,
    /// A `--palette-*` custom property anywhere on the line.
    PaletteVariable,
}

/// A single raw class-name candidate found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTokenUsage {
    /// File path as discovered by the scanner.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Byte column of the token on its line (1-indexed).
    pub column: usize,
    /// The token exactly as written, modifiers included.
    pub raw_token: String,
    /// The trimmed source line.
    pub line_context: String,
    /// Value of the enclosing literal; the class list used as context.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub literal: String,
    /// First markup tag name on the line, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    /// Literal class name or palette variable.
    pub kind: UsageKind,
}

impl RawTokenUsage {
    /// Iterates the class names of the enclosing literal.
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.literal.split_whitespace()
    }
}

/// One candidate of a nearest-neighbor suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestCandidate {
    /// Replacement class name.
    pub replacement: String,
    /// Canonical rem value of the candidate token.
    pub rem: f64,
    /// Absolute rem distance from the original value.
    pub distance: f64,
}

/// A proposed semantic replacement for a violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Suggestion {
    /// Proven equivalent replacement; eligible for autofix.
    Exact {
        /// Replacement class name, modifiers included.
        replacement: String,
    },
    /// Closest semantic tokens when no exact equivalent exists.
    Nearest {
        /// Up to two candidates, closest first.
        candidates: Vec<NearestCandidate>,
    },
    /// Replacement that depends on the surrounding class list.
    Contextual {
        /// Best replacement for the detected context.
        replacement: String,
        /// How certain the match is.
        confidence: Confidence,
        /// Why this replacement was chosen.
        rationale: String,
        /// Other plausible replacements.
        alternatives: Vec<String>,
    },
}

impl Suggestion {
    /// Creates an exact suggestion.
    #[must_use]
    pub fn exact(replacement: impl Into<String>) -> Self {
        Self::Exact {
            replacement: replacement.into(),
        }
    }

    /// Creates a contextual suggestion without alternatives.
    #[must_use]
    pub fn contextual(
        replacement: impl Into<String>,
        confidence: Confidence,
        rationale: impl Into<String>,
    ) -> Self {
        Self::Contextual {
            replacement: replacement.into(),
            confidence,
            rationale: rationale.into(),
            alternatives: Vec::new(),
        }
    }

    /// Returns true if this suggestion may be applied automatically.
    #[must_use]
    pub fn is_autofix_eligible(&self) -> bool {
        matches!(self, Self::Exact { .. })
    }

    /// Returns the exact replacement, if this is an exact suggestion.
    #[must_use]
    pub fn exact_replacement(&self) -> Option<&str> {
        match self {
            Self::Exact { replacement } => Some(replacement),
            _ => None,
        }
    }

    /// Prefixes every replacement with a modifier chain such as `hover:`.
    #[must_use]
    pub fn with_modifiers(self, modifiers: &str) -> Self {
        if modifiers.is_empty() {
            return self;
        }
        match self {
            Self::Exact { replacement } => Self::Exact {
                replacement: format!("{modifiers}{replacement}"),
            },
            Self::Nearest { candidates } => Self::Nearest {
                candidates: candidates
                    .into_iter()
                    .map(|c| NearestCandidate {
                        replacement: format!("{modifiers}{}", c.replacement),
                        ..c
                    })
                    .collect(),
            },
            Self::Contextual {
                replacement,
                confidence,
                rationale,
                alternatives,
            } => Self::Contextual {
                replacement: format!("{modifiers}{replacement}"),
                confidence,
                rationale,
                alternatives: alternatives
                    .into_iter()
                    .map(|a| format!("{modifiers}{a}"))
                    .collect(),
            },
        }
    }
}

/// Formats a rem value without trailing zeros (`1rem`, `0.75rem`).
#[must_use]
pub fn format_rem(rem: f64) -> String {
    format!("{rem}rem")
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact { replacement } | Self::Contextual { replacement, .. } => {
                f.write_str(replacement)
            }
            Self::Nearest { candidates } => {
                let parts: Vec<String> = candidates
                    .iter()
                    .map(|c| format!("{} ({})", c.replacement, format_rem(c.rem)))
                    .collect();
                write!(f, "nearest: {}", parts.join(" or "))
            }
        }
    }
}

/// A lint violation found during a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "TL001").
    pub code: String,
    /// Rule name (e.g., "no-raw-color").
    pub rule: String,
    /// Category the token was classified into.
    pub category: Category,
    /// Severity of this violation.
    pub severity: Severity,
    /// The offending token and its position.
    pub usage: RawTokenUsage,
    /// Human-readable message.
    pub message: String,
    /// Optional semantic replacement.
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation without a suggestion.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        category: Category,
        severity: Severity,
        usage: RawTokenUsage,
    ) -> Self {
        let message = format!(
            "non-semantic {category} value `{}`; use a design token",
            usage.raw_token
        );
        Self {
            code: code.into(),
            rule: rule.into(),
            category,
            severity,
            usage,
            message,
            suggestion: None,
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Option<Suggestion>) -> Self {
        self.suggestion = suggestion;
        self
    }

    /// Path of the file containing the violation.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.usage.file
    }

    /// Returns true if the violation carries an exact suggestion.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        self.suggestion
            .as_ref()
            .is_some_and(Suggestion::is_autofix_eligible)
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.usage.file.display(),
            self.usage.line,
            self.usage.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        match &self.suggestion {
            Some(Suggestion::Contextual {
                replacement,
                confidence,
                alternatives,
                ..
            }) => {
                let _ = writeln!(output, "  = help: {replacement} ({confidence} confidence)");
                if !alternatives.is_empty() {
                    let _ = writeln!(output, "  = also: {}", alternatives.join(", "));
                }
            }
            Some(suggestion) => {
                let _ = writeln!(output, "  = help: {suggestion}");
            }
            None => {}
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.usage.file.display(),
            self.usage.line,
            self.usage.column,
            self.severity,
            self.code,
            self.message
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {suggestion})")?;
        }
        Ok(())
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ViolationDiagnostic {
    /// Builds a diagnostic pointing at the violation inside `source`.
    #[must_use]
    pub fn new(v: &Violation, source: &str) -> Self {
        let offset = offset_for(source, v.usage.line, v.usage.column);
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| format!("replace with {s}")),
            src: NamedSource::new(v.usage.file.display().to_string(), source.to_string()),
            span: SourceSpan::from((offset, v.usage.raw_token.len())),
            label_message: v.rule.clone(),
        }
    }
}

/// Calculates the byte offset of a 1-indexed line and column.
///
/// Returns the length of `content` when the line is out of bounds.
#[must_use]
pub fn offset_for(content: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (i, line_content) in content.split('\n').enumerate() {
        if i + 1 == line {
            return offset + column.saturating_sub(1).min(line_content.len());
        }
        offset += line_content.len() + 1;
    }
    content.len()
}

/// Result of scanning a set of files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// All violations, ordered by file, line and column.
    pub violations: Vec<Violation>,
    /// Violations grouped by file.
    pub per_file: BTreeMap<PathBuf, Vec<Violation>>,
    /// Number of files scanned.
    pub files_scanned: usize,
}

impl ScanResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a result from per-file violation lists.
    ///
    /// Each file entry is written exactly once, so parallel producers can
    /// hand over their partitions without coordination.
    #[must_use]
    pub fn from_partitions(
        partitions: Vec<(PathBuf, Vec<Violation>)>,
        files_scanned: usize,
    ) -> Self {
        let mut per_file: BTreeMap<PathBuf, Vec<Violation>> = BTreeMap::new();
        for (path, mut violations) in partitions {
            if violations.is_empty() {
                continue;
            }
            violations.sort_by(|a, b| {
                a.usage
                    .line
                    .cmp(&b.usage.line)
                    .then(a.usage.column.cmp(&b.usage.column))
            });
            per_file.entry(path).or_default().extend(violations);
        }
        let violations = per_file.values().flatten().cloned().collect();
        Self {
            violations,
            per_file,
            files_scanned,
        }
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Counts violations by severity as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        (errors, self.violations.len() - errors)
    }

    /// Number of violations whose suggestion can be applied automatically.
    #[must_use]
    pub fn fixable_count(&self) -> usize {
        self.violations.iter().filter(|v| v.is_fixable()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(token: &str, line: usize, column: usize) -> RawTokenUsage {
        RawTokenUsage {
            file: PathBuf::from("src/App.tsx"),
            line,
            column,
            raw_token: token.to_string(),
            line_context: format!("<div className=\"{token}\" />"),
            literal: token.to_string(),
            element_type: Some("div".to_string()),
            kind: UsageKind::ClassName,
        }
    }

    fn make_violation(token: &str, suggestion: Option<Suggestion>) -> Violation {
        Violation::new(
            "TL002",
            "no-raw-spacing",
            Category::Spacing,
            Severity::Warning,
            usage(token, 3, 17),
        )
        .with_suggestion(suggestion)
    }

    #[test]
    fn nearest_suggestion_display() {
        let s = Suggestion::Nearest {
            candidates: vec![
                NearestCandidate {
                    replacement: "p-base".into(),
                    rem: 1.0,
                    distance: 0.25,
                },
                NearestCandidate {
                    replacement: "p-lg".into(),
                    rem: 1.5,
                    distance: 0.25,
                },
            ],
        };
        assert_eq!(s.to_string(), "nearest: p-base (1rem) or p-lg (1.5rem)");
        assert!(!s.is_autofix_eligible());
    }

    #[test]
    fn with_modifiers_prefixes_every_replacement() {
        let s = Suggestion::exact("p-base").with_modifiers("hover:");
        assert_eq!(s.exact_replacement(), Some("hover:p-base"));

        let s = Suggestion::Contextual {
            replacement: "bg-brand".into(),
            confidence: Confidence::Medium,
            rationale: String::new(),
            alternatives: vec!["bg-interactive-primary".into()],
        }
        .with_modifiers("dark:");
        match s {
            Suggestion::Contextual {
                replacement,
                alternatives,
                ..
            } => {
                assert_eq!(replacement, "dark:bg-brand");
                assert_eq!(alternatives, vec!["dark:bg-interactive-primary"]);
            }
            other => panic!("unexpected suggestion: {other:?}"),
        }
    }

    #[test]
    fn violation_format_includes_help() {
        let v = make_violation("p-4", Some(Suggestion::exact("p-base")));
        let formatted = v.format();
        assert!(formatted.contains("TL002 no-raw-spacing at src/App.tsx:3:17"));
        assert!(formatted.contains("= help: p-base"));
        assert!(v.is_fixable());
    }

    #[test]
    fn violation_display_omits_missing_suggestion() {
        let v = make_violation("p-4", None);
        let display = format!("{v}");
        assert!(display.starts_with("src/App.tsx:3:17: warning [TL002]"));
        assert!(!display.contains("suggestion:"));
    }

    #[test]
    fn offset_for_counts_bytes() {
        let content = "line1\nline2\nline3";
        assert_eq!(offset_for(content, 1, 1), 0);
        assert_eq!(offset_for(content, 2, 1), 6);
        assert_eq!(offset_for(content, 2, 3), 8);
        assert_eq!(offset_for(content, 9, 1), content.len());
    }

    #[test]
    fn from_partitions_orders_and_skips_empty() {
        let mut late = make_violation("p-4", None);
        late.usage.line = 9;
        let early = make_violation("gap-2", None);
        let result = ScanResult::from_partitions(
            vec![
                (PathBuf::from("b.tsx"), Vec::new()),
                (PathBuf::from("src/App.tsx"), vec![late, early]),
            ],
            2,
        );
        assert_eq!(result.files_scanned, 2);
        assert_eq!(result.per_file.len(), 1);
        assert_eq!(result.violations[0].usage.raw_token, "gap-2");
        assert_eq!(result.count_by_severity(), (0, 2));
    }

    #[test]
    fn category_parse_roundtrips_names() {
        for c in Category::ALL {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("motion"), None);
        assert_eq!(Category::Color.default_severity(), Severity::Error);
        assert_eq!(Category::Radius.default_severity(), Severity::Warning);
    }
}
