//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! {/* tokenlint: allow(no-raw-color) reason="brand illustration" */}
//! // tokenlint: allow(spacing, sizing)
//! ```
//!
//! A directive applies to its own line and the line after it. Entries are
//! rule names, category names or `all`.

use std::collections::HashSet;

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule or category names that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

impl AllowDirective {
    fn covers(&self, names: &[&str]) -> bool {
        self.rules.contains("all") || names.iter().any(|n| self.rules.contains(*n))
    }
}

/// Checks source lines for an allowance covering any of `names`.
///
/// `lines` are the file's lines split on `\n`; `line` is 1-indexed.
#[must_use]
pub fn check_allow_with_reason(lines: &[&str], line: usize, names: &[&str]) -> AllowCheck {
    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        if let Some(directive) = parse_allow_directive(lines[check_line - 1]) {
            if directive.covers(names) {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Finds the directive in a line, behind any supported comment opener.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    const OPENERS: &[&str] = &["{/*", "/*", "//", "<!--", "#"];

    let idx = line.find("tokenlint:")?;
    if !OPENERS.iter().any(|o| line[..idx].contains(o)) {
        return None;
    }

    let directive = line[idx + "tokenlint:".len()..].trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .map(str::trim)
        .and_then(|r| r.strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()));

    Some(AllowDirective { rules, reason })
}
