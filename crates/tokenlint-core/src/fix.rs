//! Applies exact suggestions back to source files.
//!
//! Edits for one file are applied from the bottom right upwards, so an edit
//! never shifts the recorded position of an edit still pending. The token must
//! still start at its recorded column and end at a class-name delimiter;
//! otherwise the edit is stale and skipped. Edits that name the same token at
//! the same position are applied once.

use crate::types::{ScanResult, Violation};
use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while writing fixes.
#[derive(Debug, Error)]
pub enum FixError {
    /// A file could not be read or written.
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        /// `read` or `write`.
        action: &'static str,
        /// File involved.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// A single replacement request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixEdit<'a> {
    /// Line number (1-indexed).
    pub line: usize,
    /// Byte column (1-indexed) where the search starts.
    pub column: usize,
    /// Token to replace.
    pub from: &'a str,
    /// Replacement token.
    pub to: &'a str,
}

impl<'a> FixEdit<'a> {
    /// Builds an edit from a violation with an exact suggestion.
    #[must_use]
    pub fn from_violation(v: &'a Violation) -> Option<Self> {
        let to = v.suggestion.as_ref()?.exact_replacement()?;
        Some(Self {
            line: v.usage.line,
            column: v.usage.column,
            from: &v.usage.raw_token,
            to,
        })
    }
}

/// Outcome of fixing one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFix {
    /// The rewritten text.
    pub text: String,
    /// Edits applied.
    pub applied: usize,
    /// Edits whose token could not be found at its position.
    pub skipped: usize,
}

/// Outcome of fixing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixOutcome {
    /// File path.
    pub path: PathBuf,
    /// Edits applied.
    pub applied: usize,
    /// Edits skipped as stale.
    pub skipped: usize,
    /// Whether the file was rewritten.
    pub written: bool,
}

/// Pattern for `token` delimited like a class name.
///
/// Group 1 is the token itself. `\b` is not usable because tokens may start
/// with `-` or contain `:` and `/`.
fn class_boundary_pattern(token: &str) -> Option<Regex> {
    let pattern = format!(r#"(?:^|[\s"'`{{}}])({})(?:[\s"'`{{}}]|$)"#, regex::escape(token));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Cannot build fix pattern for {token}: {e}");
            None
        }
    }
}

/// Applies edits to `text` without touching the filesystem.
///
/// Lines are split on `\n` and rejoined with `\n`, so `\r` and a trailing
/// newline survive untouched.
#[must_use]
pub fn apply_fixes_to_text(text: &str, edits: &[FixEdit<'_>]) -> TextFix {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let mut ordered: Vec<&FixEdit<'_>> = edits.iter().collect();
    ordered.sort_by(|a, b| {
        b.line
            .cmp(&a.line)
            .then(b.column.cmp(&a.column))
            .then(a.from.cmp(b.from))
    });
    // Nested literals report the same occurrence twice.
    ordered.dedup_by(|a, b| a.line == b.line && a.column == b.column && a.from == b.from);

    let mut applied = 0;
    let mut skipped = 0;
    for edit in ordered {
        if apply_edit(&mut lines, edit) {
            applied += 1;
        } else {
            debug!(
                "Stale fix position {}:{} for {}",
                edit.line, edit.column, edit.from
            );
            skipped += 1;
        }
    }

    TextFix {
        text: lines.join("\n"),
        applied,
        skipped,
    }
}

fn apply_edit(lines: &mut [String], edit: &FixEdit<'_>) -> bool {
    let Some(line) = edit
        .line
        .checked_sub(1)
        .and_then(|idx| lines.get_mut(idx))
    else {
        return false;
    };
    let split = edit.column.saturating_sub(1);
    if split > line.len() || !line.is_char_boundary(split) {
        return false;
    }
    let Some(re) = class_boundary_pattern(edit.from) else {
        return false;
    };

    let (before, after) = line.split_at(split);
    let Some(m) = re
        .captures(after)
        .and_then(|c| c.get(1))
        .filter(|m| m.start() == 0)
    else {
        return false;
    };
    let rewritten = format!(
        "{before}{}{}{}",
        &after[..m.start()],
        edit.to,
        &after[m.end()..]
    );
    *line = rewritten;
    true
}

/// Applies every exact suggestion in `result` to the files on disk.
///
/// Files are processed in parallel; edits within a file run in order. Files
/// without eligible violations, or where every edit was stale, are left
/// untouched.
///
/// # Errors
///
/// Returns the first IO error encountered.
pub fn apply_fixes(result: &ScanResult) -> Result<Vec<FixOutcome>, FixError> {
    let outcomes = result
        .per_file
        .par_iter()
        .filter_map(|(path, violations)| {
            let edits: Vec<FixEdit<'_>> =
                violations.iter().filter_map(FixEdit::from_violation).collect();
            if edits.is_empty() {
                return None;
            }
            Some(fix_file(path, &edits))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let applied: usize = outcomes.iter().map(|o| o.applied).sum();
    let skipped: usize = outcomes.iter().map(|o| o.skipped).sum();
    info!(
        "Applied {} fixes in {} files ({} skipped)",
        applied,
        outcomes.iter().filter(|o| o.written).count(),
        skipped
    );
    Ok(outcomes)
}

fn fix_file(path: &Path, edits: &[FixEdit<'_>]) -> Result<FixOutcome, FixError> {
    let text = std::fs::read_to_string(path).map_err(|source| FixError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let fixed = apply_fixes_to_text(&text, edits);
    if fixed.skipped > 0 {
        warn!(
            "Skipped {} stale fixes in {}",
            fixed.skipped,
            path.display()
        );
    }

    let written = fixed.applied > 0 && fixed.text != text;
    if written {
        std::fs::write(path, &fixed.text).map_err(|source| FixError::Io {
            action: "write",
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Fixed {} ({} edits)", path.display(), fixed.applied);
    }

    Ok(FixOutcome {
        path: path.to_path_buf(),
        applied: fixed.applied,
        skipped: fixed.skipped,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit<'a>(line: usize, column: usize, from: &'a str, to: &'a str) -> FixEdit<'a> {
        FixEdit {
            line,
            column,
            from,
            to,
        }
    }

    #[test]
    fn test_fix_leaves_unrelated_bytes_alone() {
        let text = "<div className=\"p-4 gap-2 p-5\" />\n";
        let fixed = apply_fixes_to_text(
            text,
            &[edit(1, 17, "p-4", "p-base"), edit(1, 21, "gap-2", "gap-sm")],
        );
        assert_eq!(fixed.text, "<div className=\"p-base gap-sm p-5\" />\n");
        assert_eq!((fixed.applied, fixed.skipped), (2, 0));
    }

    #[test]
    fn test_repeated_tokens_each_fixed() {
        let text = "cn(\"hover:p-4 p-4\", 'p-4')";
        let fixed = apply_fixes_to_text(
            text,
            &[
                edit(1, 5, "hover:p-4", "hover:p-base"),
                edit(1, 15, "p-4", "p-base"),
                edit(1, 22, "p-4", "p-base"),
            ],
        );
        assert_eq!(fixed.text, "cn(\"hover:p-base p-base\", 'p-base')");
    }

    #[test]
    fn test_multi_line_fix() {
        let text = "<Card className=\"p-4\">\n  <Button className=\"gap-2 -m-2\" />\n</Card>";
        let fixed = apply_fixes_to_text(
            text,
            &[
                edit(1, 18, "p-4", "p-base"),
                edit(2, 22, "gap-2", "gap-sm"),
                edit(2, 28, "-m-2", "-m-sm"),
            ],
        );
        insta::assert_snapshot!(fixed.text, @r#"
        <Card className="p-base">
          <Button className="gap-sm -m-sm" />
        </Card>
        "#);
    }

    #[test]
    fn test_no_partial_match_inside_longer_token() {
        let fixed = apply_fixes_to_text("x = \"-m-2 m-2\"", &[edit(1, 11, "m-2", "m-sm")]);
        assert_eq!(fixed.text, "x = \"-m-2 m-sm\"");

        let stale = apply_fixes_to_text("x = \"-m-2 m-2\"", &[edit(1, 6, "m-2", "m-sm")]);
        assert_eq!(stale.text, "x = \"-m-2 m-2\"");
        assert_eq!(stale.skipped, 1);
    }

    #[test]
    fn test_duplicate_edits_never_reach_later_text() {
        let text = "const c = `a \"b p-4 c\" d`; // see p-4 docs";
        let fixed = apply_fixes_to_text(
            text,
            &[edit(1, 17, "p-4", "p-base"), edit(1, 17, "p-4", "p-base")],
        );
        assert_eq!(fixed.text, "const c = `a \"b p-base c\" d`; // see p-4 docs");
        assert_eq!((fixed.applied, fixed.skipped), (1, 0));
    }

    #[test]
    fn test_moved_token_is_stale() {
        let fixed = apply_fixes_to_text("x = \"flex p-4\"", &[edit(1, 6, "p-4", "p-base")]);
        assert_eq!(fixed.text, "x = \"flex p-4\"");
        assert_eq!(fixed.skipped, 1);
    }

    #[test]
    fn test_crlf_and_trailing_newline_survive() {
        let text = "a = \"p-4\"\r\nb = \"gap-2\"\r\n";
        let fixed = apply_fixes_to_text(
            text,
            &[edit(1, 6, "p-4", "p-base"), edit(2, 6, "gap-2", "gap-sm")],
        );
        assert_eq!(fixed.text, "a = \"p-base\"\r\nb = \"gap-sm\"\r\n");
    }

    #[test]
    fn test_stale_position_is_skipped() {
        let text = "a = \"flex\"";
        let fixed = apply_fixes_to_text(
            text,
            &[edit(1, 6, "p-4", "p-base"), edit(7, 1, "p-4", "p-base")],
        );
        assert_eq!(fixed.text, text);
        assert_eq!((fixed.applied, fixed.skipped), (0, 2));
    }

    #[test]
    fn test_column_inside_multibyte_char_is_skipped() {
        let text = "é = \"p-4\"";
        let fixed = apply_fixes_to_text(text, &[edit(1, 2, "p-4", "p-base")]);
        assert_eq!(fixed.skipped, 1);
        assert_eq!(fixed.text, text);
    }

    #[test]
    fn test_fix_is_idempotent() {
        let once = apply_fixes_to_text("x = \"p-4\"", &[edit(1, 6, "p-4", "p-base")]);
        let twice = apply_fixes_to_text(&once.text, &[edit(1, 6, "p-4", "p-base")]);
        assert_eq!(twice.text, once.text);
        assert_eq!(twice.applied, 0);
    }
}
