//! Line-oriented extraction of raw class-name tokens.
//!
//! Every physical line is scanned with two independent literal patterns,
//! quoted strings and template literals. Both run unconditionally, so a
//! quoted string nested inside a template literal yields its tokens twice.
//! A third pattern finds `--palette-*` custom properties anywhere on the line.
//!
//! Columns are tracked per occurrence: a token's column is the offset of that
//! very occurrence inside its literal, not the first match of the same text on
//! the line.

use crate::source::SourceFile;
use crate::types::{RawTokenUsage, UsageKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

#[allow(clippy::expect_used)]
static QUOTED_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"\n]*)"|'([^'\n]*)'"#).expect("quoted literal pattern"));

#[allow(clippy::expect_used)]
static TEMPLATE_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]*)`").expect("template literal pattern"));

#[allow(clippy::expect_used)]
static PALETTE_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--palette-[A-Za-z0-9_-]+").expect("palette variable pattern"));

#[allow(clippy::expect_used)]
static ELEMENT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9.-]*)").expect("element tag pattern"));

#[allow(clippy::expect_used)]
static CLASS_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("token pattern"));

/// A literal span found on a line: its value and the byte offset where the
/// value starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan<'a> {
    /// Literal contents without the surrounding quotes.
    pub value: &'a str,
    /// Byte offset of `value` within the line.
    pub start: usize,
}

/// Finds all quoted-string spans followed by all template-literal spans.
#[must_use]
pub fn literal_spans(line: &str) -> Vec<LiteralSpan<'_>> {
    let mut spans = Vec::new();
    for caps in QUOTED_LITERAL.captures_iter(line) {
        if let Some(m) = caps.get(1).or_else(|| caps.get(2)) {
            spans.push(LiteralSpan {
                value: m.as_str(),
                start: m.start(),
            });
        }
    }
    for caps in TEMPLATE_LITERAL.captures_iter(line) {
        if let Some(m) = caps.get(1) {
            spans.push(LiteralSpan {
                value: m.as_str(),
                start: m.start(),
            });
        }
    }
    spans
}

/// Returns the last markup tag opened before byte offset `end` of a line
/// (`<a><button className="…` → `button`).
#[must_use]
pub fn element_type(line: &str, end: usize) -> Option<&str> {
    ELEMENT_TAG
        .captures_iter(line)
        .filter_map(|c| c.get(1))
        .take_while(|m| m.start() < end)
        .last()
        .map(|m| m.as_str())
}

/// Extracts raw token usages from a single line.
///
/// `line_number` is 1-indexed.
#[must_use]
pub fn extract_line(path: &Path, line_number: usize, line: &str) -> Vec<RawTokenUsage> {
    let line_context = line.trim().to_string();
    let mut usages = Vec::new();

    for span in literal_spans(line) {
        let element = element_type(line, span.start).map(str::to_string);
        for token in CLASS_TOKEN.find_iter(span.value) {
            usages.push(RawTokenUsage {
                file: path.to_path_buf(),
                line: line_number,
                column: span.start + token.start() + 1,
                raw_token: token.as_str().to_string(),
                line_context: line_context.clone(),
                literal: span.value.to_string(),
                element_type: element.clone(),
                kind: UsageKind::ClassName,
            });
        }
    }

    for m in PALETTE_VARIABLE.find_iter(line) {
        let element = element_type(line, m.start()).map(str::to_string);
        usages.push(RawTokenUsage {
            file: path.to_path_buf(),
            line: line_number,
            column: m.start() + 1,
            raw_token: m.as_str().to_string(),
            line_context: line_context.clone(),
            literal: String::new(),
            element_type: element,
            kind: UsageKind::PaletteVariable,
        });
    }

    usages
}

/// Lazily extracts every raw token usage from a file, line by line.
///
/// Re-extraction from identical text always yields identical output.
pub fn extract(file: &SourceFile) -> impl Iterator<Item = RawTokenUsage> + '_ {
    file.text
        .split('\n')
        .enumerate()
        .flat_map(move |(i, line)| extract_line(&file.path, i + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<(usize, usize, String)> {
        let file = SourceFile::new("App.tsx", text);
        extract(&file)
            .map(|u| (u.line, u.column, u.raw_token))
            .collect()
    }

    #[test]
    fn test_quoted_literal_tokens_and_columns() {
        let found = tokens(r#"<div className="p-4 gap-2">"#);
        assert_eq!(
            found,
            vec![(1, 17, "p-4".to_string()), (1, 21, "gap-2".to_string())]
        );
    }

    #[test]
    fn test_single_quotes_and_template_literals() {
        let found = tokens("const a = 'bg-white';\nconst b = `flex ${x} mt-2`;");
        let names: Vec<&str> = found.iter().map(|(_, _, t)| t.as_str()).collect();
        assert_eq!(names, vec!["bg-white", "flex", "${x}", "mt-2"]);
        assert_eq!(found[3].0, 2);
    }

    #[test]
    fn test_repeated_token_gets_its_own_column() {
        let line = r#"cn("hover:p-4 p-4")"#;
        let found = tokens(line);
        assert_eq!(found[0], (1, 5, "hover:p-4".to_string()));
        assert_eq!(found[1], (1, 15, "p-4".to_string()));
        assert_eq!(&line[14..17], "p-4");
    }

    #[test]
    fn test_quotes_inside_template_are_scanned_by_both_patterns() {
        let found = tokens(r#"`a "p-4"`"#);
        let p4: Vec<_> = found.iter().filter(|(_, _, t)| t == "p-4").collect();
        assert_eq!(p4.len(), 1);
        assert!(found.iter().any(|(_, _, t)| t == "\"p-4\""));
    }

    #[test]
    fn test_palette_variable_anywhere_on_line() {
        let file = SourceFile::new("theme.css", "  color: var(--palette-blue-500);");
        let usages: Vec<_> = extract(&file).collect();
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].kind, UsageKind::PaletteVariable);
        assert_eq!(usages[0].raw_token, "--palette-blue-500");
        assert_eq!(usages[0].column, 14);
    }

    #[test]
    fn test_context_fields() {
        let file = SourceFile::new(
            "a.tsx",
            r#"  <button className="bg-primary-600 hover:opacity-90">"#,
        );
        let usages: Vec<_> = extract(&file).collect();
        assert_eq!(usages[0].element_type.as_deref(), Some("button"));
        assert_eq!(usages[0].literal, "bg-primary-600 hover:opacity-90");
        assert_eq!(
            usages[0].line_context,
            r#"<button className="bg-primary-600 hover:opacity-90">"#
        );
        assert_eq!(
            usages[0].class_list().collect::<Vec<_>>(),
            vec!["bg-primary-600", "hover:opacity-90"]
        );
    }

    #[test]
    fn test_element_is_the_nearest_enclosing_tag() {
        let file = SourceFile::new(
            "a.tsx",
            r#"<a href="/"><button className="bg-primary-600">Go</button></a>"#,
        );
        let usages: Vec<_> = extract(&file).collect();
        let href = usages.iter().find(|u| u.raw_token == "/").unwrap();
        assert_eq!(href.element_type.as_deref(), Some("a"));
        let bg = usages.iter().find(|u| u.raw_token == "bg-primary-600").unwrap();
        assert_eq!(bg.element_type.as_deref(), Some("button"));

        let file = SourceFile::new("a.tsx", r#"const c = "p-4"; // <div>"#);
        assert_eq!(extract(&file).next().unwrap().element_type, None);
    }

    #[test]
    fn test_lines_without_literals_emit_nothing() {
        assert!(tokens("return null;\n\n// comment").is_empty());
    }

    #[test]
    fn test_extraction_is_restartable() {
        let file = SourceFile::new("a.tsx", "x = \"p-4\"\ny = 'm-2'");
        let first: Vec<_> = extract(&file).collect();
        let second: Vec<_> = extract(&file).collect();
        assert_eq!(first, second);
    }
}
