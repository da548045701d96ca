//! Shared output formatting for reports.

use anyhow::Result;
use miette::GraphicalReportHandler;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::PathBuf;
use tokenlint_core::{FixOutcome, Report, Severity, ViolationDiagnostic};

use crate::OutputFormat;

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixes: Option<&'a [FixOutcome]>,
}

/// Print a report in the specified format.
///
/// `sources` holds file contents for `pretty` snippets.
pub fn print(
    report: &Report,
    fixes: Option<&[FixOutcome]>,
    format: OutputFormat,
    sources: &BTreeMap<PathBuf, String>,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(report, fixes)),
        OutputFormat::Json => println!("{}", render_json(report, fixes)?),
        OutputFormat::Compact => print!("{}", render_compact(report)),
        OutputFormat::Pretty => print!("{}", render_pretty(report, fixes, sources)?),
    }
    Ok(())
}

fn render_json(report: &Report, fixes: Option<&[FixOutcome]>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput { report, fixes })?)
}

fn render_compact(report: &Report) -> String {
    let mut out = String::new();
    for violation in &report.violations {
        let _ = writeln!(out, "{violation}");
    }
    out
}

fn render_text(report: &Report, fixes: Option<&[FixOutcome]>) -> String {
    let mut out = String::new();
    for violation in &report.violations {
        out.push_str(&violation.format());
        out.push('\n');
    }
    write_footer(&mut out, report, fixes);
    out
}

fn render_pretty(
    report: &Report,
    fixes: Option<&[FixOutcome]>,
    sources: &BTreeMap<PathBuf, String>,
) -> Result<String> {
    let handler = GraphicalReportHandler::new();
    let mut out = String::new();
    for violation in &report.violations {
        match sources.get(violation.file()) {
            Some(source) => {
                let diagnostic = ViolationDiagnostic::new(violation, source);
                handler.render_report(&mut out, &diagnostic)?;
            }
            None => out.push_str(&violation.format()),
        }
        out.push('\n');
    }
    write_footer(&mut out, report, fixes);
    Ok(out)
}

fn write_footer(out: &mut String, report: &Report, fixes: Option<&[FixOutcome]>) {
    let omitted = report.omitted();
    if omitted > 0 {
        let _ = writeln!(out, "... and {omitted} more (use --report detailed)\n");
    }

    if !report.suggestions.is_empty() {
        let _ = writeln!(out, "Top suggestions:");
        for row in &report.suggestions {
            let _ = writeln!(
                out,
                "  {:>4}x  {} → {}  ({} file(s))",
                row.count,
                row.from,
                row.to,
                row.files.len()
            );
        }
        out.push('\n');
    }

    let summary = &report.summary;
    let errors = summary.by_severity.get(&Severity::Error).copied().unwrap_or(0);
    let warnings = summary
        .by_severity
        .get(&Severity::Warning)
        .copied()
        .unwrap_or(0);
    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    let _ = writeln!(
        out,
        "{color}Found {errors} error(s), {warnings} warning(s) in {}/{} file(s); {} fixable\x1b[0m",
        summary.files_with_violations, summary.total_files, summary.fixable
    );

    if let Some(fixes) = fixes {
        let applied: usize = fixes.iter().map(|f| f.applied).sum();
        let skipped: usize = fixes.iter().map(|f| f.skipped).sum();
        let written = fixes.iter().filter(|f| f.written).count();
        let _ = writeln!(
            out,
            "Fixed {applied} class(es) in {written} file(s), {skipped} skipped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenlint_core::{
        Category, RawTokenUsage, ReportMode, ScanResult, Suggestion, UsageKind, Violation,
    };

    fn report() -> Report {
        let usage = |token: &str, column| RawTokenUsage {
            file: PathBuf::from("src/App.tsx"),
            line: 3,
            column,
            raw_token: token.to_string(),
            line_context: String::new(),
            literal: "p-4 bg-blue-500".to_string(),
            element_type: None,
            kind: UsageKind::ClassName,
        };
        let violations = vec![
            Violation::new(
                "TL002",
                "no-raw-spacing",
                Category::Spacing,
                Category::Spacing.default_severity(),
                usage("p-4", 18),
            )
            .with_suggestion(Some(Suggestion::exact("p-base"))),
            Violation::new(
                "TL001",
                "no-raw-color",
                Category::Color,
                Category::Color.default_severity(),
                usage("bg-blue-500", 22),
            ),
        ];
        let result =
            ScanResult::from_partitions(vec![(PathBuf::from("src/App.tsx"), violations)], 4);
        Report::build(&result, ReportMode::Summary, 20)
    }

    #[test]
    fn compact_output() {
        insta::assert_snapshot!(render_compact(&report()), @r"
        src/App.tsx:3:18: warning [TL002] non-semantic spacing value `p-4`; use a design token (suggestion: p-base)
        src/App.tsx:3:22: error [TL001] non-semantic color value `bg-blue-500`; use a design token
        ");
    }

    #[test]
    fn json_output_flattens_report() {
        let fixes = [FixOutcome {
            path: PathBuf::from("src/App.tsx"),
            applied: 1,
            skipped: 0,
            written: true,
        }];
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&report(), Some(&fixes)).unwrap()).unwrap();
        assert_eq!(json["summary"]["total_violations"], 2);
        assert_eq!(json["summary"]["by_type"]["color"], 1);
        assert_eq!(json["suggestions"][0]["to"], "p-base");
        assert_eq!(json["fixes"][0]["applied"], 1);
        assert!(render_json(&report(), None).unwrap().find("\"fixes\"").is_none());
    }

    #[test]
    fn text_footer_counts() {
        let text = render_text(&report(), None);
        assert!(text.contains("= help: p-base"));
        assert!(text.contains("p-4 → p-base"));
        assert!(text.contains("Found 1 error(s), 1 warning(s) in 1/4 file(s); 1 fixable"));
    }
}
