//! Integration test: scan → classify → suggest → aggregate → fix over real
//! files in a temporary project.

use std::path::Path;
use std::sync::Arc;
use tokenlint_core::{
    apply_fixes, Category, Config, Report, ReportMode, ScanResult, Scanner, Severity, SourceFile,
    TokenTables,
};
use tokenlint_rules::{all_rules, reporting_rules, rules_from_config};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture dir");
    }
    std::fs::write(path, content).expect("write fixture");
}

fn scan_with(root: &Path, config: Config) -> ScanResult {
    let rules = rules_from_config(&config).expect("rules should build");
    Scanner::builder()
        .root(root)
        .config(config)
        .rules(rules)
        .build()
        .expect("scanner should build")
        .scan()
        .expect("scan should succeed")
}

fn scan(root: &Path) -> ScanResult {
    scan_with(root, Config::default())
}

fn scan_text(text: &str) -> ScanResult {
    let tables = Arc::new(TokenTables::builtin());
    let scanner = Scanner::builder()
        .root(".")
        .rules(reporting_rules(&tables))
        .build()
        .expect("scanner should build");
    scanner.scan_sources(&[SourceFile::new("src/App.tsx", text)])
}

fn tokens(result: &ScanResult) -> Vec<&str> {
    result
        .violations
        .iter()
        .map(|v| v.usage.raw_token.as_str())
        .collect()
}

// ── Classification ──

#[test]
fn exempt_spacing_values_are_not_violations() {
    let result = scan_text(r#"<div className="p-0 gap-0 m-auto p-px w-1/2 p-[20px]" />"#);
    assert!(result.violations.is_empty(), "{:?}", tokens(&result));
}

#[test]
fn sizing_range_is_closed_four_to_sixteen() {
    let result = scan_text(
        r#"<div className="w-48 w-64 w-96 h-24 h-32 h-1 h-2 h-3 w-0.5 h-4 w-16 min-w-10" />"#,
    );
    assert_eq!(tokens(&result), vec!["h-4", "w-16", "min-w-10"]);
    assert!(result
        .violations
        .iter()
        .all(|v| v.category == Category::Sizing && v.severity == Severity::Warning));
}

#[test]
fn color_wins_over_later_categories() {
    let tables = Arc::new(TokenTables::builtin());
    let scanner = Scanner::builder()
        .root(".")
        .rules(all_rules(&tables))
        .build()
        .unwrap();
    let result = scanner.scan_sources(&[SourceFile::new(
        "src/Hero.tsx",
        r#"<section className="bg-gradient-to-r from-blue-500 to-white shadow-xl border-2" />"#,
    )]);
    let categories: Vec<(&str, Category)> = result
        .violations
        .iter()
        .map(|v| (v.usage.raw_token.as_str(), v.category))
        .collect();
    assert_eq!(
        categories,
        vec![
            ("bg-gradient-to-r", Category::Gradient),
            ("from-blue-500", Category::Color),
            ("to-white", Category::Color),
            ("shadow-xl", Category::Shadow),
            ("border-2", Category::Border),
        ]
    );
}

#[test]
fn palette_variables_are_color_errors() {
    let result = scan_text("const style = { color: 'var(--palette-blue-500)' };");
    let v = result
        .violations
        .iter()
        .find(|v| v.rule == "palette-variable")
        .expect("palette variable reported");
    assert_eq!(v.category, Category::Color);
    assert_eq!(v.severity, Severity::Error);
    assert!(v.suggestion.is_none());
}

// ── Suggestions ──

#[test]
fn spacing_suggestions_are_exact_or_nearest() {
    let result = scan_text(r#"<div className="p-4 gap-2 -m-2 hover:p-4 p-5" />"#);
    let rendered: Vec<String> = result
        .violations
        .iter()
        .map(|v| v.suggestion.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "p-base",
            "gap-sm",
            "-m-sm",
            "hover:p-base",
            "nearest: p-base (1rem) or p-lg (1.5rem)",
        ]
    );
}

#[test]
fn color_suggestion_uses_the_class_list_context() {
    let result = scan_text(
        r#"<span className="btn bg-primary-600 text-white hover:bg-primary-700" />"#,
    );
    let by_token: Vec<(&str, String, bool)> = result
        .violations
        .iter()
        .map(|v| {
            let s = v.suggestion.as_ref().expect("color suggestion");
            (v.usage.raw_token.as_str(), s.to_string(), s.is_autofix_eligible())
        })
        .collect();
    assert_eq!(by_token[0], ("bg-primary-600", "bg-interactive-primary".to_string(), false));
    assert_eq!(by_token[1], ("text-white", "text-inverse".to_string(), true));
}

#[test]
fn token_overrides_change_suggestions() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/Card.tsx", r#"<div className="p-5" />"#);
    let config = Config::parse(
        r#"
[tokens.spacing.entries]
"5" = { name = "cozy", rem = 1.25 }
"#,
    )
    .unwrap();
    let result = scan_with(dir.path(), config);
    assert_eq!(
        result.violations[0].suggestion.as_ref().map(ToString::to_string),
        Some("p-cozy".to_string())
    );
}

// ── Configuration ──

#[test]
fn disabled_rules_and_severity_overrides() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/App.tsx",
        r#"<div className="p-4 bg-blue-500 h-8" />"#,
    );
    let config = Config::parse(
        r#"
[rules.no-raw-spacing]
enabled = false

[rules.color]
severity = "warning"
"#,
    )
    .unwrap();
    let result = scan_with(dir.path(), config);
    assert_eq!(tokens(&result), vec!["bg-blue-500", "h-8"]);
    assert!(!result.has_errors());
}

#[test]
fn allowance_directives_suppress_violations() {
    let result = scan_text(
        r#"{/* tokenlint: allow(no-raw-color) reason="brand hero" */}
<div className="bg-blue-500 p-4" />
<div className="bg-blue-500" /> {/* tokenlint: allow(all) */}
<hr />
<div className="bg-blue-500" />"#,
    );
    let positions: Vec<(usize, &str)> = result
        .violations
        .iter()
        .map(|v| (v.usage.line, v.usage.raw_token.as_str()))
        .collect();
    assert_eq!(positions, vec![(2, "p-4"), (5, "bg-blue-500")]);
}

// ── Aggregation ──

#[test]
fn report_mode_caps_the_violation_list() {
    let dir = tempfile::tempdir().unwrap();
    let palettes = [
        "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
        "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    ];
    let body: String = palettes
        .iter()
        .map(|p| format!("<div className=\"bg-{p}-500\" />\n"))
        .collect();
    write(dir.path(), "src/Swatches.tsx", &body);

    let result = scan(dir.path());
    let summary = Report::build(&result, ReportMode::Summary, 20);
    assert_eq!(summary.summary.total_violations, 20);
    assert_eq!(summary.violations.len(), 10);
    assert_eq!(summary.omitted(), 10);

    let detailed = Report::build(&result, ReportMode::Detailed, 20);
    assert_eq!(detailed.violations.len(), 20);
    assert_eq!(detailed.summary.by_type.get(&Category::Color), Some(&20));
}

#[test]
fn suggestion_table_ranks_across_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/A.tsx", r#"<div className="p-4 p-4 gap-2" />"#);
    write(dir.path(), "src/B.tsx", r#"<div className="p-4" />"#);
    let report = Report::build(&scan(dir.path()), ReportMode::Detailed, 20);
    let top = &report.suggestions[0];
    assert_eq!((top.from.as_str(), top.to.as_str(), top.count), ("p-4", "p-base", 3));
    assert_eq!(top.files.len(), 2);
    assert_eq!(report.summary.files_with_violations, 2);
}

#[test]
fn scanning_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/A.tsx", r#"<button className="bg-primary-600 px-3 h-10" />"#);
    write(dir.path(), "src/B.vue", r#"<div class="text-gray-500 mt-5"></div>"#);
    assert_eq!(scan(dir.path()), scan(dir.path()));
}

// ── Autofix ──

#[test]
fn autofix_rewrites_exact_matches_only() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/A.tsx", "export const A = () => <div className=\"p-4 gap-2\" />;\n");
    write(dir.path(), "src/B.tsx", "export const B = () => <div className=\"p-5\" />;\n");

    // B.tsx only has a nearest suggestion, so it is not even visited.
    let outcomes = apply_fixes(&scan(dir.path())).expect("fixes should apply");
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].path.ends_with("src/A.tsx"));
    assert_eq!((outcomes[0].applied, outcomes[0].written), (2, true));

    let fixed = std::fs::read_to_string(dir.path().join("src/A.tsx")).unwrap();
    insta::assert_snapshot!(fixed.trim_end(), @r#"export const A = () => <div className="p-base gap-sm" />;"#);
    assert!(fixed.ends_with('\n'));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("src/B.tsx")).unwrap(),
        "export const B = () => <div className=\"p-5\" />;\n"
    );

    let rescan = scan(dir.path());
    assert_eq!(tokens(&rescan), vec!["p-5"]);
    assert_eq!(rescan.fixable_count(), 0);
}

#[test]
fn autofix_keeps_crlf_and_fixes_repeats() {
    let dir = tempfile::tempdir().unwrap();
    let original = "a = \"p-4 p-4 hover:p-4\"\r\nb = `bg-white -m-2`\r\n";
    write(dir.path(), "src/a.ts", original);

    apply_fixes(&scan(dir.path())).unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("src/a.ts")).unwrap(),
        "a = \"p-base p-base hover:p-base\"\r\nb = `bg-surface -m-sm`\r\n"
    );
}

#[test]
fn autofix_of_nested_literal_touches_only_that_occurrence() {
    let dir = tempfile::tempdir().unwrap();
    let original = "const c = `a \"b p-4 c\" d`; // see p-4 docs\n<p>p-4 stays</p>\n";
    write(dir.path(), "src/nested.tsx", original);

    let result = scan(dir.path());
    let positions: Vec<(usize, usize, &str)> = result
        .violations
        .iter()
        .map(|v| (v.usage.line, v.usage.column, v.usage.raw_token.as_str()))
        .collect();
    assert_eq!(positions, vec![(1, 17, "p-4"), (1, 17, "p-4")]);

    let outcomes = apply_fixes(&result).unwrap();
    assert_eq!((outcomes[0].applied, outcomes[0].skipped), (1, 0));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("src/nested.tsx")).unwrap(),
        "const c = `a \"b p-base c\" d`; // see p-4 docs\n<p>p-4 stays</p>\n"
    );
}
