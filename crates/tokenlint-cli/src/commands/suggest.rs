//! Suggest command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokenlint_core::{
    Category, Classifier, Config, RawTokenUsage, Suggestion, TokenTables, UsageKind, Violation,
};
use tokenlint_rules::{all_rules, analyze_context, MigrationContext};

use crate::config_resolver;
use crate::OutputFormat;

/// What `check` would report for one class.
#[derive(Debug, Serialize)]
struct Resolution {
    class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<MigrationContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<Suggestion>,
}

/// Runs the suggest command.
pub fn run(
    class: &str,
    siblings: &str,
    element: Option<&str>,
    format: OutputFormat,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let source = config_resolver::resolve(Path::new("."), explicit_config);
    let config = config_resolver::load(&source)?;
    let resolution = resolve(class, siblings, element, config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
        _ => print!("{}", render_text(&resolution)),
    }
    Ok(())
}

/// Runs one class through every rule, with `siblings` as its class list.
fn resolve(
    class: &str,
    siblings: &str,
    element: Option<&str>,
    config: Config,
) -> Result<Resolution> {
    let tables = Arc::new(
        TokenTables::from_config(&config.tokens).context("Invalid [tokens] configuration")?,
    );
    let classifier = Classifier::new(all_rules(&tables), config);

    let kind = if class.starts_with("--palette-") {
        UsageKind::PaletteVariable
    } else {
        UsageKind::ClassName
    };
    let literal = siblings
        .split_whitespace()
        .chain(std::iter::once(class))
        .collect::<Vec<_>>()
        .join(" ");
    let usage = RawTokenUsage {
        file: PathBuf::from("<suggest>"),
        line: 1,
        column: 1,
        raw_token: class.to_string(),
        line_context: literal.clone(),
        literal,
        element_type: element.map(str::to_string),
        kind,
    };

    let context = (kind == UsageKind::ClassName).then(|| {
        let classes: Vec<&str> = usage.class_list().collect();
        analyze_context(class, &classes, element)
    });
    let violation: Option<Violation> = classifier.evaluate(usage);

    Ok(match violation {
        Some(v) => Resolution {
            class: class.to_string(),
            context: context.filter(|_| v.category == Category::Color),
            rule: Some(v.rule),
            code: Some(v.code),
            category: Some(v.category),
            suggestion: v.suggestion,
        },
        None => Resolution {
            class: class.to_string(),
            rule: None,
            code: None,
            category: None,
            context: None,
            suggestion: None,
        },
    })
}

fn render_text(r: &Resolution) -> String {
    let mut out = String::new();
    let (Some(rule), Some(code), Some(category)) = (&r.rule, &r.code, r.category) else {
        let _ = writeln!(out, "{}: not a raw utility class", r.class);
        return out;
    };
    let _ = writeln!(out, "{} ({category}, {code} {rule})", r.class);

    if let Some(ctx) = &r.context {
        let mut traits = Vec::new();
        if let Some(component) = ctx.component_type {
            traits.push(component.as_str());
        }
        if ctx.is_interactive {
            traits.push("interactive");
        }
        if ctx.has_hover_state {
            traits.push("hover");
        }
        if ctx.is_dark_mode {
            traits.push("dark");
        }
        if traits.is_empty() {
            traits.push("none");
        }
        let _ = writeln!(out, "  context: {}", traits.join(", "));
    }

    match &r.suggestion {
        Some(Suggestion::Contextual {
            replacement,
            confidence,
            rationale,
            alternatives,
        }) => {
            let _ = writeln!(out, "  suggestion: {replacement} ({confidence} confidence)");
            if !rationale.is_empty() {
                let _ = writeln!(out, "  rationale: {rationale}");
            }
            if !alternatives.is_empty() {
                let _ = writeln!(out, "  alternatives: {}", alternatives.join(", "));
            }
        }
        Some(Suggestion::Exact { replacement }) => {
            let _ = writeln!(out, "  suggestion: {replacement} (exact, fixable)");
        }
        Some(nearest) => {
            let _ = writeln!(out, "  suggestion: {nearest}");
        }
        None => {
            let _ = writeln!(out, "  no suggestion; pick a token by hand");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenlint_rules::ComponentType;

    #[test]
    fn color_uses_sibling_context() {
        let r = resolve("bg-primary-600", "btn px-4", None, Config::default()).unwrap();
        assert_eq!(r.code.as_deref(), Some("TL001"));
        let ctx = r.context.as_ref().expect("color context");
        assert!(ctx.is(ComponentType::Button));
        match &r.suggestion {
            Some(Suggestion::Contextual { replacement, .. }) => {
                assert_eq!(replacement, "bg-interactive-primary");
            }
            other => panic!("unexpected suggestion: {other:?}"),
        }
    }

    #[test]
    fn non_color_classes_have_no_context() {
        let r = resolve("p-4", "", None, Config::default()).unwrap();
        assert_eq!(r.category, Some(Category::Spacing));
        assert!(r.context.is_none());
        assert_eq!(r.suggestion, Some(Suggestion::exact("p-base")));
        assert!(render_text(&r).contains("p-base (exact, fixable)"));
    }

    #[test]
    fn every_rule_is_consulted() {
        let r = resolve("shadow-xl", "", None, Config::default()).unwrap();
        assert_eq!(r.rule.as_deref(), Some("no-raw-shadow"));
    }

    #[test]
    fn semantic_classes_pass() {
        let r = resolve("bg-surface", "", None, Config::default()).unwrap();
        assert!(r.rule.is_none());
        assert_eq!(render_text(&r), "bg-surface: not a raw utility class\n");
    }

    #[test]
    fn palette_variables_have_no_suggestion() {
        let r = resolve("--palette-blue-500", "", None, Config::default()).unwrap();
        assert_eq!(r.rule.as_deref(), Some("palette-variable"));
        assert!(r.suggestion.is_none());
        assert!(r.context.is_none());
    }
}
