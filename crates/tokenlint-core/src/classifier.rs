//! Maps raw token usages to categories through an ordered rule list.

use crate::config::Config;
use crate::extractor;
use crate::rule::{Rule, RuleBox};
use crate::source::SourceFile;
use crate::types::{Category, RawTokenUsage, Severity, UsageKind, Violation};
use crate::utils::allowance::check_allow_with_reason;
use tracing::debug;

/// Rule name reported for `--palette-*` custom property usages.
pub const PALETTE_VARIABLE_RULE: &str = "palette-variable";
/// Rule code reported for `--palette-*` custom property usages.
pub const PALETTE_VARIABLE_CODE: &str = "TL009";

/// Ordered list of category rules.
///
/// The first rule whose predicate matches claims the token, so registration
/// order is category priority. Palette-variable usages never reach the
/// predicates; they are always color errors without a suggestion.
pub struct Classifier {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Classifier {
    /// Creates a classifier over `rules`, in priority order.
    #[must_use]
    pub fn new(rules: Vec<RuleBox>, config: Config) -> Self {
        Self { rules, config }
    }

    /// Registered rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Returns the first enabled rule whose predicate matches `token`.
    #[must_use]
    pub fn classify(&self, token: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .filter(|r| self.config.is_rule_enabled(r.name(), r.category()))
            .find(|r| r.matches(token))
            .map(|r| r.as_ref())
    }

    /// Evaluates one usage; `None` means the token is not a violation.
    #[must_use]
    pub fn evaluate(&self, usage: RawTokenUsage) -> Option<Violation> {
        if usage.kind == UsageKind::PaletteVariable {
            if !self
                .config
                .is_rule_enabled(PALETTE_VARIABLE_RULE, Category::Color)
            {
                return None;
            }
            let severity = self
                .config
                .rule_severity(PALETTE_VARIABLE_RULE, Category::Color)
                .unwrap_or(Severity::Error);
            return Some(Violation::new(
                PALETTE_VARIABLE_CODE,
                PALETTE_VARIABLE_RULE,
                Category::Color,
                severity,
                usage,
            ));
        }

        let rule = self.classify(&usage.raw_token)?;
        let severity = self
            .config
            .rule_severity(rule.name(), rule.category())
            .unwrap_or_else(|| rule.default_severity());
        let suggestion = rule.suggest(&usage);
        Some(
            Violation::new(rule.code(), rule.name(), rule.category(), severity, usage)
                .with_suggestion(suggestion),
        )
    }

    /// Extracts and evaluates every usage in a file, dropping violations
    /// covered by an allowance directive.
    #[must_use]
    pub fn check_file(&self, file: &SourceFile) -> Vec<Violation> {
        let lines: Vec<&str> = file.text.split('\n').collect();
        extractor::extract(file)
            .filter_map(|usage| self.evaluate(usage))
            .filter(|v| {
                let names = [v.rule.as_str(), v.category.as_str()];
                let allowed = check_allow_with_reason(&lines, v.usage.line, &names);
                if allowed.is_allowed() {
                    debug!(
                        "Allowed {} at {}:{} ({})",
                        v.usage.raw_token,
                        v.usage.file.display(),
                        v.usage.line,
                        allowed.reason().unwrap_or("no reason")
                    );
                }
                !allowed.is_allowed()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Suggestion;

    struct PrefixRule {
        name: &'static str,
        prefix: &'static str,
        category: Category,
    }

    impl Rule for PrefixRule {
        fn name(&self) -> &'static str {
            self.name
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn category(&self) -> Category {
            self.category
        }
        fn matches(&self, token: &str) -> bool {
            token.starts_with(self.prefix)
        }
        fn suggest(&self, usage: &RawTokenUsage) -> Option<Suggestion> {
            Some(Suggestion::exact(format!("{}-token", usage.raw_token)))
        }
    }

    fn classifier(config: Config) -> Classifier {
        let rules: Vec<RuleBox> = vec![
            Box::new(PrefixRule {
                name: "colors",
                prefix: "from-",
                category: Category::Color,
            }),
            Box::new(PrefixRule {
                name: "gradients",
                prefix: "from-",
                category: Category::Gradient,
            }),
        ];
        Classifier::new(rules, config)
    }

    #[test]
    fn test_first_registered_rule_wins() {
        let c = classifier(Config::default());
        assert_eq!(c.classify("from-blue-500").map(|r| r.name()), Some("colors"));
        assert!(c.classify("flex").is_none());
    }

    #[test]
    fn test_disabled_rule_falls_through() {
        let config = Config::parse("[rules.color]\nenabled = false").unwrap();
        let c = classifier(config);
        assert_eq!(c.classify("from-blue-500").map(|r| r.name()), Some("gradients"));
    }

    #[test]
    fn test_palette_variable_and_allowance() {
        let c = classifier(Config::default());
        let file = SourceFile::new(
            "a.css",
            "a { color: var(--palette-red-500); }\n/* tokenlint: allow(color) */\nb { color: var(--palette-red-500); }",
        );
        let violations = c.check_file(&file);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, PALETTE_VARIABLE_RULE);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].suggestion.is_none());
    }

    #[test]
    fn test_severity_override() {
        let config = Config::parse("[rules.colors]\nseverity = \"warning\"").unwrap();
        let c = classifier(config);
        let violations = c.check_file(&SourceFile::new("a.tsx", "x = \"from-red-500\""));
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(
            violations[0].suggestion,
            Some(Suggestion::exact("from-red-500-token"))
        );
    }
}
