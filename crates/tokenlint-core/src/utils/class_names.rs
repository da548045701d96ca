//! Helpers for taking utility class names apart.

/// Values that never count as raw scale numbers.
pub const EXEMPT_VALUES: &[&str] = &[
    "0", "px", "auto", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit", "none",
];

/// Modifiers stripped before category predicates run, unless configured otherwise.
pub const DEFAULT_MODIFIERS: &[&str] =
    &["dark", "hover", "focus", "active", "disabled", "group-hover"];

/// Splits a leading chain of known modifiers off a class name.
///
/// Returns `(modifiers, base)` where `modifiers` keeps its trailing colon, so
/// `modifiers + base == token` always holds.
///
/// ```ignore
/// assert_eq!(strip_known_modifiers("dark:hover:bg-white", &known), ("dark:hover:", "bg-white"));
/// assert_eq!(strip_known_modifiers("md:p-4", &known), ("", "md:p-4"));
/// ```
#[must_use]
pub fn strip_known_modifiers<'a, S: AsRef<str>>(
    token: &'a str,
    known: &[S],
) -> (&'a str, &'a str) {
    let mut end = 0;
    while let Some(idx) = token[end..].find(':') {
        let segment = &token[end..end + idx];
        if !known.iter().any(|m| m.as_ref() == segment) {
            break;
        }
        end += idx + 1;
    }
    token.split_at(end)
}

/// Splits any leading chain of `word:` modifiers off a class name.
///
/// A segment counts as a modifier when it is non-empty and only contains
/// ASCII alphanumerics, `-` or `_`.
#[must_use]
pub fn strip_any_modifiers(token: &str) -> (&str, &str) {
    let mut end = 0;
    while let Some(idx) = token[end..].find(':') {
        let segment = &token[end..end + idx];
        let is_word = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_word {
            break;
        }
        end += idx + 1;
    }
    token.split_at(end)
}

/// Parses an integer or one-decimal scale value (`4`, `2.5`).
///
/// Fractions, bracketed arbitrary values and keywords return `None`.
#[must_use]
pub fn parse_scale_number(value: &str) -> Option<f64> {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if frac.len() != 1 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    value.parse().ok()
}

/// Returns true if a scale value is in the shared exemption set.
#[must_use]
pub fn is_exempt_value(value: &str) -> bool {
    EXEMPT_VALUES.contains(&value)
}

/// Splits `prefix-value` at the last dash.
#[must_use]
pub fn split_value(base: &str) -> Option<(&str, &str)> {
    base.rsplit_once('-')
        .filter(|(prefix, value)| !prefix.is_empty() && !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_known_modifiers() {
        assert_eq!(strip_known_modifiers("hover:p-4", DEFAULT_MODIFIERS), ("hover:", "p-4"));
        assert_eq!(
            strip_known_modifiers("dark:group-hover:bg-white", DEFAULT_MODIFIERS),
            ("dark:group-hover:", "bg-white")
        );
        assert_eq!(strip_known_modifiers("md:p-4", DEFAULT_MODIFIERS), ("", "md:p-4"));
        assert_eq!(strip_known_modifiers("p-4", DEFAULT_MODIFIERS), ("", "p-4"));
    }

    #[test]
    fn test_strip_any_modifiers() {
        assert_eq!(strip_any_modifiers("md:hover:shadow-xl"), ("md:hover:", "shadow-xl"));
        assert_eq!(strip_any_modifiers("bg-[url(a:b)]"), ("", "bg-[url(a:b)]"));
        assert_eq!(strip_any_modifiers(":border-2"), ("", ":border-2"));
    }

    #[test]
    fn test_parse_scale_number() {
        assert_eq!(parse_scale_number("4"), Some(4.0));
        assert_eq!(parse_scale_number("2.5"), Some(2.5));
        assert_eq!(parse_scale_number("2.25"), None);
        assert_eq!(parse_scale_number("1/2"), None);
        assert_eq!(parse_scale_number("[20px]"), None);
        assert_eq!(parse_scale_number("px"), None);
        assert_eq!(parse_scale_number(".5"), None);
    }

    #[test]
    fn test_split_value() {
        assert_eq!(split_value("space-x-4"), Some(("space-x", "4")));
        assert_eq!(split_value("p-0.5"), Some(("p", "0.5")));
        assert_eq!(split_value("flex"), None);
        assert_eq!(split_value("p-"), None);
    }
}
