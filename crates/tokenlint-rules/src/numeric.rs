//! Nearest-neighbor resolution of numeric scale classes.
//!
//! Shared by the spacing and sizing rules. A class such as `hover:-m-2` is
//! parsed into its modifier chain, sign, prefix and value; the value is then
//! looked up in a [`ScaleTable`].

use tokenlint_core::utils::{
    is_exempt_value, parse_scale_number, split_value, strip_known_modifiers,
};
use tokenlint_core::{NearestCandidate, ScaleEntry, ScaleTable, Suggestion};

/// Maximum number of candidates in a nearest suggestion.
pub const MAX_CANDIDATES: usize = 2;

/// A parsed numeric utility class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericClass<'a> {
    /// Modifier chain including the trailing colon (`"hover:"`), or empty.
    pub modifiers: &'a str,
    /// Whether the class carried a leading `-`.
    pub negative: bool,
    /// Utility prefix (`"p"`, `"gap-x"`).
    pub prefix: &'a str,
    /// Raw value as written (`"4"`, `"0.5"`).
    pub value: &'a str,
    /// Parsed value.
    pub number: f64,
}

/// Parses `token` as `[modifiers][-]prefix-value` for one of `prefixes`.
///
/// A leading `-` is only accepted for prefixes listed in `negatable`. Values
/// in the exemption set, fractions, keywords and bracketed values yield
/// `None`.
#[must_use]
pub fn parse_numeric_class<'a, S: AsRef<str>>(
    token: &'a str,
    modifiers: &[S],
    prefixes: &[&str],
    negatable: &[&str],
) -> Option<NumericClass<'a>> {
    let (mods, base) = strip_known_modifiers(token, modifiers);
    let (negative, base) = match base.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, base),
    };
    let (prefix, value) = split_value(base)?;
    if !prefixes.contains(&prefix) || (negative && !negatable.contains(&prefix)) {
        return None;
    }
    if is_exempt_value(value) {
        return None;
    }
    let number = parse_scale_number(value)?;
    Some(NumericClass {
        modifiers: mods,
        negative,
        prefix,
        value,
        number,
    })
}

impl NumericClass<'_> {
    /// Renders `[modifiers][-]prefix-name`.
    #[must_use]
    pub fn with_name(&self, name: &str) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{}{sign}{}-{name}", self.modifiers, self.prefix)
    }
}

/// Entries ordered by rem distance from `rem`, closest first.
///
/// The sort is stable, so ties keep scale order. Zero-distance entries are
/// dropped.
#[must_use]
pub fn nearest_entries(table: &ScaleTable, rem: f64, limit: usize) -> Vec<(&ScaleEntry, f64)> {
    let mut ranked: Vec<(&ScaleEntry, f64)> = table
        .entries()
        .iter()
        .map(|e| (e, (e.rem - rem).abs()))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.retain(|(_, d)| *d > 0.0);
    ranked.truncate(limit);
    ranked
}

/// Resolves a parsed class against a scale.
///
/// An exact key hit gives an exact suggestion; otherwise the value is
/// converted to rem and the closest entries are offered.
#[must_use]
pub fn resolve(table: &ScaleTable, class: &NumericClass<'_>) -> Option<Suggestion> {
    if let Some(entry) = table.get(class.value) {
        return Some(Suggestion::exact(class.with_name(&entry.name)));
    }

    let rem = class.number * table.unit_rem();
    let candidates: Vec<NearestCandidate> = nearest_entries(table, rem, MAX_CANDIDATES)
        .into_iter()
        .map(|(entry, distance)| NearestCandidate {
            replacement: class.with_name(&entry.name),
            rem: entry.rem,
            distance,
        })
        .collect();

    if candidates.is_empty() {
        None
    } else {
        Some(Suggestion::Nearest { candidates })
    }
}
