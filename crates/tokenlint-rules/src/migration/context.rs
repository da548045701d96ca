//! Context derived from the class list a color token appears in.

use serde::Serialize;

/// Component family guessed from sibling classes or the element tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// `button`, `btn`.
    Button,
    /// `card`.
    Card,
    /// `badge`.
    Badge,
    /// `input`, `form`.
    Input,
    /// `alert`, `notification`.
    Alert,
    /// `link`, or an `<a>` element.
    Link,
}

impl ComponentType {
    /// Families in detection priority order.
    pub const PRIORITY: [Self; 6] = [
        Self::Button,
        Self::Card,
        Self::Badge,
        Self::Input,
        Self::Alert,
        Self::Link,
    ];

    /// Substrings of a class name that identify this family.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Button => &["button", "btn"],
            Self::Card => &["card"],
            Self::Badge => &["badge"],
            Self::Input => &["input", "form"],
            Self::Alert => &["alert", "notification"],
            Self::Link => &["link"],
        }
    }

    /// Element tags that identify this family.
    #[must_use]
    pub fn elements(self) -> &'static [&'static str] {
        match self {
            Self::Button => &["button"],
            Self::Input => &["input", "textarea", "select"],
            Self::Link => &["a"],
            Self::Card | Self::Badge | Self::Alert => &[],
        }
    }

    /// Returns the lowercase name of this family.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Card => "card",
            Self::Badge => "badge",
            Self::Input => "input",
            Self::Alert => "alert",
            Self::Link => "link",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is known about where a color class is used.
///
/// Lives for a single resolution call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationContext {
    /// Detected component family.
    pub component_type: Option<ComponentType>,
    /// Any `hover:`, `focus:`, `active:` or `cursor-pointer` sibling.
    pub is_interactive: bool,
    /// A `dark:` prefix on the target or any sibling.
    pub is_dark_mode: bool,
    /// Any `hover:` sibling.
    pub has_hover_state: bool,
    /// Element tag the class list is attached to.
    pub parent_element: Option<String>,
}

impl MigrationContext {
    /// Context with only a component family set.
    #[must_use]
    pub fn component(component_type: ComponentType) -> Self {
        Self {
            component_type: Some(component_type),
            ..Self::default()
        }
    }

    /// Returns true if the detected family is `component_type`.
    #[must_use]
    pub fn is(&self, component_type: ComponentType) -> bool {
        self.component_type == Some(component_type)
    }
}

/// Utility classes that contain a family keyword by accident
/// (`transform` contains `form`).
pub const KEYWORD_EXCLUSIONS: &[&str] = &["transform", "transform-gpu", "transform-none"];

/// Derives the context for `class` from its sibling classes and element tag.
///
/// The component family is the first family, in [`ComponentType::PRIORITY`]
/// order, with a keyword contained in any sibling (`btn-primary`,
/// `submitButton`, `cardHeader`) or a matching element tag. Siblings listed in
/// [`KEYWORD_EXCLUSIONS`] are skipped.
#[must_use]
pub fn analyze_context<S: AsRef<str>>(
    class: &str,
    siblings: &[S],
    element_type: Option<&str>,
) -> MigrationContext {
    let element = element_type.map(str::to_ascii_lowercase);
    let lowered: Vec<String> = siblings
        .iter()
        .map(|s| s.as_ref().to_ascii_lowercase())
        .filter(|s| !KEYWORD_EXCLUSIONS.contains(&s.as_str()))
        .collect();
    let component_type = ComponentType::PRIORITY.into_iter().find(|family| {
        let by_class = lowered
            .iter()
            .any(|s| family.keywords().iter().any(|k| s.contains(k)));
        let by_element = element
            .as_deref()
            .is_some_and(|e| family.elements().contains(&e));
        by_class || by_element
    });

    let is_interactive = siblings.iter().any(|s| {
        let s = s.as_ref();
        s.starts_with("hover:")
            || s.starts_with("focus:")
            || s.starts_with("active:")
            || s == "cursor-pointer"
    });
    let is_dark_mode =
        class.starts_with("dark:") || siblings.iter().any(|s| s.as_ref().starts_with("dark:"));
    let has_hover_state = siblings.iter().any(|s| s.as_ref().starts_with("hover:"));

    MigrationContext {
        component_type,
        is_interactive,
        is_dark_mode,
        has_hover_state,
        parent_element: element_type.map(str::to_string),
    }
}
