//! The fixed catalog of scope options offered by the wizard.

use serde::Serialize;

use crate::domain::model::Scope;

/// Symbolic icon reference; the active icon set decides how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Lightbulb,
    Book,
    GraduationCap,
}

/// One selectable scope entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeOption {
    pub value: Scope,
    pub label: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub examples: &'static [&'static str],
}

static CATALOG: [ScopeOption; 3] = [
    ScopeOption {
        value: Scope::Lesson,
        label: "Lesson",
        duration: "1-3 class periods",
        description: "A focused project built around a single skill or concept.",
        icon: IconKind::Lightbulb,
        examples: &[
            "Design a persuasive poster",
            "Build a simple circuit",
            "Retell a myth as a comic strip",
        ],
    },
    ScopeOption {
        value: Scope::Unit,
        label: "Unit",
        duration: "2-6 weeks",
        description: "A multi-part project that ties several lessons to one driving question.",
        icon: IconKind::Book,
        examples: &[
            "Plan a community garden",
            "Produce a local history podcast",
            "Run a classroom science fair",
        ],
    },
    ScopeOption {
        value: Scope::Course,
        label: "Course",
        duration: "A full semester or year",
        description: "A long-running project that frames the whole course and grows over time.",
        icon: IconKind::GraduationCap,
        examples: &[
            "Launch a student-run business",
            "Publish a class magazine",
            "Redesign the school grounds",
        ],
    },
];

/// Static note shown beneath the options.
pub const SCOPE_TIP: &str =
    "Tip: Not sure? Start small. A lesson-sized project can always grow into something bigger.";

/// All scope options in display order.
pub fn catalog() -> &'static [ScopeOption] {
    &CATALOG
}

pub fn option_for(scope: Scope) -> &'static ScopeOption {
    match scope {
        Scope::Lesson => &CATALOG[0],
        Scope::Unit => &CATALOG[1],
        Scope::Course => &CATALOG[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_scope_in_fixed_order() {
        let values: Vec<Scope> = catalog().iter().map(|option| option.value).collect();
        assert_eq!(values, Scope::ALL);
    }

    #[test]
    fn every_entry_has_examples() {
        assert!(catalog().iter().all(|option| !option.examples.is_empty()));
    }

    #[test]
    fn lookup_matches_catalog_entry() {
        for scope in Scope::ALL {
            assert_eq!(option_for(scope).value, scope);
        }
    }
}
