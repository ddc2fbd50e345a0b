//! Domain models for wizard answers and field updates.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::DomainError;

/// How long and deep a project runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Lesson,
    Unit,
    Course,
}

impl Scope {
    /// Every scope in catalog order.
    pub const ALL: [Scope; 3] = [Scope::Lesson, Scope::Unit, Scope::Course];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Lesson => "lesson",
            Scope::Unit => "unit",
            Scope::Course => "course",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lesson" => Ok(Scope::Lesson),
            "unit" => Ok(Scope::Unit),
            "course" => Ok(Scope::Course),
            _ => Err(DomainError::UnknownScope(value.to_owned())),
        }
    }
}

/// Answers accumulated across the wizard's steps.
///
/// Only `scope` is interpreted here. Everything else the caller supplies is
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardData {
    #[serde(
        default,
        deserialize_with = "lenient_scope",
        skip_serializing_if = "Option::is_none"
    )]
    pub scope: Option<Scope>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl WizardData {
    pub fn with_scope(scope: Scope) -> Self {
        Self {
            scope: Some(scope),
            ..Self::default()
        }
    }

    /// Write a single field update into the answers.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Scope(scope) => self.scope = Some(scope),
        }
    }
}

// Values outside the enum leave the scope unset rather than rejecting the whole document.
fn lenient_scope<'de, D>(deserializer: D) -> Result<Option<Scope>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|value| value.parse().ok()))
}

/// Names of the wizard fields this crate writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardField {
    Scope,
}

impl WizardField {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardField::Scope => "scope",
        }
    }
}

/// A field name paired with its new value, as handed to the caller's update callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Scope(Scope),
}

impl FieldUpdate {
    pub fn field(&self) -> WizardField {
        match self {
            FieldUpdate::Scope(_) => WizardField::Scope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scope_case_insensitively() {
        assert_eq!("Unit".parse::<Scope>(), Ok(Scope::Unit));
        assert_eq!(" course ".parse::<Scope>(), Ok(Scope::Course));
        assert_eq!(
            "semester".parse::<Scope>(),
            Err(DomainError::UnknownScope("semester".into()))
        );
    }

    #[test]
    fn unknown_scope_in_json_is_treated_as_unset() {
        let data: WizardData =
            serde_json::from_str(r#"{"scope":"semester","title":"Rivers"}"#).unwrap();
        assert_eq!(data.scope, None);
        assert_eq!(data.extra["title"], "Rivers");

        let data: WizardData = serde_json::from_str(r#"{"scope":42}"#).unwrap();
        assert_eq!(data.scope, None);
    }

    #[test]
    fn other_fields_survive_a_round_trip() {
        let data: WizardData =
            serde_json::from_str(r#"{"scope":"unit","grade":7,"title":"Rivers"}"#).unwrap();
        assert_eq!(data.scope, Some(Scope::Unit));

        let encoded = serde_json::to_value(&data).unwrap();
        assert_eq!(encoded["scope"], "unit");
        assert_eq!(encoded["grade"], 7);
        assert_eq!(encoded["title"], "Rivers");
    }

    #[test]
    fn apply_overwrites_scope() {
        let mut data = WizardData::with_scope(Scope::Lesson);
        data.apply(FieldUpdate::Scope(Scope::Course));
        assert_eq!(data.scope, Some(Scope::Course));
        assert_eq!(FieldUpdate::Scope(Scope::Course).field().as_str(), "scope");
    }
}
