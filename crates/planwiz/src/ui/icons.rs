//! Icon sets for catalog entries.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::IconKind;
use crate::domain::errors::DomainError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    #[default]
    Emoji,
    /// Single-width glyphs for terminals without emoji fonts.
    Symbols,
}

impl IconSet {
    pub fn name(&self) -> &'static str {
        match self {
            IconSet::Emoji => "emoji",
            IconSet::Symbols => "symbols",
        }
    }

    pub fn glyph(&self, icon: IconKind) -> &'static str {
        match (self, icon) {
            (IconSet::Emoji, IconKind::Lightbulb) => "💡",
            (IconSet::Emoji, IconKind::Book) => "📚",
            (IconSet::Emoji, IconKind::GraduationCap) => "🎓",
            (IconSet::Symbols, IconKind::Lightbulb) => "◇",
            (IconSet::Symbols, IconKind::Book) => "◈",
            (IconSet::Symbols, IconKind::GraduationCap) => "◆",
        }
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconSet {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "emoji" => Ok(IconSet::Emoji),
            "symbols" => Ok(IconSet::Symbols),
            _ => Err(DomainError::UnknownIconSet(value.to_owned())),
        }
    }
}
