//! Color themes and the selection style decision.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Abstract visual treatment of a selectable card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Selected,
    Neutral,
}

/// Decide the treatment for a card from its selection flag alone.
pub fn selection_style(is_selected: bool) -> StyleToken {
    if is_selected {
        StyleToken::Selected
    } else {
        StyleToken::Neutral
    }
}

/// Available themes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Classic,
    Sunrise,
}

impl ThemeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Classic => "classic",
            ThemeKind::Sunrise => "sunrise",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Classic => Theme::classic(),
            ThemeKind::Sunrise => Theme::sunrise(),
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ThemeKind::Classic),
            "sunrise" => Ok(ThemeKind::Sunrise),
            _ => Err(DomainError::UnknownTheme(value.to_owned())),
        }
    }
}

/// Concrete colors for the wizard screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub tip: Color,
}

/// Resolved styles for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub border: Style,
    pub title: Style,
    pub icon: Style,
    pub marker: &'static str,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            accent: Color::Cyan,
            border: Color::DarkGray,
            text: Color::White,
            muted: Color::Gray,
            error: Color::Red,
            tip: Color::Blue,
        }
    }

    pub fn sunrise() -> Self {
        Self {
            accent: Color::Rgb(255, 166, 43),
            border: Color::Rgb(96, 84, 72),
            text: Color::Rgb(250, 240, 230),
            muted: Color::Rgb(170, 156, 140),
            error: Color::Rgb(235, 87, 87),
            tip: Color::Rgb(242, 201, 76),
        }
    }

    pub fn card_style(&self, token: StyleToken) -> CardStyle {
        match token {
            StyleToken::Selected => CardStyle {
                border: Style::default().fg(self.accent),
                title: Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                icon: Style::default().fg(self.accent),
                marker: "●",
            },
            StyleToken::Neutral => CardStyle {
                border: Style::default().fg(self.border),
                title: Style::default().fg(self.text),
                icon: Style::default().fg(self.muted),
                marker: "○",
            },
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn tip_style(&self) -> Style {
        Style::default().fg(self.tip).add_modifier(Modifier::ITALIC)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
