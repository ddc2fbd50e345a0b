//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use serde::{Deserialize, Serialize};

use crate::ui::icons::IconSet;
use crate::ui::theme::ThemeKind;

const DEFAULT_CONFIG: &str = include_str!("../../assets/default-config.toml");
const DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".planwiz/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub appearance: Appearance,
}

/// Presentation settings. Neither value changes how the wizard behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Appearance {
    #[serde(default)]
    theme: Option<ThemeKind>,
    #[serde(default)]
    icons: Option<IconSet>,
}

impl Appearance {
    pub fn theme(&self) -> ThemeKind {
        self.theme.unwrap_or_default()
    }

    pub fn icons(&self) -> IconSet {
        self.icons.unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: ThemeKind) {
        self.theme = Some(theme);
    }

    pub fn set_icons(&mut self, icons: IconSet) {
        self.icons = Some(icons);
    }
}

/// Environment overrides for appearance settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    theme: Option<String>,
    icons: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            theme: env::var("PLANWIZ_THEME").ok(),
            icons: env::var("PLANWIZ_ICONS").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(theme: &str, icons: &str) -> Self {
        Self {
            theme: Some(theme.to_owned()),
            icons: Some(icons.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            tracing::debug!(path = %global_path.display(), "loading user config");
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            tracing::debug!(path = %workspace_path.display(), "loading workspace config");
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        apply_env_overrides(merged, env_overrides)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            appearance: merge_appearance(self.appearance, other.appearance),
        }
    }
}

fn merge_appearance(mut base: Appearance, overlay: Appearance) -> Appearance {
    if let Some(theme) = overlay.theme {
        base.theme = Some(theme);
    }
    if let Some(icons) = overlay.icons {
        base.icons = Some(icons);
    }
    base
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("planwiz/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    let root = find_repo_root(&cwd).unwrap_or(cwd);
    Ok(Some(root.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Result<Config> {
    if let Some(theme) = env.theme {
        let theme = theme.parse::<ThemeKind>().context("invalid PLANWIZ_THEME")?;
        config.appearance.set_theme(theme);
    }
    if let Some(icons) = env.icons {
        let icons = icons.parse::<IconSet>().context("invalid PLANWIZ_ICONS")?;
        config.appearance.set_icons(icons);
    }
    Ok(config)
}
