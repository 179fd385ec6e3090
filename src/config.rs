//! src/config.rs
//!
//! Router configuration: panel set, home panel, history policy and input
//! bindings. Loaded from a TOML file or taken from a built-in preset.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, RouterError};
use crate::input::{is_reserved, parse_key};
use crate::router::HistoryPolicy;

/// Panel identifier. Stored lowercase so commands match regardless of case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct PanelId(String);

impl PanelId {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Reachable through the command grammar: one non-empty word.
    pub fn is_addressable(&self) -> bool {
        !self.0.is_empty() && !self.0.chars().any(char::is_whitespace)
    }
}

impl From<String> for PanelId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    pub id: PanelId,
    /// Heading shown on the panel; defaults to the id.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    /// Declared but never wired to a handle.
    #[serde(default)]
    pub unassigned: bool,
}

impl PanelConfig {
    fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: PanelId::new(id),
            title: Some(title.to_string()),
            body: body.to_string(),
            unassigned: false,
        }
    }

    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    pub home: PanelId,
    #[serde(default)]
    pub policy: HistoryPolicy,
    pub panels: Vec<PanelConfig>,
    /// Key names that trigger back navigation (`Esc`, `Backspace`, `Left`,
    /// or a single character).
    #[serde(default = "default_back_keys")]
    pub back_keys: Vec<String>,
    /// Right mouse button goes back.
    #[serde(default = "default_pointer_back")]
    pub pointer_back: bool,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Bind address of the remote control server; disabled when absent.
    #[serde(default)]
    pub remote: Option<String>,
}

fn default_back_keys() -> Vec<String> {
    vec!["Esc".to_string(), "Backspace".to_string()]
}

fn default_pointer_back() -> bool {
    true
}

impl RouterConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panels.is_empty() {
            return Err(RouterError::EmptyPanelSet.into());
        }
        for id in self.panels.iter().map(|p| &p.id).chain([&self.home]) {
            if !id.is_addressable() {
                return Err(ConfigError::InvalidPanelId(id.to_string()));
            }
        }
        for (i, panel) in self.panels.iter().enumerate() {
            if self.panels[..i].iter().any(|p| p.id == panel.id) {
                return Err(RouterError::DuplicatePanel(panel.id.to_string()).into());
            }
        }
        if !self.panels.iter().any(|p| p.id == self.home) {
            return Err(RouterError::UnknownPanel(self.home.to_string()).into());
        }
        for key in &self.back_keys {
            if is_reserved(parse_key(key)?) {
                return Err(ConfigError::ReservedKey(key.clone()));
            }
        }
        Ok(())
    }
}

/// Built-in panel sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Crafting flow: selection, materials, puzzle, success.
    Alchemy,
    /// Top-level game pages: main, alchemy, commission, save, shop.
    Pages,
}

impl Preset {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_lowercase().as_str() {
            "alchemy" => Ok(Preset::Alchemy),
            "pages" => Ok(Preset::Pages),
            _ => Err(ConfigError::UnknownPreset(name.to_string())),
        }
    }

    pub fn config(self) -> RouterConfig {
        match self {
            Preset::Alchemy => RouterConfig {
                home: PanelId::new("selection"),
                policy: HistoryPolicy::PushPrevious,
                panels: vec![
                    PanelConfig::new("selection", "Selection", "Pick a recipe to brew."),
                    PanelConfig::new("materials", "Materials", "Gather the materials the recipe calls for."),
                    PanelConfig::new("puzzle", "Puzzle", "Arrange the elements on the grid."),
                    PanelConfig::new("success", "Success", "The brew is complete."),
                ],
                back_keys: default_back_keys(),
                pointer_back: true,
                log_file: None,
                remote: None,
            },
            Preset::Pages => RouterConfig {
                home: PanelId::new("main"),
                policy: HistoryPolicy::PushTarget,
                panels: vec![
                    PanelConfig::new("main", "Main", "Welcome back to the workshop."),
                    PanelConfig::new("alchemy", "Alchemy", "Brew potions from gathered materials."),
                    PanelConfig::new("commission", "Commission", "Accept and deliver commissions."),
                    PanelConfig::new("save", "Save", "Save or load your progress."),
                    PanelConfig::new("shop", "Shop", "Buy ingredients and sell potions."),
                ],
                back_keys: default_back_keys(),
                pointer_back: true,
                log_file: None,
                remote: None,
            },
        }
    }
}
