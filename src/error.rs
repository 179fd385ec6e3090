//! src/error.rs
//!
//! Error types for router construction, configuration and command parsing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("panel set is empty")]
    EmptyPanelSet,

    #[error("unknown panel '{0}'")]
    UnknownPanel(String),

    #[error("panel '{0}' is declared more than once")]
    DuplicatePanel(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown preset '{0}' (expected 'alchemy' or 'pages')")]
    UnknownPreset(String),

    #[error("unknown key name '{0}'")]
    UnknownKey(String),

    #[error("invalid panel id '{0}': must be non-empty and contain no whitespace")]
    InvalidPanelId(String),

    #[error("key '{0}' is reserved for quit, home or panel shortcuts")]
    ReservedKey(String),

    #[error(transparent)]
    Router(#[from] RouterError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty")]
    Empty,

    #[error("missing panel id")]
    MissingTarget,

    #[error("unknown {0}")]
    Unknown(String),
}
