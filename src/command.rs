//! src/command.rs
//!
//! Textual navigation commands shared by the keyboard and remote paths.
//!
//! Grammar (whitespace separated, case-insensitive):
//! - `goto <id>` / `go <id>`
//! - `back`
//! - `home`
//! - `status`
//! - `quit`

use crate::config::PanelId;
use crate::error::CommandError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavCommand<Id> {
    Goto(Id),
    Back,
    Home,
    Status,
    Quit,
}

impl NavCommand<PanelId> {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let parts: Vec<_> = line.split_whitespace().collect();
        let Some(head) = parts.first() else {
            return Err(CommandError::Empty);
        };

        match (head.to_lowercase().as_str(), parts.len()) {
            ("goto" | "go", 2) => Ok(NavCommand::Goto(PanelId::new(parts[1]))),
            ("goto" | "go", 1) => Err(CommandError::MissingTarget),
            ("back", 1) => Ok(NavCommand::Back),
            ("home", 1) => Ok(NavCommand::Home),
            ("status", 1) => Ok(NavCommand::Status),
            ("quit", 1) => Ok(NavCommand::Quit),
            _ => Err(CommandError::Unknown(parts.join(" "))),
        }
    }
}
