//! src/input.rs
//!
//! Maps discrete terminal input edges onto navigation commands.
//!
//! Only key presses and button-down mouse events count. Key repeats and
//! releases are dropped so holding a key never fires more than once.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use tracing::warn;

use crate::command::NavCommand;
use crate::config::{PanelId, RouterConfig};
use crate::error::ConfigError;

/// Parse a key name from the config file.
pub fn parse_key(name: &str) -> Result<KeyCode, ConfigError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }
    match name.to_lowercase().as_str() {
        "esc" | "escape" => Ok(KeyCode::Esc),
        "backspace" => Ok(KeyCode::Backspace),
        "left" => Ok(KeyCode::Left),
        "delete" | "del" => Ok(KeyCode::Delete),
        "enter" => Ok(KeyCode::Enter),
        "space" => Ok(KeyCode::Char(' ')),
        _ => Err(ConfigError::UnknownKey(name.to_string())),
    }
}

/// Keys with a fixed meaning: `q`, `h` and the panel digits.
pub fn is_reserved(code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q' | 'h') => true,
        KeyCode::Char(c) => c.is_ascii_digit(),
        _ => false,
    }
}

fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{:?}", other),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    Command(NavCommand<PanelId>),
    /// Secondary pointer button; only honoured when history is deep enough.
    PointerBack,
}

pub struct Bindings {
    /// Digit `n` jumps to `panel_order[n - 1]`.
    pub panel_order: Vec<PanelId>,
    pub back: Vec<KeyCode>,
    pub pointer_back: bool,
}

impl Bindings {
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        let back = config
            .back_keys
            .iter()
            .map(|k| match parse_key(k)? {
                code if is_reserved(code) => Err(ConfigError::ReservedKey(k.clone())),
                code => Ok(code),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if back.is_empty() {
            warn!("no back keys configured; back is only reachable via remote or pointer");
        }
        for panel in config.panels.iter().skip(9) {
            warn!(panel = %panel.id, "no digit key left for panel; reachable via remote only");
        }
        Ok(Self {
            panel_order: config.panels.iter().map(|p| p.id.clone()).collect(),
            back,
            pointer_back: config.pointer_back,
        })
    }

    /// One-line key help reflecting the active bindings.
    pub fn help_text(&self) -> String {
        let mut parts = Vec::new();
        match self.panel_order.len().min(9) {
            0 => {}
            1 => parts.push("1=Go to panel".to_string()),
            n => parts.push(format!("1-{}=Go to panel", n)),
        }
        parts.push("h=Home".to_string());

        let mut back: Vec<String> = self.back.iter().map(key_label).collect();
        if self.pointer_back {
            back.push("Right-click".to_string());
        }
        if !back.is_empty() {
            parts.push(format!("{}=Back", back.join("/")));
        }
        parts.push("q=Quit".to_string());
        parts.join("  ")
    }

    pub fn translate(&self, event: &Event) -> Option<InputAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.back.contains(&key.code) {
                    return Some(InputAction::Command(NavCommand::Back));
                }
                let cmd = match key.code {
                    KeyCode::Char('q') => NavCommand::Quit,
                    KeyCode::Char('h') => NavCommand::Home,
                    KeyCode::Char(c) => {
                        let n = c.to_digit(10)? as usize;
                        let id = self.panel_order.get(n.checked_sub(1)?)?;
                        NavCommand::Goto(id.clone())
                    }
                    _ => return None,
                };
                Some(InputAction::Command(cmd))
            }
            Event::Mouse(mouse)
                if self.pointer_back && mouse.kind == MouseEventKind::Down(MouseButton::Right) =>
            {
                Some(InputAction::PointerBack)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn parses_key_names() {
        assert_eq!(parse_key("Esc").unwrap(), KeyCode::Esc);
        assert_eq!(parse_key("BACKSPACE").unwrap(), KeyCode::Backspace);
        assert_eq!(parse_key("b").unwrap(), KeyCode::Char('b'));
        assert!(matches!(parse_key("Hyper"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn digits_map_to_panels_in_order() {
        let b = Bindings::from_config(&Preset::Pages.config()).unwrap();
        assert_eq!(
            b.translate(&press(KeyCode::Char('2'))),
            Some(InputAction::Command(NavCommand::Goto(PanelId::new("alchemy"))))
        );
        assert_eq!(b.translate(&press(KeyCode::Char('0'))), None);
        assert_eq!(b.translate(&press(KeyCode::Char('9'))), None);
    }

    #[test]
    fn fixed_keys_and_back_keys() {
        let b = Bindings::from_config(&Preset::Pages.config()).unwrap();
        assert_eq!(
            b.translate(&press(KeyCode::Esc)),
            Some(InputAction::Command(NavCommand::Back))
        );
        assert_eq!(
            b.translate(&press(KeyCode::Char('h'))),
            Some(InputAction::Command(NavCommand::Home))
        );
        assert_eq!(
            b.translate(&press(KeyCode::Char('q'))),
            Some(InputAction::Command(NavCommand::Quit))
        );
        assert_eq!(b.translate(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn empty_back_keys_disable_keyboard_back() {
        let mut config = Preset::Pages.config();
        config.back_keys.clear();
        let b = Bindings::from_config(&config).unwrap();
        assert!(b.back.is_empty());
        assert_eq!(b.translate(&press(KeyCode::Esc)), None);
        assert_eq!(b.translate(&press(KeyCode::Backspace)), None);
        assert_eq!(b.help_text(), "1-5=Go to panel  h=Home  Right-click=Back  q=Quit");
    }

    #[test]
    fn help_text_follows_bindings() {
        let mut config = Preset::Alchemy.config();
        config.back_keys = vec!["Left".to_string(), "b".to_string()];
        config.pointer_back = false;
        let b = Bindings::from_config(&config).unwrap();
        assert_eq!(b.help_text(), "1-4=Go to panel  h=Home  Left/b=Back  q=Quit");

        let b = Bindings::from_config(&Preset::Pages.config()).unwrap();
        assert_eq!(
            b.help_text(),
            "1-5=Go to panel  h=Home  Esc/Backspace/Right-click=Back  q=Quit"
        );
    }

    #[test]
    fn bindings_refuse_reserved_back_keys() {
        let mut config = Preset::Pages.config();
        config.back_keys = vec!["q".to_string()];
        assert!(matches!(
            Bindings::from_config(&config),
            Err(ConfigError::ReservedKey(k)) if k == "q"
        ));
    }

    #[test]
    fn reserved_keys() {
        assert!(is_reserved(KeyCode::Char('q')));
        assert!(is_reserved(KeyCode::Char('h')));
        assert!(is_reserved(KeyCode::Char('7')));
        assert!(!is_reserved(KeyCode::Char('b')));
        assert!(!is_reserved(KeyCode::Esc));
    }

    #[test]
    fn repeats_and_releases_are_ignored() {
        let b = Bindings::from_config(&Preset::Pages.config()).unwrap();
        for kind in [KeyEventKind::Repeat, KeyEventKind::Release] {
            let ev = Event::Key(KeyEvent::new_with_kind(KeyCode::Esc, KeyModifiers::NONE, kind));
            assert_eq!(b.translate(&ev), None);
        }
    }

    #[test]
    fn right_button_down_is_pointer_back() {
        let mut b = Bindings::from_config(&Preset::Pages.config()).unwrap();
        assert_eq!(
            b.translate(&mouse(MouseEventKind::Down(MouseButton::Right))),
            Some(InputAction::PointerBack)
        );
        assert_eq!(b.translate(&mouse(MouseEventKind::Up(MouseButton::Right))), None);
        assert_eq!(b.translate(&mouse(MouseEventKind::Down(MouseButton::Left))), None);

        b.pointer_back = false;
        assert_eq!(b.translate(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
    }
}
