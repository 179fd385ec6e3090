//! src/panels/status.rs
//!
//! Footer: key help plus the result of the last command.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct StatusPanel<'a> {
    pub help: &'a str,
    pub message: &'a str,
    pub is_error: bool,
}

impl<'a> StatusPanel<'a> {
    pub fn new(help: &'a str, message: &'a str, is_error: bool) -> Self {
        Self {
            help,
            message,
            is_error,
        }
    }
}

impl crate::ui::Panel for StatusPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let msg_style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        let lines = vec![
            Line::raw(self.help),
            Line::from(Span::styled(self.message, msg_style)),
        ];
        let p = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
