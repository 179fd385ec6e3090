//! src/panels/page.rs
//!
//! A routed page: the panel handle the router shows and hides.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::config::PanelConfig;
use crate::router::PanelHandle;

#[derive(Debug, Clone)]
pub struct PagePanel {
    pub title: String,
    pub body: String,
    visible: bool,
}

impl PagePanel {
    /// Pages start visible, as freshly created scene objects do, until the
    /// router sweeps them.
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            visible: true,
        }
    }

    pub fn from_config(cfg: &PanelConfig) -> Self {
        Self::new(&cfg.display_title(), &cfg.body)
    }
}

impl PanelHandle for PagePanel {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

impl crate::ui::Panel for PagePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw(self.body.clone()),
        ];
        let p = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(self.title.clone()).borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
