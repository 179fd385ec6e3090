//! src/panels/deck.rs
//!
//! Renders whichever routed page is currently visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppRouter;
use crate::router::PanelHandle;
use crate::ui::Panel;

pub struct DeckPanel<'a> {
    pub router: &'a AppRouter,
}

impl<'a> DeckPanel<'a> {
    pub fn new(router: &'a AppRouter) -> Self {
        Self { router }
    }
}

impl Panel for DeckPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let visible = self
            .router
            .panels()
            .slots()
            .iter()
            .filter_map(|s| s.handle.as_ref())
            .find(|h| h.is_visible());

        match visible {
            Some(page) => page.draw(f, area),
            None => {
                let msg = format!("Panel '{}' has no view attached.", self.router.current());
                let p = Paragraph::new(msg)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(Block::default().title("Empty").borders(Borders::ALL));
                f.render_widget(p, area);
            }
        }
    }
}
