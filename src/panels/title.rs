//! src/panels/title.rs
//!
//! Header bar: app name, history policy and current panel.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppRouter;

pub struct TitlePanel<'a> {
    pub title: String,
    pub router: &'a AppRouter,
}

impl<'a> TitlePanel<'a> {
    pub fn new(title: &str, router: &'a AppRouter) -> Self {
        Self {
            title: title.to_string(),
            router,
        }
    }
}

impl crate::ui::Panel for TitlePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let text = format!(
            "{}  |  policy: {}  |  current: {}",
            self.title,
            self.router.policy(),
            self.router.current()
        );
        let p = Paragraph::new(text).block(Block::default().title("pagenav").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
