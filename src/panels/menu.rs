//! src/panels/menu.rs
//!
//! Numbered list of navigable panels; the current one is highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppRouter;

pub struct MenuPanel<'a> {
    pub router: &'a AppRouter,
}

impl<'a> MenuPanel<'a> {
    pub fn new(router: &'a AppRouter) -> Self {
        Self { router }
    }
}

impl crate::ui::Panel for MenuPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let current = self.router.current();
        let lines: Vec<Line> = self
            .router
            .panels()
            .slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let label = match &slot.handle {
                    Some(page) => page.title.clone(),
                    None => format!("{} (unassigned)", slot.id),
                };
                let style = if &slot.id == current {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if slot.handle.is_none() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                let home = if &slot.id == self.router.home() { " *" } else { "" };
                Line::from(vec![
                    Span::raw(format!("{} ", i + 1)),
                    Span::styled(label, style),
                    Span::raw(home),
                ])
            })
            .collect();

        let block = Block::default().title("Panels").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
