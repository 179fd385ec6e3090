//! src/panels/history.rs
//!
//! History panel: the navigation stack, most recent entry on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppRouter;

pub struct HistoryPanel<'a> {
    pub router: &'a AppRouter,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(router: &'a AppRouter) -> Self {
        Self { router }
    }
}

impl crate::ui::Panel for HistoryPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let history = self.router.history();
        // leave room for the borders
        let height = area.height.saturating_sub(2) as usize;

        let lines: Vec<Line> = if history.is_empty() {
            vec![Line::from(Span::styled(
                "(empty)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            history
                .iter()
                .rev()
                .enumerate()
                .take(height.max(1))
                .map(|(i, id)| {
                    let is_top = i == 0;
                    let style = if is_top {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Cyan)
                    };
                    Line::from(vec![
                        Span::styled(format!("{:>2} ", history.len() - i), Style::default().fg(Color::Yellow)),
                        Span::styled(id.to_string(), style),
                    ])
                })
                .collect()
        };

        let title = format!("History ({})", self.router.history_depth());
        let block = Block::default().title(title).borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
