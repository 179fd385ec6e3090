//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod deck;
pub mod history;
pub mod menu;
pub mod page;
pub mod status;
pub mod title;

pub use deck::DeckPanel;
pub use history::HistoryPanel;
pub use menu::MenuPanel;
pub use page::PagePanel;
pub use status::StatusPanel;
pub use title::TitlePanel;
