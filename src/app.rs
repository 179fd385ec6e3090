//! src/app.rs
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the panel router from configuration, optionally starts the remote
//! control thread, and runs the UI main loop.
//!
//! ## Overview
//! The application:
//! - Shows exactly one page of the configured panel set at a time.
//! - Keeps a navigation history and supports back navigation.
//! - Accepts keyboard, mouse and (optionally) TCP commands.
//!
//! # Keyboard and Mouse Controls
//!
//! - **1-9** — Go to the n-th panel in configuration order.
//! - **h** — Go home. History is reset to `[home]`.
//! - **Esc / Backspace** — Back (configurable through `back_keys`).
//! - **Right mouse button** — Back, only when history holds more than one
//!   entry (disable with `pointer_back = false`).
//! - **q** — Quit and restore terminal state.
//!
//! # Remote TCP Protocol (ASCII, Line-Based)
//!
//! Enabled with `remote = "<addr>"` or `--remote <addr>`. Each line is one
//! command; the server answers one line per command.
//!
//! - `goto <id>` — `OK <current>` or `ERR unknown panel '<id>'`
//! - `back` — `OK <current>` or `ERR nothing to go back to`
//! - `home` — `OK <home>`
//! - `status` — `OK <current> [<history bottom..top>]`
//! - `quit` — `OK bye`, closes the connection (the app keeps running)
//!
//! ```text
//! $ nc 127.0.0.1 4000
//! goto shop
//! OK shop
//! back
//! OK main
//! ```
//!
//! # Frame Loop
//!
//! Every 100 ms the loop draws, drains pending terminal events without
//! blocking, then drains remote requests. All router mutation happens here.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction},
};
use tracing::{info, warn};

use crate::command::NavCommand;
use crate::config::{PanelId, RouterConfig};
use crate::error::ConfigError;
use crate::input::{Bindings, InputAction};
use crate::net::{RemoteRequest, bind, remote_server};
use crate::panels::{DeckPanel, HistoryPanel, MenuPanel, PagePanel, StatusPanel, TitlePanel};
use crate::router::{BackOutcome, NavOutcome, PanelRouter, PanelSet};
use crate::ui::{group, leaf};

pub type AppRouter = PanelRouter<PanelId, PagePanel>;

pub struct App {
    pub router: AppRouter,
    pub bindings: Bindings,
    pub help: String,
    pub title: String,
    pub status: String,
    pub status_is_error: bool,
    pub running: bool,
}

impl App {
    /// Build the router from `config` and show the home panel.
    pub fn new(config: &RouterConfig, title: &str) -> Result<Self, ConfigError> {
        let slots = config
            .panels
            .iter()
            .map(|p| {
                let handle = (!p.unassigned).then(|| PagePanel::from_config(p));
                (p.id.clone(), handle)
            })
            .collect();
        let panels = PanelSet::new(slots)?;
        let mut router = PanelRouter::new(panels, config.home.clone(), config.policy)?;
        router.initialize();
        let bindings = Bindings::from_config(config)?;

        Ok(Self {
            status: format!("Ready on {}", router.current()),
            help: bindings.help_text(),
            router,
            bindings,
            title: title.to_string(),
            status_is_error: false,
            running: true,
        })
    }

    /// Execute one command and return its reply line.
    pub fn apply(&mut self, command: NavCommand<PanelId>) -> String {
        let result = match command {
            NavCommand::Goto(id) => match self.router.navigate_to(&id) {
                Ok(NavOutcome::Moved { .. }) => Ok(self.router.current().to_string()),
                Ok(NavOutcome::AlreadyThere) => Ok(format!("{} (already there)", self.router.current())),
                Err(e) => Err(e.to_string()),
            },
            NavCommand::Back => {
                let outcome = self.router.go_back();
                self.describe_back(outcome)
            }
            NavCommand::Home => {
                self.router.go_to_home();
                Ok(self.router.current().to_string())
            }
            NavCommand::Status => {
                let history: Vec<String> = self.router.history().iter().map(|id| id.to_string()).collect();
                Ok(format!("{} [{}]", self.router.current(), history.join(" ")))
            }
            NavCommand::Quit => {
                self.running = false;
                Ok("bye".to_string())
            }
        };
        self.report(result)
    }

    /// Feed one terminal event through the bindings.
    pub fn handle_event(&mut self, event: &Event) {
        match self.bindings.translate(event) {
            Some(InputAction::Command(command)) => {
                self.apply(command);
            }
            Some(InputAction::PointerBack) => {
                if let Some(outcome) = self.router.go_back_from_pointer() {
                    let result = self.describe_back(outcome);
                    self.report(result);
                }
            }
            None => {}
        }
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        let root = group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(4),
            ],
            vec![
                leaf(TitlePanel::new(&self.title, &self.router)),
                group(
                    Direction::Horizontal,
                    vec![Constraint::Percentage(65), Constraint::Percentage(35)],
                    vec![
                        leaf(DeckPanel::new(&self.router)),
                        group(
                            Direction::Vertical,
                            vec![Constraint::Percentage(50), Constraint::Percentage(50)],
                            vec![
                                leaf(MenuPanel::new(&self.router)),
                                leaf(HistoryPanel::new(&self.router)),
                            ],
                        ),
                    ],
                ),
                leaf(StatusPanel::new(&self.help, &self.status, self.status_is_error)),
            ],
        );
        root.draw(f, f.area());
    }

    fn describe_back(&self, outcome: BackOutcome<PanelId>) -> Result<String, String> {
        if !outcome.succeeded() {
            return Err("nothing to go back to".to_string());
        }
        match outcome {
            BackOutcome::ReturnedHome => Ok(format!("{} (history exhausted)", self.router.home())),
            _ => Ok(self.router.current().to_string()),
        }
    }

    fn report(&mut self, result: Result<String, String>) -> String {
        match result {
            Ok(msg) => {
                self.status = msg.clone();
                self.status_is_error = false;
                format!("OK {}", msg)
            }
            Err(msg) => {
                self.status = msg.clone();
                self.status_is_error = true;
                format!("ERR {}", msg)
            }
        }
    }
}

pub fn run(config: RouterConfig, title: &str) -> color_eyre::Result<()> {
    let mut app = App::new(&config, title)?;

    // Remote control thread
    let (tx, rx) = mpsc::channel::<RemoteRequest>();
    match config.remote.as_deref() {
        Some(addr) => {
            let listener = bind(addr)?;
            thread::spawn(move || remote_server(listener, tx));
        }
        None => drop(tx),
    }

    let mut terminal = ratatui::init();
    crossterm::execute!(io::stdout(), EnableMouseCapture)?;
    info!(title, "ui started");

    let result = main_loop(&mut terminal, &mut app, &rx);

    if let Err(e) = crossterm::execute!(io::stdout(), DisableMouseCapture) {
        warn!("failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
    info!("ui stopped");
    result
}

fn main_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    remote: &Receiver<RemoteRequest>,
) -> color_eyre::Result<()> {
    let frame_time = Duration::from_millis(100);

    while app.running {
        let frame_start = Instant::now();

        terminal.draw(|f| app.draw(f))?;

        while crossterm::event::poll(Duration::from_millis(0))? {
            let event = crossterm::event::read()?;
            app.handle_event(&event);
        }

        while let Ok(req) = remote.try_recv() {
            let reply = app.apply(req.command);
            // the client may have hung up already
            let _ = req.reply.send(reply);
        }

        if !app.running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(())
}
