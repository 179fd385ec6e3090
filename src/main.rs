//! src/main.rs
//!
//! Entrypoint: parse flags, resolve configuration, install error reporting and
//! logging, then delegate to `app::run()`.

mod app;
mod command;
mod config;
mod error;
mod input;
mod logging;
mod net;
mod panels;
mod router;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Preset, RouterConfig};

#[derive(Parser, Debug)]
#[command(name = "pagenav", version, about = "Panel navigation with back history")]
struct Cli {
    /// TOML file describing the panel set; overrides --preset.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in panel set: `alchemy` or `pages`.
    #[arg(short, long, default_value = "pages")]
    preset: String,

    /// Start the remote control server on this address.
    #[arg(long)]
    remote: Option<String>,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (mut config, title) = match &cli.config {
        Some(path) => {
            let title = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("pagenav")
                .to_string();
            (RouterConfig::load(path)?, title)
        }
        None => {
            let preset = Preset::from_name(&cli.preset)?;
            (preset.config(), format!("{:?}", preset))
        }
    };
    if cli.remote.is_some() {
        config.remote = cli.remote;
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file;
    }

    logging::init(config.log_file.as_deref())?;
    tracing::info!(title = %title, panels = config.panels.len(), "starting");

    app::run(config, &title)
}
