//! src/net/remote.rs
//!
//! Tiny line-based TCP control server for remote navigation.
//!
//! Client threads never touch the router. Each parsed command is handed to
//! the UI thread together with a reply channel, and the connection blocks
//! until the UI thread answers.

use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::mpsc::{self, Sender};
use std::thread;

use color_eyre::eyre::WrapErr;
use tracing::{debug, info, warn};

use crate::command::NavCommand;
use crate::config::PanelId;

/// A command travelling from a client thread to the UI thread.
pub struct RemoteRequest {
    pub command: NavCommand<PanelId>,
    pub reply: Sender<String>,
}

/// Bind the control socket. Done on the caller's thread so a bad address or
/// a port already in use fails startup instead of vanishing in a detached
/// thread.
pub fn bind(addr: &str) -> color_eyre::Result<TcpListener> {
    let listener =
        TcpListener::bind(addr).wrap_err_with(|| format!("binding remote control on {}", addr))?;
    info!(%addr, "remote control listening");
    Ok(listener)
}

/// Accept clients on an already bound listener and spawn a handler thread per
/// client.
pub fn remote_server(listener: TcpListener, requests: Sender<RemoteRequest>) {
    for stream in listener.incoming() {
        match stream {
            Ok(s) => {
                let tx = requests.clone();
                thread::spawn(move || handle_remote_client(s, tx));
            }
            Err(e) => {
                warn!("remote_server: accept error: {}", e);
            }
        }
    }
}

/// Handle a single client; one reply line per command line.
///
/// `quit` closes this connection only; the application keeps running.
pub fn handle_remote_client(mut s: TcpStream, requests: Sender<RemoteRequest>) {
    let peer = s
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<peer?>".into());
    let reader = match s.try_clone() {
        Ok(r) => r,
        Err(e) => {
            warn!(%peer, "remote client: clone error: {}", e);
            return;
        }
    };
    let mut rdr = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        match rdr.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        debug!(%peer, command = raw, "remote command");

        let reply = match NavCommand::parse(raw) {
            Ok(NavCommand::Quit) => {
                let _ = s.write_all(b"OK bye\n");
                break;
            }
            Ok(command) => match forward(&requests, command) {
                Some(reply) => reply,
                None => {
                    let _ = s.write_all(b"ERR shutting down\n");
                    break;
                }
            },
            Err(e) => format!("ERR {}", e),
        };
        if s.write_all(format!("{}\n", reply).as_bytes()).is_err() {
            break;
        }
    }

    debug!(%peer, "remote client disconnected");
    let _ = s.shutdown(Shutdown::Both);
}

/// Send a command to the UI thread and wait for its reply. `None` once the UI
/// thread has gone away.
fn forward(requests: &Sender<RemoteRequest>, command: NavCommand<PanelId>) -> Option<String> {
    let (reply_tx, reply_rx) = mpsc::channel();
    requests
        .send(RemoteRequest {
            command,
            reply: reply_tx,
        })
        .ok()?;
    reply_rx.recv().ok()
}
