mod auth;
mod calc;
mod config;
mod error;
mod input;
mod ipc;
mod logging;
mod roster;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = config::Config::from_env()?;
    logging::init(&config)?;
    info!(version = env!("CARGO_PKG_VERSION"), "rosterd starting");

    let mut state = ipc::AppState::default();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("read request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let resp = match serde_json::from_str::<ipc::Request>(&line) {
            Ok(req) => ipc::handle_request(&mut state, req),
            Err(e) => {
                // No id to reply to.
                warn!(error = %e, "unparseable request line");
                ipc::bad_json(e.to_string())
            }
        };

        writeln!(stdout, "{resp}").context("write response")?;
        stdout.flush().context("flush response")?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
