//! Infinity game client binary.
//!
//! Opens a save (the path given as the first argument, else the most recent
//! save in the save directory, else a fresh game), then reads one command
//! per stdin line and redraws the board after every change. End of input
//! saves and exits like `quit`.
//!
//! ```bash
//! INFINITY_SEED=42 cargo run -p infinity-client
//! cargo run -p infinity-client -- ./my-world.infinity.json
//! ```

mod commands;
mod logging;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::{Context, Result};
use infinity_client_core::{BoardView, ClientConfig, EventOutcome, SaveCatalog, Session};
use infinity_core::LoadError;

use crate::commands::Command;
use crate::render::Overlays;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging();

    let config = ClientConfig::from_env();
    let mut session = open_session(&config)?;

    tracing::info!(path = %session.save_path().display(), "Starting Infinity");
    draw(&session)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim_end_matches(['\r', '\n']);

        let events = match commands::parse(line) {
            Ok(Command::Events(events)) => events,
            Ok(Command::Show) => {
                draw(&session)?;
                continue;
            }
            Ok(Command::Help) => {
                println!("{}", commands::HELP);
                continue;
            }
            Err(error) => {
                println!("{error:#}");
                continue;
            }
        };

        let mut redraw = false;
        for event in events {
            match session.handle(event) {
                EventOutcome::Exit => return Ok(()),
                EventOutcome::SaveFailed => {
                    println!("Could not save to {}", session.save_path().display());
                }
                EventOutcome::Unchanged => {}
                EventOutcome::Changed | EventOutcome::Saved => redraw = true,
            }
        }
        if redraw {
            draw(&session)?;
        }
    }

    if let Err(error) = session.save() {
        tracing::warn!(%error, "failed to save game on exit");
    }
    Ok(())
}

fn open_session(config: &ClientConfig) -> Result<Session> {
    let catalog = SaveCatalog::new(config.resolved_save_dir());

    let path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => match catalog.latest()? {
            Some(entry) => entry.path,
            None => {
                catalog.ensure_dir()?;
                catalog.new_game_path(SystemTime::now())
            }
        },
    };

    let mut board = config.board.new_board();
    if path.exists() {
        match board.load_game(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "Loaded save"),
            Err(LoadError::Sections(errors)) => {
                for error in &errors {
                    tracing::warn!(%error, "Skipped part of save");
                }
            }
            Err(error) => {
                return Err(error).with_context(|| format!("Failed to load {}", path.display()));
            }
        }
    } else {
        tracing::info!(seed = board.seed(), "Starting new game");
    }

    let mut session = Session::new(board, path).with_tutorial(config.show_tutorial);
    session
        .save()
        .with_context(|| format!("Failed to write {}", session.save_path().display()))?;
    Ok(session)
}

fn draw(session: &Session) -> Result<()> {
    let view = BoardView::capture(session.board());
    let overlays = Overlays {
        saved_banner: session.saved_recently(SystemTime::now()),
        tutorial: session.show_tutorial(),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(render::render(&view, &overlays).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
