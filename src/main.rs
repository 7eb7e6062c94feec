//! Deals a Solitaire table and prints the top card of each tableau pile.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use solitaire_deal::{SetupOptions, Table};
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;

    let table = match Table::new_game(&SetupOptions::default(), seed) {
        Ok(table) => table,
        Err(err) => {
            tracing::error!(%err, "failed to deal table");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{}", table.tableau_summary()).and_then(|()| stdout.flush()) {
        tracing::error!(%err, "failed to write table");
        return ExitCode::FAILURE;
    }
    drop(stdout);

    if let Err(err) = wait_for_keypress() {
        tracing::warn!(%err, "could not wait for a keypress");
    }

    ExitCode::SUCCESS
}

/// Blocks until a single key is pressed.
fn wait_for_keypress() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => {}
            Err(err) => break Err(err),
        }
    };
    terminal::disable_raw_mode()?;
    result
}
