//! Console control reader.
//!
//! Runs on its own thread and talks to the simulation only through the
//! shared pause flag.

use crate::model::control::{ControlCommand, PauseHandle};
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

/// Starts a thread that reads commands from stdin until `close` or EOF.
pub fn spawn_console_reader(handle: PauseHandle) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("console".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            read_commands(stdin.lock(), &handle);
        })
}

/// Applies every command read from `reader` to `handle`. Returns after
/// `close`, at end of input, or on a read error.
pub fn read_commands<R: BufRead>(reader: R, handle: &PauseHandle) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Console read failed");
                break;
            }
        };
        match ControlCommand::parse(&line) {
            Some(ControlCommand::TogglePause) => {
                handle.toggle();
            }
            Some(ControlCommand::Close) => {
                tracing::info!("Console reader closed");
                return;
            }
            None if line.trim().is_empty() => {}
            None => {
                tracing::warn!(command = line.trim(), "Unknown console command");
            }
        }
    }
    tracing::debug!("Console input ended");
}
