//! Pause flag shared between the simulation and its controllers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to one simulation's pause flag. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct PauseHandle {
    paused: Arc<AtomicBool>,
}

impl PauseHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&self) -> bool {
        let paused = !self.paused.fetch_xor(true, Ordering::SeqCst);
        tracing::info!(paused, "Pause toggled");
        paused
    }
}

/// Console commands understood by the control reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    TogglePause,
    Close,
}

impl ControlCommand {
    /// Parses one console line. Unknown input yields `None`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "pause" => Some(Self::TogglePause),
            "close" => Some(Self::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_shared() {
        let handle = PauseHandle::new();
        let other = handle.clone();
        assert!(!handle.is_paused());
        assert!(other.toggle());
        assert!(handle.is_paused());
        assert!(!handle.toggle());
        assert!(!other.is_paused());
        other.set_paused(true);
        assert!(handle.is_paused());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ControlCommand::parse("pause"), Some(ControlCommand::TogglePause));
        assert_eq!(ControlCommand::parse("  PAUSE\n"), Some(ControlCommand::TogglePause));
        assert_eq!(ControlCommand::parse("Close"), Some(ControlCommand::Close));
        assert_eq!(ControlCommand::parse("resume"), None);
        assert_eq!(ControlCommand::parse(""), None);
    }
}
