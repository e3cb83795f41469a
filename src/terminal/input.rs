//! # Raw Terminal Input
//!
//! Keystroke reading for the greeting check. The terminal is switched into
//! raw mode (no echo, no line buffering) behind a guard that restores it no
//! matter how the read ends.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not switch the terminal into raw mode")]
    RawMode(#[source] std::io::Error),
    #[error("could not read a terminal event")]
    Read(#[source] std::io::Error),
    #[error("interrupted while waiting for keystrokes")]
    Interrupted,
}

/// Holds the terminal in raw mode for as long as it lives.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn acquire() -> Result<Self, InputError> {
        enable_raw_mode().map_err(InputError::RawMode)?;
        debug!("raw mode enabled");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        debug!("raw mode restored");
    }
}

/// Blocks until `count` character keystrokes have been pressed and returns
/// them in order.
///
/// Key releases, repeats and non-character keys are skipped rather than
/// counted. Ctrl+C aborts the read with [`InputError::Interrupted`].
pub fn read_keys(count: usize) -> Result<Vec<char>, InputError> {
    let _guard = RawModeGuard::acquire()?;

    let mut keys: Vec<char> = Vec::with_capacity(count);
    while keys.len() < count {
        let Event::Key(key_event) = event::read().map_err(InputError::Read)? else {
            continue;
        };

        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let is_ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if is_ctrl_c {
            return Err(InputError::Interrupted);
        }

        if let KeyCode::Char(ch) = key_event.code {
            keys.push(ch);
            trace!("accepted keystroke {} of {}", keys.len(), count);
        }
    }

    Ok(keys)
}
