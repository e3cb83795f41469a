//! # Greeting Check
//!
//! The interactive half of the exchange: the visitor types three keystrokes
//! in raw mode and they are compared against the expected greeting.

use tracing::debug;

use crate::terminal::input::{self, InputError};

/// The keystrokes a polite visitor is expected to type, in order.
pub const GREETING: [char; 3] = ['h', 'i', '!'];

/// Reads three keystrokes from the terminal and checks them for politeness.
///
/// The terminal stays in raw mode (no echo, no line buffering) for the
/// duration of the read and is restored before this returns, on the error
/// path included.
pub fn check_greeting() -> Result<bool, InputError> {
    let keys: Vec<char> = input::read_keys(GREETING.len())?;
    let matched: bool = is_greeting(&keys);

    debug!("greeting check finished, matched = {matched}");
    Ok(matched)
}

/// Positional comparison against [`GREETING`].
///
/// Anything that is not exactly the expected keys in the expected order
/// fails, wrong ordering of the right keys included.
pub fn is_greeting(keys: &[char]) -> bool {
    keys.iter().eq(GREETING.iter())
}
