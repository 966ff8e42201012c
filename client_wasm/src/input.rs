//! Keyboard mapping
//!
//! Raw key identifiers arrive lowercased; anything outside the bindings is
//! ignored.

use game_core::Action;

/// Discrete one-shot commands, distinct from the held movement actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
}

/// Map a lowercased key identifier to a held movement action
pub fn map_action(key: &str) -> Option<Action> {
    match key {
        "a" => Some(Action::LeftUp),
        "z" => Some(Action::LeftDown),
        "arrowup" => Some(Action::RightUp),
        "arrowdown" => Some(Action::RightDown),
        _ => None,
    }
}

/// Map a lowercased key identifier to a discrete command
pub fn map_command(key: &str) -> Option<Command> {
    match key {
        "enter" | " " => Some(Command::Start),
        "r" => Some(Command::Restart),
        _ => None,
    }
}
