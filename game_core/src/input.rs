//! Held-action input state.
//!
//! The host feeds raw press/release signals in; the simulation queries one
//! boolean per recognized action. A fixed enum keys the set.

/// A held movement action, one per paddle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::LeftUp,
        Action::LeftDown,
        Action::RightUp,
        Action::RightDown,
    ];

    fn index(self) -> usize {
        match self {
            Action::LeftUp => 0,
            Action::LeftDown => 1,
            Action::RightUp => 2,
            Action::RightDown => 3,
        }
    }
}

/// Held-flags for the recognized actions. An action is held from its press
/// signal until its release signal; duplicate signals are harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionState {
    held: [bool; 4],
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
    }
}
