//! Match phase state machine.
//!
//! Phase gates whether the simulation ticks at all; transitions outside the
//! table are rejected without changing state.

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Start,
    MatchOver,
    Restart,
}

/// Result of a transition attempt
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
}

/// Match phase state machine
#[derive(Debug, Clone, Copy)]
pub struct MatchFsm {
    phase: Phase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self { phase: Phase::Menu }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: PhaseAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PhaseAction) -> TransitionResult {
        let from = self.phase;

        if let Some(to) = self.next_phase(action) {
            self.phase = to;
            TransitionResult {
                success: true,
                from,
                to,
            }
        } else {
            TransitionResult {
                success: false,
                from,
                to: from,
            }
        }
    }

    /// Next phase for a given action (if valid)
    fn next_phase(&self, action: PhaseAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Menu, PhaseAction::Start) => Some(Phase::Playing),
            (Phase::Playing, PhaseAction::MatchOver) => Some(Phase::GameOver),
            (Phase::GameOver, PhaseAction::Restart) => Some(Phase::Playing),
            _ => None,
        }
    }

    /// Check if the simulation should tick
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Check if the match has ended
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.phase(), Phase::Menu);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(PhaseAction::Start);
        assert!(result.success);
        assert_eq!(result.from, Phase::Menu);
        assert_eq!(result.to, Phase::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(PhaseAction::MatchOver);
        assert!(!result.success);
        assert_eq!(fsm.phase(), Phase::Menu, "Rejected transition keeps state");
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut fsm = MatchFsm::new();
        assert!(!fsm.can_transition(PhaseAction::Restart));
        fsm.transition(PhaseAction::Start);
        assert!(!fsm.can_transition(PhaseAction::Restart));
        fsm.transition(PhaseAction::MatchOver);
        assert!(fsm.can_transition(PhaseAction::Restart));
    }

    #[test]
    fn test_match_flow() {
        let mut fsm = MatchFsm::new();
        fsm.transition(PhaseAction::Start);
        assert_eq!(fsm.phase(), Phase::Playing);
        fsm.transition(PhaseAction::MatchOver);
        assert!(fsm.is_game_over());
        fsm.transition(PhaseAction::Restart);
        assert_eq!(fsm.phase(), Phase::Playing);
    }
}
