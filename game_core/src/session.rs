//! Local two-player match orchestration.

use crate::components::{CourtState, Side};
use crate::config::Config;
use crate::fsm::{MatchFsm, Phase, PhaseAction};
use crate::input::ActionState;
use crate::resources::{Events, GameRng, Score};
use crate::step;

/// A local two-player match: court state, score and phase under one roof,
/// ticked by an external driver.
pub struct Session {
    config: Config,
    court: CourtState,
    actions: ActionState,
    score: Score,
    fsm: MatchFsm,
    rng: GameRng,
    winner: Option<Side>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let court = CourtState::new(&config);
        Self {
            config,
            court,
            actions: ActionState::new(),
            score: Score::new(),
            fsm: MatchFsm::new(),
            rng: GameRng::new(seed),
            winner: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn court(&self) -> &CourtState {
        &self.court
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    /// Winning side once the match has ended
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn actions_mut(&mut self) -> &mut ActionState {
        &mut self.actions
    }

    /// Enter Playing from the menu and serve the first ball. Returns false
    /// if the match is not in the menu.
    pub fn start(&mut self) -> bool {
        if !self.fsm.transition(PhaseAction::Start).success {
            return false;
        }
        self.court.ball.reset(self.config.center(), &mut self.rng);
        true
    }

    /// Clear the score and play again after a finished match. Returns false
    /// if the match is not over.
    pub fn restart(&mut self) -> bool {
        if !self.fsm.transition(PhaseAction::Restart).success {
            return false;
        }
        self.score.reset();
        self.winner = None;
        self.court.ball.reset(self.config.center(), &mut self.rng);
        true
    }

    /// Advance one tick. Outside Playing this is a no-op returning an empty
    /// event set. A point that reaches the match target ends the match in
    /// the same tick.
    pub fn tick(&mut self) -> Events {
        if !self.fsm.is_playing() {
            return Events::new();
        }

        let (next, events) = step(&self.court, &self.actions, &self.config, &mut self.rng);
        self.court = next;

        if events.left_scored {
            self.score.increment_left();
        }
        if events.right_scored {
            self.score.increment_right();
        }

        if let Some(side) = self.score.has_winner(self.config.win_score) {
            self.winner = Some(side);
            self.fsm.transition(PhaseAction::MatchOver);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_tick_is_noop_outside_playing() {
        let mut session = Session::new(1);
        let before = session.court().ball.pos;

        let events = session.tick();

        assert_eq!(session.court().ball.pos, before, "Menu does not simulate");
        assert!(!events.wall_bounce && !events.paddle_bounce);
        assert_eq!(events.scored(), None);
    }

    #[test]
    fn test_start_enters_playing_and_serves() {
        let mut session = Session::new(1);
        assert!(session.start());
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.court().ball.pos, session.config().center());
        assert_eq!(
            session.court().ball.vel.x.abs(),
            session.config().ball_speed
        );
    }

    #[test]
    fn test_start_rejected_while_playing() {
        let mut session = Session::new(1);
        assert!(session.start());
        assert!(!session.start());
    }

    #[test]
    fn test_point_ends_match_in_delivering_tick() {
        let mut session = Session::new(1);
        session.start();

        // Deliver four points to the right side, then line up the fifth.
        for _ in 0..4 {
            force_left_edge(&mut session);
            session.tick();
        }
        assert_eq!(session.score().right, 4);
        assert_eq!(session.phase(), Phase::Playing, "Not over before target");

        force_left_edge(&mut session);
        let events = session.tick();

        assert!(events.right_scored);
        assert_eq!(session.score().right, 5);
        assert_eq!(session.phase(), Phase::GameOver, "Over on the same tick");
        assert_eq!(session.winner(), Some(Side::Right));
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut session = Session::new(1);
        session.start();
        for _ in 0..5 {
            force_left_edge(&mut session);
            session.tick();
        }
        assert_eq!(session.phase(), Phase::GameOver);

        let frozen = session.court().ball.pos;
        session.tick();
        assert_eq!(session.court().ball.pos, frozen);
    }

    #[test]
    fn test_restart_clears_score_and_resumes() {
        let mut session = Session::new(1);
        session.start();
        for _ in 0..5 {
            force_left_edge(&mut session);
            session.tick();
        }
        assert_eq!(session.phase(), Phase::GameOver);

        assert!(session.restart());
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score().left, 0);
        assert_eq!(session.score().right, 0);
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_restart_rejected_mid_match() {
        let mut session = Session::new(1);
        session.start();
        assert!(!session.restart());
    }

    // Park the ball one tick away from crossing the left edge.
    fn force_left_edge(session: &mut Session) {
        session.court.ball.pos = Vec2::new(4.0, 200.0);
        session.court.ball.vel = Vec2::new(-5.0, 0.0);
    }
}
