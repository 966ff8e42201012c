use crate::components::CourtState;
use crate::config::Config;
use crate::resources::{Events, GameRng};

/// Detect the ball reaching the left or right edge. The defending side
/// concedes the point and the ball is reset for the next serve.
pub fn check_scoring(
    court: &mut CourtState,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if court.ball.pos.x <= 0.0 {
        events.right_scored = true;
        court.ball.reset(config.center(), rng);
    } else if court.ball.pos.x >= config.court_width {
        events.left_scored = true;
        court.ball.reset(config.center(), rng);
    }
}
