use crate::components::CourtState;
use crate::config::Config;
use crate::input::{Action, ActionState};

/// Apply held movement actions to both paddles. Both directions are
/// evaluated every tick, so opposite keys cancel out; the final position is
/// clamped to the court bounds.
pub fn move_paddles(court: &mut CourtState, actions: &ActionState, config: &Config) {
    let sides = [
        (&mut court.left_paddle, Action::LeftUp, Action::LeftDown),
        (&mut court.right_paddle, Action::RightUp, Action::RightDown),
    ];

    for (paddle, up, down) in sides {
        if actions.is_held(up) && paddle.y > 0.0 {
            paddle.y -= paddle.speed;
        }
        if actions.is_held(down) && paddle.y + paddle.height < config.court_height {
            paddle.y += paddle.speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Advance the ball by its per-tick velocity
pub fn move_ball(court: &mut CourtState) {
    court.ball.pos += court.ball.vel;
}
