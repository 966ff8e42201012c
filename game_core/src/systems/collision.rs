use rand::Rng;

use crate::components::{Ball, CourtState, Paddle};
use crate::config::Config;
use crate::resources::{Events, GameRng};

/// Bounce off the top and bottom walls: the vertical velocity sign flips
/// when the ball's edge is at or past a bound. The position is left where
/// it is, so the ball may overlap the wall for a frame.
pub fn bounce_walls(court: &mut CourtState, config: &Config, events: &mut Events) {
    let ball = &mut court.ball;
    if ball.pos.y <= ball.radius || ball.pos.y >= config.court_height - ball.radius {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }
}

/// Bounce off either paddle. At most one horizontal flip per tick even if
/// both paddles overlap; the vertical velocity picks up an additive uniform
/// jitter in [-1, 1).
pub fn bounce_paddles(court: &mut CourtState, events: &mut Events, rng: &mut GameRng) {
    let hit = overlaps(&court.ball, &court.left_paddle) || overlaps(&court.ball, &court.right_paddle);
    if hit {
        court.ball.vel.x = -court.ball.vel.x;
        court.ball.vel.y += rng.0.gen_range(-1.0..1.0);
        events.paddle_bounce = true;
    }
}

/// Bounding-square-vs-rectangle overlap test
fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - ball.radius < paddle.x + paddle.width
        && ball.pos.x + ball.radius > paddle.x
        && ball.pos.y - ball.radius < paddle.y + paddle.height
        && ball.pos.y + ball.radius > paddle.y
}
