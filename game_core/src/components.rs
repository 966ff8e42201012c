use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which side of the court a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Display label for score boards and the winner banner.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Left Player",
            Side::Right => "Right Player",
        }
    }
}

/// The ball. Velocities are in court units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// Serve from the court center: horizontal velocity is the base speed
    /// with a random sign, vertical velocity is uniform in
    /// [-speed/2, speed/2).
    pub fn reset(&mut self, center: Vec2, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = center;
        let toward_right = rng.0.gen_bool(0.5);
        self.vel.x = if toward_right { self.speed } else { -self.speed };
        self.vel.y = rng.0.gen_range(-self.speed / 2.0..self.speed / 2.0);
    }
}

/// A player's paddle. `x` is fixed per side; `y` is the top edge, kept in
/// `[0, court_height - height]`.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    /// Paddle at its starting pose, vertically centered on its side.
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: (config.court_height - config.paddle_height) / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }
}

/// Per-frame simulation state: one ball, two paddles.
#[derive(Debug, Clone, Copy)]
pub struct CourtState {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
}

impl CourtState {
    /// Starting pose: paddles centered, ball at the court center with the
    /// fixed pre-serve velocity. The first serve re-randomizes it.
    pub fn new(config: &Config) -> Self {
        let serve = Vec2::new(config.ball_speed, config.ball_speed * 0.6);
        Self {
            ball: Ball::new(config.center(), serve, config.ball_radius, config.ball_speed),
            left_paddle: Paddle::new(Side::Left, config),
            right_paddle: Paddle::new(Side::Right, config),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }
}
