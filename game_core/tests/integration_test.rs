use game_core::*;
use glam::Vec2;

fn setup() -> (CourtState, ActionState, Config, GameRng) {
    let config = Config::new();
    let court = CourtState::new(&config);
    (court, ActionState::new(), config, GameRng::new(12345))
}

#[test]
fn test_score_on_left_edge_crossing() {
    // Ball one tick away from the left edge crosses it and the right side
    // scores; the ball comes back to center at base serve speed.
    let (mut court, actions, config, mut rng) = setup();
    court.ball.pos = Vec2::new(5.0, 200.0);
    court.ball.vel = Vec2::new(-5.0, 0.0);

    let (next, events) = step(&court, &actions, &config, &mut rng);

    assert!(events.right_scored, "Right side scores at x = 0");
    assert!(!events.left_scored);
    assert_eq!(next.ball.pos, Vec2::new(400.0, 200.0));
    assert_eq!(next.ball.vel.x.abs(), 5.0);
}

#[test]
fn test_wall_bounce_flips_vertical_velocity() {
    let (mut court, actions, config, mut rng) = setup();
    court.ball.pos = Vec2::new(400.0, 7.0);
    court.ball.vel = Vec2::new(0.0, -3.0);

    let (next, events) = step(&court, &actions, &config, &mut rng);

    assert!(events.wall_bounce);
    assert_eq!(next.ball.vel.y, 3.0);
}

#[test]
fn test_no_events_in_open_court() {
    let (mut court, actions, config, mut rng) = setup();
    court.ball.pos = Vec2::new(400.0, 200.0);
    court.ball.vel = Vec2::new(4.0, 2.0);

    let (next, events) = step(&court, &actions, &config, &mut rng);

    assert!(!events.wall_bounce && !events.paddle_bounce);
    assert_eq!(events.scored(), None);
    assert_eq!(next.ball.pos, Vec2::new(404.0, 202.0));
}

#[test]
fn test_step_leaves_input_state_untouched() {
    let (court, mut actions, config, mut rng) = setup();
    actions.press(Action::LeftUp);

    let _ = step(&court, &actions, &config, &mut rng);

    assert!(actions.is_held(Action::LeftUp), "Held until released");
}

#[test]
fn test_paddle_bounds_hold_over_long_runs() {
    let (mut court, mut actions, config, mut rng) = setup();
    actions.press(Action::LeftUp);
    actions.press(Action::RightDown);

    for _ in 0..500 {
        let (next, _) = step(&court, &actions, &config, &mut rng);
        court = next;
        for side in [Side::Left, Side::Right] {
            let paddle = court.paddle(side);
            assert!(paddle.y >= 0.0, "Paddle above the floor of the range");
            assert!(
                paddle.y <= config.court_height - paddle.height,
                "Paddle below the ceiling of the range"
            );
        }
    }
}

#[test]
fn test_paddle_bounce_preserves_horizontal_speed() {
    let (mut court, actions, config, mut rng) = setup();
    let paddle = court.right_paddle;
    court.ball.pos = Vec2::new(paddle.x - court.ball.radius - 4.0, 200.0);
    court.ball.vel = Vec2::new(5.0, 0.0);

    let (next, events) = step(&court, &actions, &config, &mut rng);

    assert!(events.paddle_bounce);
    assert_eq!(next.ball.vel.x, -5.0, "Sign flips, magnitude kept");
}

#[test]
fn test_full_match_reaches_game_over_at_target() {
    let mut session = Session::new(2024);
    assert_eq!(session.phase(), Phase::Menu);
    session.start();

    let mut ticks = 0;
    while session.phase() == Phase::Playing {
        session.tick();
        ticks += 1;
        assert!(ticks < 200_000, "Match should end");
    }

    let score = session.score();
    let winner = session.winner().expect("Finished match has a winner");
    match winner {
        Side::Left => {
            assert_eq!(score.left, 5, "Winner holds exactly the target");
            assert!(score.right < 5);
        }
        Side::Right => {
            assert_eq!(score.right, 5, "Winner holds exactly the target");
            assert!(score.left < 5);
        }
    }
}

#[test]
fn test_match_replays_deterministically_from_seed() {
    let run = |seed: u64| {
        let mut session = Session::new(seed);
        session.start();
        let mut events_log = Vec::new();
        for _ in 0..2_000 {
            let events = session.tick();
            events_log.push((
                events.wall_bounce,
                events.paddle_bounce,
                events.left_scored,
                events.right_scored,
            ));
            if session.phase() == Phase::GameOver {
                break;
            }
        }
        (events_log, session.score().left, session.score().right)
    };

    assert_eq!(run(77), run(77), "Same seed, same match");
}

#[test]
fn test_restart_after_full_match() {
    let mut session = Session::new(9);
    session.start();
    let mut ticks = 0;
    while session.phase() == Phase::Playing {
        session.tick();
        ticks += 1;
        assert!(ticks < 200_000, "Match should end");
    }

    assert!(session.restart());
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.score().left, 0);
    assert_eq!(session.score().right, 0);
    assert_eq!(session.court().ball.pos, session.config().center());
}
