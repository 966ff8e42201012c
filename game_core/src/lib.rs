pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use resources::*;
pub use session::*;

use systems::*;

/// Run one tick of the deterministic Pong simulation.
///
/// Pure in the court state: the caller's value is left untouched and the
/// advanced state is returned together with the events the tick emitted.
/// Randomness (serve direction, bounce jitter) comes only from the injected
/// rng, so a fixed seed replays a fixed match.
pub fn step(
    court: &CourtState,
    actions: &ActionState,
    config: &Config,
    rng: &mut GameRng,
) -> (CourtState, Events) {
    let mut next = *court;
    let mut events = Events::new();

    // 1. Move paddles from held actions
    move_paddles(&mut next, actions, config);

    // 2. Move ball
    move_ball(&mut next);

    // 3. Bounce off walls, then paddles
    bounce_walls(&mut next, config, &mut events);
    bounce_paddles(&mut next, &mut events, rng);

    // 4. Scoring (ball reached an edge)
    check_scoring(&mut next, config, &mut events, rng);

    (next, events)
}
