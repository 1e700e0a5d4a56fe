pub mod board;
pub mod components;
pub mod config;
pub mod latch;
pub mod params;
pub mod resources;
pub mod session;
pub mod state;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use latch::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by exactly one tick.
///
/// The order is fixed: player paddle, opponent paddle, ball, wall bounce,
/// paddle hits, scoring. Event flags describe this tick only.
pub fn step(state: &mut GameState, input: PaddleInput) {
    let GameState {
        world,
        config,
        score,
        events,
        tick,
    } = state;

    // Clear events at start of tick
    events.clear();

    // 1. Player paddle follows the latched keys
    ingest_input(world, input);
    move_keyboard_paddles(world, &config.board);

    // 2. Opponent chases the ball's current y
    track_ball(world);
    move_tracking_paddles(world, &config.board);

    // 3. Move ball
    move_ball(world);

    // 4. Walls, then paddles
    bounce_off_walls(world, &config.board, events);
    check_paddle_hits(world, config, events);

    // 5. Check scoring (ball exited the board)
    check_scoring(world, config, score, events);

    *tick += 1;
}

/// Helper to create a paddle entity
pub fn spawn_paddle(world: &mut World, side: Side, config: &Config, control: Control) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, config.paddle_spec(side)),
        PaddleIntent::new(),
        control,
    ))
}

/// Helper to create the ball entity
pub fn spawn_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
