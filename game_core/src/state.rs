use hecs::World;

use crate::{spawn_ball, spawn_paddle, Ball, Board, Config, Control, Events, Paddle, Score, Side};

/// Everything one game session simulates. Owned by the driver and passed to
/// [`crate::step`] once per tick.
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events, // Flags from the last tick only
    pub tick: u64,
}

/// Read-only copy of the simulation handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub board: Board,
    pub player_paddle: Paddle,
    pub computer_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Fresh session: keyboard paddle on the left, ball-tracking paddle on the
    /// right, ball on its spawn point.
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Left, &config, Control::Keyboard);
        spawn_paddle(&mut world, Side::Right, &config, Control::TrackBall);
        spawn_ball(
            &mut world,
            config.ball_spawn.pos,
            config.ball_spawn.vel,
            config.ball_radius,
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            tick: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Copy out the current frame. Missing entities fall back to their spawn state.
    pub fn snapshot(&self) -> Snapshot {
        let paddle_at_spawn = |side| Paddle::new(side, self.config.paddle_spec(side));
        let ball_at_spawn = Ball::new(
            self.config.ball_spawn.pos,
            self.config.ball_spawn.vel,
            self.config.ball_radius,
        );

        Snapshot {
            tick: self.tick,
            board: self.config.board,
            player_paddle: self
                .paddle(Side::Left)
                .unwrap_or_else(|| paddle_at_spawn(Side::Left)),
            computer_paddle: self
                .paddle(Side::Right)
                .unwrap_or_else(|| paddle_at_spawn(Side::Right)),
            ball: self.ball().unwrap_or(ball_at_spawn),
            score: self.score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_initial_state_matches_config() {
        let state = GameState::default();
        let snapshot = state.snapshot();

        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.score, Score::new());
        assert_eq!(snapshot.player_paddle.x, 20.0);
        assert_eq!(snapshot.player_paddle.y, 250.0);
        assert_eq!(snapshot.player_paddle.speed, 5.0);
        assert_eq!(snapshot.computer_paddle.x, 770.0);
        assert_eq!(snapshot.computer_paddle.y, 250.0);
        assert_eq!(snapshot.computer_paddle.speed, 3.0);
        assert_eq!(snapshot.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(snapshot.ball.vel, Vec2::new(5.0, 3.0));
        assert_eq!(snapshot.ball.radius, 10.0);
    }

    #[test]
    fn test_exactly_one_ball_and_two_paddles() {
        let state = GameState::default();
        assert_eq!(state.world.query::<&Ball>().iter().count(), 1);
        assert_eq!(state.world.query::<&Paddle>().iter().count(), 2);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut state = GameState::default();
        let before = state.snapshot();

        for (_e, ball) in state.world.query_mut::<&mut Ball>() {
            ball.pos.x = 10.0;
        }

        assert_eq!(before.ball.pos.x, 400.0);
        assert_eq!(state.snapshot().ball.pos.x, 10.0);
    }

    #[test]
    fn test_snapshot_falls_back_to_spawn_when_world_is_empty() {
        let mut state = GameState::default();
        state.world.clear();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.player_paddle.y, 250.0);
        assert_eq!(snapshot.ball.pos, Vec2::new(400.0, 300.0));
    }
}
