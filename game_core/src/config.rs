use crate::{Board, Params, Side};
use glam::Vec2;

/// Fixed geometry and speed of one paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleSpec {
    pub x: f32,
    pub y: f32, // Starting top edge
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

/// Where the ball starts, and where it returns after every point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board: Board,
    pub player_paddle: PaddleSpec,
    pub computer_paddle: PaddleSpec,
    pub ball_radius: f32,
    pub ball_spawn: BallSpawn,
    pub speed_increment: f32,
    pub collision_buffer: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Board::new(Params::BOARD_WIDTH, Params::BOARD_HEIGHT),
            player_paddle: PaddleSpec {
                x: Params::PLAYER_PADDLE_X,
                y: Params::PADDLE_START_Y,
                width: Params::PADDLE_WIDTH,
                height: Params::PADDLE_HEIGHT,
                speed: Params::PLAYER_PADDLE_SPEED,
            },
            computer_paddle: PaddleSpec {
                x: Params::COMPUTER_PADDLE_X,
                y: Params::PADDLE_START_Y,
                width: Params::PADDLE_WIDTH,
                height: Params::PADDLE_HEIGHT,
                speed: Params::COMPUTER_PADDLE_SPEED,
            },
            ball_radius: Params::BALL_RADIUS,
            ball_spawn: BallSpawn {
                pos: Vec2::new(Params::BALL_SPAWN_X, Params::BALL_SPAWN_Y),
                vel: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            },
            speed_increment: Params::BALL_SPEED_INCREMENT,
            collision_buffer: Params::COLLISION_BUFFER,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning on a differently sized board.
    ///
    /// Paddle positions and the ball spawn are not rescaled.
    pub fn with_board(width: f32, height: f32) -> Self {
        Self {
            board: Board::new(width, height),
            ..Self::default()
        }
    }

    /// Paddle spec for a side (left = player, right = computer)
    pub fn paddle_spec(&self, side: Side) -> PaddleSpec {
        match side {
            Side::Left => self.player_paddle,
            Side::Right => self.computer_paddle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference_layout() {
        let config = Config::new();
        assert_eq!(config.board.width, 800.0);
        assert_eq!(config.board.height, 600.0);
        assert_eq!(config.paddle_spec(Side::Left).x, 20.0);
        assert_eq!(config.paddle_spec(Side::Right).x, 770.0);
        assert_eq!(config.paddle_spec(Side::Left).speed, 5.0);
        assert_eq!(config.paddle_spec(Side::Right).speed, 3.0);
        assert_eq!(config.ball_spawn.pos, Vec2::new(400.0, 300.0));
        assert_eq!(config.ball_spawn.vel, Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_with_board_keeps_spawn_constants() {
        let config = Config::with_board(1024.0, 768.0);
        assert_eq!(config.board.width, 1024.0);
        assert_eq!(config.board.height, 768.0);
        assert_eq!(
            config.ball_spawn.pos,
            Vec2::new(400.0, 300.0),
            "Ball spawn is not derived from the board size"
        );
    }
}
