use crate::{BallSpawn, PaddleSpec};
use glam::Vec2;

/// Which edge of the board a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Follows the input latch
    Keyboard,
    /// Follows the ball (opponent policy)
    TrackBall,
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // Top edge
    pub width: f32,
    pub height: f32,
    pub speed: f32, // Units per tick
}

impl Paddle {
    pub fn new(side: Side, spec: PaddleSpec) -> Self {
        Self {
            side,
            x: spec.x,
            y: spec.y,
            width: spec.width,
            height: spec.height,
            speed: spec.speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Ball component. `pos` is the centre, `radius` the collision size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Put the ball back on its spawn point with the spawn velocity
    pub fn reset(&mut self, spawn: &BallSpawn) {
        self.pos = spawn.pos;
        self.vel = spawn.vel;
    }
}

/// Movement intent for a paddle, refreshed every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up() -> Self {
        Self {
            up: true,
            down: false,
        }
    }

    pub fn down() -> Self {
        Self {
            up: false,
            down: true,
        }
    }
}
