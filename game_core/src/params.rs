/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board (canvas pixels, origin top-left, y grows downward)
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_START_Y: f32 = 250.0;
    pub const PLAYER_PADDLE_X: f32 = 20.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 5.0; // units per tick
    pub const COMPUTER_PADDLE_X: f32 = 770.0;
    pub const COMPUTER_PADDLE_SPEED: f32 = 3.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPAWN_X: f32 = 400.0;
    pub const BALL_SPAWN_Y: f32 = 300.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 3.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.05; // Added to each axis on paddle hit

    // Collision
    pub const COLLISION_BUFFER: f32 = 5.0;
}
