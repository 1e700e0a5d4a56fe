/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,   // Left paddle, keyboard
    pub computer: u32, // Right paddle, ball tracking
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn score_changed(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}
