/// Playing field dimensions. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-edge y a paddle of `paddle_height` may take
    pub fn max_paddle_y(&self, paddle_height: f32) -> f32 {
        self.height - paddle_height
    }

    /// Clamp a paddle's top edge to the board.
    ///
    /// Not `f32::clamp`: that panics when the paddle is taller than the board.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        if y < 0.0 {
            0.0
        } else if y > self.max_paddle_y(paddle_height) {
            self.max_paddle_y(paddle_height)
        } else {
            y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_paddle_y() {
        let board = Board::new(800.0, 600.0);
        assert_eq!(board.clamp_paddle_y(-3.0, 100.0), 0.0);
        assert_eq!(board.clamp_paddle_y(503.0, 100.0), 500.0);
        assert_eq!(board.clamp_paddle_y(250.0, 100.0), 250.0);
    }

    #[test]
    fn test_clamp_paddle_taller_than_board_does_not_panic() {
        let board = Board::new(800.0, 50.0);
        assert_eq!(board.clamp_paddle_y(-10.0, 100.0), 0.0);
        assert_eq!(board.clamp_paddle_y(10.0, 100.0), -50.0);
    }
}
