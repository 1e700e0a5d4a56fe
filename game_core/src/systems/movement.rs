use crate::{Ball, Board, Control, Paddle, PaddleIntent};
use hecs::World;

/// Move keyboard paddles by their intent.
///
/// Both directions are independent checks against the y the paddle had before
/// this tick. The guards are the only bound: there is no clamp afterwards.
pub fn move_keyboard_paddles(world: &mut World, board: &Board) {
    for (_entity, (paddle, intent, control)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, &Control)>()
    {
        if *control != Control::Keyboard {
            continue;
        }

        let start_y = paddle.y;
        if intent.up && start_y > 0.0 {
            paddle.y -= paddle.speed;
        }
        if intent.down && start_y < board.max_paddle_y(paddle.height) {
            paddle.y += paddle.speed;
        }
    }
}

/// Move ball-tracking paddles by their intent, then hard clamp to the board
pub fn move_tracking_paddles(world: &mut World, board: &Board) {
    for (_entity, (paddle, intent, control)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, &Control)>()
    {
        if *control != Control::TrackBall {
            continue;
        }

        if intent.down {
            paddle.y += paddle.speed;
        } else if intent.up {
            paddle.y -= paddle.speed;
        }

        paddle.y = board.clamp_paddle_y(paddle.y, paddle.height);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
