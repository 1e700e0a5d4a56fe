use hecs::World;

use crate::components::*;

/// Opponent policy: chase the ball's y with no prediction and no dead zone.
///
/// Down when the ball is strictly below the paddle centre, up otherwise.
pub fn tracking_intent(paddle: &Paddle, ball_y: f32) -> PaddleIntent {
    if ball_y > paddle.center_y() {
        PaddleIntent::down()
    } else {
        PaddleIntent::up()
    }
}

/// Set the intent of every ball-tracking paddle from the current ball position
pub fn track_ball(world: &mut World) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, (paddle, intent, control)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &Control)>()
    {
        if *control == Control::TrackBall {
            *intent = tracking_intent(paddle, ball_y);
        }
    }
}
