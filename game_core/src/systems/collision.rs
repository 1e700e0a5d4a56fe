use crate::{Ball, Board, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Reflect the ball off the top and bottom walls.
///
/// Only the vertical velocity flips. The position is left as is, so a ball may
/// sit past the wall for a tick.
pub fn bounce_off_walls(world: &mut World, board: &Board, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y >= board.height - ball.radius {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Hit test between the ball and one paddle, widened horizontally by `buffer`
pub fn paddle_hit(ball: &Ball, paddle: &Paddle, buffer: f32) -> bool {
    let r = ball.radius;
    let overlaps_vertically = ball.pos.y + r >= paddle.y && ball.pos.y - r <= paddle.bottom();
    let reaches_face = match paddle.side {
        Side::Left => ball.pos.x - r <= paddle.x + paddle.width + buffer,
        Side::Right => ball.pos.x + r >= paddle.x - buffer,
    };
    reaches_face && overlaps_vertically
}

/// Grow both velocity components by `increment` away from zero.
///
/// Zero counts as negative.
pub fn escalate_speed(vel: &mut Vec2, increment: f32) {
    vel.x += increment * if vel.x > 0.0 { 1.0 } else { -1.0 };
    vel.y += increment * if vel.y > 0.0 { 1.0 } else { -1.0 };
}

/// Bounce the ball off paddles: left paddle first, then right.
///
/// Both tests run every tick, so a degenerate layout can register two hits.
pub fn check_paddle_hits(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !paddle_hit(ball, paddle, config.collision_buffer) {
                continue;
            }

            // Push ball back out in front of the paddle face
            ball.pos.x = match paddle.side {
                Side::Left => paddle.x + paddle.width + ball.radius,
                Side::Right => paddle.x - ball.radius,
            };
            ball.vel.x = -ball.vel.x;
            escalate_speed(&mut ball.vel, config.speed_increment);
            events.ball_hit_paddle = true;

            log::debug!(
                "ball hit {:?} paddle, velocity now ({:.2}, {:.2})",
                paddle.side,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}
