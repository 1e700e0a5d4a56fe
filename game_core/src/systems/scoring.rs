use crate::{Ball, Config, Events, Score};
use hecs::World;

/// Award a point when the ball centre leaves the board horizontally.
///
/// Both edges compare the centre, not the ball's edge: left exit is `x < 0`,
/// right exit is `x > width`. Only the ball is reset.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_computer();
            events.computer_scored = true;
            reset_after_point(ball, config);
        } else if ball.pos.x > config.board.width {
            score.increment_player();
            events.player_scored = true;
            reset_after_point(ball, config);
        }
    }

    if events.score_changed() {
        log::debug!("score {} - {}", score.player, score.computer);
    }
}

fn reset_after_point(ball: &mut Ball, config: &Config) {
    ball.reset(&config.ball_spawn);
}
