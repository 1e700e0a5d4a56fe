//! Driver glue between the simulation and its collaborators
//!
//! The tick source (an animation-frame callback, a timer, a test loop) calls
//! [`LocalGame::frame`] or [`LocalGame::tick`] once per logical tick. The core
//! never loops or schedules on its own.

use thiserror::Error;

use crate::{step, Config, GameState, InputLatch, Score, Snapshot};

/// Why a score report could not be handed off
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to encode score update: {0}")]
    Encode(String),
    #[error("score transport unavailable: {0}")]
    Transport(String),
}

/// Outbound score reporting. Must return without waiting on the remote side.
pub trait ScoreSync {
    fn report(&mut self, score: Score) -> Result<(), SyncError>;
}

/// Draws one frame from a snapshot. Never sees the mutable state.
pub trait RenderAdapter {
    fn draw(&mut self, snapshot: &Snapshot) -> Result<(), String>;
}

/// Score sync that goes nowhere, for offline play
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSync;

impl ScoreSync for NoSync {
    fn report(&mut self, _score: Score) -> Result<(), SyncError> {
        Ok(())
    }
}

/// One local game session: player against the ball-tracking opponent
pub struct LocalGame<S: ScoreSync> {
    state: GameState,
    latch: InputLatch,
    sync: S,
    paused: bool,
    dropped_syncs: u64,
}

impl<S: ScoreSync> LocalGame<S> {
    pub fn new(config: Config, sync: S) -> Self {
        log::info!(
            "starting local game on {}x{} board",
            config.board.width,
            config.board.height
        );
        Self {
            state: GameState::new(config),
            latch: InputLatch::new(),
            sync,
            paused: false,
            dropped_syncs: 0,
        }
    }

    /// Latch for key events to write into
    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            log::info!("game {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Score reports that failed to hand off and were dropped
    pub fn dropped_syncs(&self) -> u64 {
        self.dropped_syncs
    }

    /// Advance one tick unless paused. Returns whether the simulation stepped.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let input = self.latch.read();
        step(&mut self.state, input);

        if self.state.events.score_changed() {
            if let Err(e) = self.sync.report(self.state.score) {
                self.dropped_syncs += 1;
                log::warn!("dropping score sync: {e}");
            }
        }

        true
    }

    /// Tick, then draw the resulting snapshot
    pub fn frame<R: RenderAdapter>(&mut self, renderer: &mut R) -> Result<(), String> {
        self.tick();
        renderer.draw(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ball;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingSync {
        reports: Rc<RefCell<Vec<Score>>>,
    }

    impl ScoreSync for RecordingSync {
        fn report(&mut self, score: Score) -> Result<(), SyncError> {
            self.reports.borrow_mut().push(score);
            Ok(())
        }
    }

    struct FailingSync;

    impl ScoreSync for FailingSync {
        fn report(&mut self, _score: Score) -> Result<(), SyncError> {
            Err(SyncError::Transport("offline".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Snapshot>,
    }

    impl RenderAdapter for RecordingRenderer {
        fn draw(&mut self, snapshot: &Snapshot) -> Result<(), String> {
            self.frames.push(*snapshot);
            Ok(())
        }
    }

    struct BrokenRenderer;

    impl RenderAdapter for BrokenRenderer {
        fn draw(&mut self, _snapshot: &Snapshot) -> Result<(), String> {
            Err("surface lost".to_string())
        }
    }

    /// Send the ball straight out of the right edge on the next tick
    fn force_player_point<S: ScoreSync>(game: &mut LocalGame<S>) {
        for (_e, ball) in game.state.world.query_mut::<&mut Ball>() {
            ball.pos.x = 799.0;
            ball.pos.y = 20.0; // Above the computer paddle
            ball.vel.x = 5.0;
        }
    }

    #[test]
    fn test_tick_reads_latch() {
        let mut game = LocalGame::new(Config::new(), NoSync);
        game.latch().set_up(true);

        assert!(game.tick());

        assert_eq!(game.snapshot().player_paddle.y, 245.0);
        assert_eq!(game.snapshot().tick, 1);
    }

    #[test]
    fn test_score_reported_once_per_point() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let mut game = LocalGame::new(
            Config::new(),
            RecordingSync {
                reports: reports.clone(),
            },
        );

        // No score change, no report
        game.tick();
        assert!(reports.borrow().is_empty());

        force_player_point(&mut game);
        game.tick();
        game.tick();

        assert_eq!(
            *reports.borrow(),
            vec![Score {
                player: 1,
                computer: 0
            }]
        );
    }

    #[test]
    fn test_failed_sync_does_not_affect_simulation() {
        let mut failing = LocalGame::new(Config::new(), FailingSync);
        let mut offline = LocalGame::new(Config::new(), NoSync);

        force_player_point(&mut failing);
        force_player_point(&mut offline);
        for _ in 0..50 {
            failing.tick();
            offline.tick();
        }

        assert_eq!(failing.snapshot(), offline.snapshot());
        assert_eq!(failing.score().player, 1);
        assert_eq!(failing.dropped_syncs(), 1);
        assert_eq!(offline.dropped_syncs(), 0);
    }

    #[test]
    fn test_paused_game_does_not_step() {
        let mut game = LocalGame::new(Config::new(), NoSync);
        assert!(game.toggle_pause());
        game.latch().set_down(true);

        assert!(!game.tick());
        assert_eq!(game.snapshot().tick, 0);
        assert_eq!(game.snapshot().player_paddle.y, 250.0);

        game.set_paused(false);
        assert!(game.tick());
        assert_eq!(game.snapshot().player_paddle.y, 255.0);
    }

    #[test]
    fn test_frame_draws_post_step_snapshot() {
        let mut game = LocalGame::new(Config::new(), NoSync);
        let mut renderer = RecordingRenderer::default();

        game.frame(&mut renderer).unwrap();
        game.frame(&mut renderer).unwrap();

        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[0].tick, 1);
        assert_eq!(renderer.frames[1].tick, 2);
        assert_eq!(renderer.frames[1].ball.pos.x, 410.0);
    }

    #[test]
    fn test_render_error_is_returned_after_step() {
        let mut game = LocalGame::new(Config::new(), NoSync);

        let result = game.frame(&mut BrokenRenderer);

        assert_eq!(result, Err("surface lost".to_string()));
        assert_eq!(game.snapshot().tick, 1, "Simulation still advanced");
    }
}
